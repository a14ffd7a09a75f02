use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::Result;

/// 组件函数签名: 位置参数列表 -> 返回值
pub type ComponentFn = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// 一个已注册的组件: 名称 + 底层函数
///
/// 函数通过 Arc 共享，clone 描述符不会复制函数本身
#[derive(Clone)]
pub struct ComponentDescriptor {
    name: String,
    function: ComponentFn,
}

impl ComponentDescriptor {
    pub fn new<F>(name: impl Into<String>, function: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            function: Arc::new(function),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 裸函数，不带任何日志/计时
    pub fn function(&self) -> &ComponentFn {
        &self.function
    }

    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.function)(args)
    }
}

impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// 外部组件注册表
///
/// 由嵌入方在启动时填充，代理对象在构造时做一次快照
#[derive(Clone, Debug, Default)]
pub struct ComponentRegistry {
    components: HashMap<String, ComponentDescriptor>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个组件，同名覆盖
    pub fn register(&mut self, descriptor: ComponentDescriptor) {
        debug!(component = %descriptor.name(), "Registered component");
        self.components.insert(descriptor.name().to_string(), descriptor);
    }

    /// 注册闭包的便捷形式
    pub fn register_fn<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.register(ComponentDescriptor::new(name, function));
    }

    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.components.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// 当前内容的浅结构拷贝（函数共享，映射独立）
    pub(crate) fn snapshot(&self) -> HashMap<String, ComponentDescriptor> {
        self.components.clone()
    }
}
