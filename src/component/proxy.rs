use std::collections::HashMap;
use std::time::Instant;

use serde_json::Value;
use tracing::debug;

use crate::component::registry::{ComponentDescriptor, ComponentFn, ComponentRegistry};
use crate::{Result, RunnaError};

/// 组件注册表的只读代理
///
/// 构造时对注册表做一次快照，之后外部注册表怎么变都不影响
/// 已经创建的代理。每个测试用一个新代理，测试之间互不可见。
///
/// 两条访问路径:
/// - [`call`](Self::call): 常规路径，带参数/返回值/耗时的 debug 日志
/// - [`get`](Self::get): 逃生通道，拿裸函数，不产生任何日志开销
pub struct ComponentProxy {
    snapshot: HashMap<String, ComponentDescriptor>,
}

impl ComponentProxy {
    pub fn new(registry: &ComponentRegistry) -> Self {
        Self {
            snapshot: registry.snapshot(),
        }
    }

    /// 按名称调用组件，记录参数、返回值和执行耗时
    ///
    /// 返回值和错误都原样透传，这里不吞也不包装
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let Some(descriptor) = self.snapshot.get(name) else {
            return Err(RunnaError::ComponentNotFound(name.to_string()));
        };

        debug!("Calling {} with args {:?}", name, args);
        let start = Instant::now();
        let return_value = descriptor.call(args)?;
        let elapsed = start.elapsed();
        debug!("Return of {}: {:?}", name, return_value);
        debug!("Time to execute {}: {} seconds", name, elapsed.as_secs_f64());

        Ok(return_value)
    }

    /// 按名称取裸函数，不带日志/计时
    pub fn get(&self, name: &str) -> Result<&ComponentFn> {
        match self.snapshot.get(name) {
            Some(descriptor) => Ok(descriptor.function()),
            None => Err(RunnaError::InvalidComponent(name.to_string())),
        }
    }

    /// 快照不接受写入
    pub fn insert(&mut self, _name: &str, _descriptor: ComponentDescriptor) -> Result<()> {
        Err(RunnaError::ReadOnly)
    }

    /// 快照不接受删除
    pub fn remove(&mut self, _name: &str) -> Result<()> {
        Err(RunnaError::ReadOnly)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.snapshot.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.snapshot.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}
