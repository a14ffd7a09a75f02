use serde_json::{Map, Value};

use crate::collection::{PropertyBag, TestItem};
use crate::component::{ComponentProxy, ComponentRegistry};

/// component_log 写入的属性 key
pub const LOG_EXTRA_KEY: &str = "log_extra";

/// 每个测试一个新代理，新快照
///
/// 测试函数作用域: 用完即弃，兄弟测试之间互不可见
pub fn components(registry: &ComponentRegistry) -> ComponentProxy {
    ComponentProxy::new(registry)
}

/// 测试内的附加信息句柄
///
/// 构造时在测试项属性里登记一个空对象，之后每次 set
/// 都写进同一个对象，报告构建时读到的就是最终内容
pub struct ComponentLog {
    properties: PropertyBag,
}

impl ComponentLog {
    pub fn new(item: &TestItem) -> Self {
        let properties = item.properties().clone();
        properties.record(LOG_EXTRA_KEY, Value::Object(Map::new()));
        Self { properties }
    }

    /// 写一条附加信息，同名覆盖
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        self.properties.update(LOG_EXTRA_KEY, |slot| {
            if let Value::Object(map) = slot {
                map.insert(key, value);
            }
        });
    }
}
