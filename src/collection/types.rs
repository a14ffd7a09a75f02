use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde_json::Value;

/// 测试项的位置: 源文件 + 行号 + 可调用名称
///
/// 行号只用于展示，收集文件里只写 path 和 name
#[derive(Debug, Clone)]
pub struct Location {
    pub path: PathBuf,
    pub line: Option<usize>,
    pub name: String,
}

impl Location {
    pub fn new(path: impl Into<PathBuf>, line: Option<usize>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line,
            name: name.into(),
        }
    }
}

/// 测试期间挂在测试项上的自定义属性
///
/// 句柄共享同一份底层存储: fixture 在测试里写入的内容，
/// 报告构建时读同一个句柄就能看到
#[derive(Clone, Debug, Default)]
pub struct PropertyBag {
    entries: Arc<Mutex<Vec<(String, Value)>>>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条属性，重复 key 不去重
    pub fn record(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries
            .lock()
            .expect("property bag lock poisoned")
            .push((key.into(), value.into()));
    }

    /// 原地修改第一条匹配 key 的属性值
    pub fn update(&self, key: &str, f: impl FnOnce(&mut Value)) {
        let mut entries = self.entries.lock().expect("property bag lock poisoned");
        if let Some((_, value)) = entries.iter_mut().find(|(k, _)| k == key) {
            f(value);
        }
    }

    pub fn snapshot(&self) -> Vec<(String, Value)> {
        self.entries
            .lock()
            .expect("property bag lock poisoned")
            .clone()
    }

    /// 折叠成 JSON 对象，重复 key 后写的赢
    pub fn to_json_object(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (key, value) in self.snapshot() {
            map.insert(key, value);
        }
        Value::Object(map)
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .expect("property bag lock poisoned")
            .is_empty()
    }
}

/// 宿主框架发现的一个测试
///
/// 对本系统来说是只读输入，属性袋除外
#[derive(Debug, Clone)]
pub struct TestItem {
    node_id: String,
    location: Location,
    properties: PropertyBag,
}

impl TestItem {
    pub fn new(node_id: impl Into<String>, location: Location) -> Self {
        Self {
            node_id: node_id.into(),
            location,
            properties: PropertyBag::new(),
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    /// 挂一条自定义属性，会出现在该测试的报告 extra_info 里
    pub fn record_property(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.record(key, value);
    }
}
