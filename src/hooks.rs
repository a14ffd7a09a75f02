use once_cell::sync::OnceCell;

use crate::Result;
use crate::collection::TestItem;
use crate::config::RunConfig;
use crate::report::{PhaseReport, ReportPlugin};

/// 宿主框架的生命周期回调契约
///
/// 只有两个调用点: 收集结束一次，每个测试每个阶段一次
pub trait TestLifecycle: Send + Sync {
    fn on_collection_finished(&self, items: &[TestItem]) -> Result<()>;

    fn on_test_report(&self, item: &TestItem, report: &PhaseReport) -> Result<()>;
}

/// 上报插件的注册名
pub const REPORT_PLUGIN_NAME: &str = "runna_report";

/// 按注册顺序分发生命周期事件的钩子管理器
#[derive(Default)]
pub struct PluginManager {
    hooks: Vec<(String, Box<dyn TestLifecycle>)>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, hook: Box<dyn TestLifecycle>) {
        self.hooks.push((name.into(), hook));
    }

    pub fn hook_names(&self) -> Vec<&str> {
        self.hooks.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// 收集结束，按顺序通知所有钩子，第一个错误即中断
    pub fn collection_finished(&self, items: &[TestItem]) -> Result<()> {
        for (_, hook) in &self.hooks {
            hook.on_collection_finished(items)?;
        }
        Ok(())
    }

    /// 一个阶段报告生成，按顺序通知所有钩子
    pub fn test_report(&self, item: &TestItem, report: &PhaseReport) -> Result<()> {
        for (_, hook) in &self.hooks {
            hook.on_test_report(item, report)?;
        }
        Ok(())
    }
}

static MANAGER: OnceCell<PluginManager> = OnceCell::new();

/// 进程级初始化: 建管理器并注册上报插件
///
/// 整个运行期间只构造一次，重复调用返回同一个实例
pub fn configure(config: RunConfig) -> &'static PluginManager {
    MANAGER.get_or_init(|| {
        let mut manager = PluginManager::new();
        manager.register(REPORT_PLUGIN_NAME, Box::new(ReportPlugin::new(config)));
        manager
    })
}
