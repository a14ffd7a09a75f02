use tracing::debug;

use crate::Result;
use crate::collection::{TestItem, write_collection};
use crate::config::RunConfig;
use crate::hooks::TestLifecycle;
use crate::report::client::ReportClient;
use crate::report::host::HostInfo;
use crate::report::types::PhaseReport;

/// 上报插件: 绑定一次运行的配置，实现两个生命周期钩子
///
/// 必填配置不齐时两个钩子都静默跳过 HTTP，收集文件照常写。
/// 开关每次钩子触发时重新判断，不缓存。
pub struct ReportPlugin {
    config: RunConfig,
    client: ReportClient,
}

impl ReportPlugin {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            client: ReportClient::new(),
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// 收集完成后的汇总上报: 全部 node id + 主机元数据
    fn post_collection(&self, items: &[TestItem]) -> Result<()> {
        let (Some(url), Some(username), Some(token), Some(run_id)) = (
            self.config.collection_url.as_deref(),
            self.config.username.as_deref(),
            self.config.token.as_deref(),
            self.config.run_id.as_deref(),
        ) else {
            return Ok(());
        };

        let host = HostInfo::collect();
        let mut form: Vec<(&str, String)> = Vec::with_capacity(items.len() + 6);
        form.push(("run_test_id", run_id.to_string()));
        // test_list 每个 node id 重复一次 key，标准表单数组编码
        for item in items {
            form.push(("test_list", item.node_id().to_string()));
        }
        form.push(("sys_name", host.sys_name));
        form.push(("hostname", host.hostname));
        form.push(("sys_release", host.sys_release));
        form.push(("sys_version", host.sys_version));
        form.push(("sys_machine", host.sys_machine));

        debug!("Posting collection of {} tests to {}", items.len(), url);
        self.client.post_form(url, (username, token), &form)
    }

    /// 单个阶段的结果上报
    fn post_phase(&self, item: &TestItem, report: &PhaseReport) -> Result<()> {
        let (Some(url), Some(username), Some(token), Some(run_id)) = (
            self.config.test_url.as_deref(),
            self.config.username.as_deref(),
            self.config.token.as_deref(),
            self.config.run_id.as_deref(),
        ) else {
            return Ok(());
        };

        let extra_info = serde_json::to_string(&item.properties().to_json_object())?;

        let form: Vec<(&str, String)> = vec![
            ("run_test_id", run_id.to_string()),
            ("result", report.result_label().to_string()),
            ("node_id", item.node_id().to_string()),
            ("step", report.phase.as_str().to_string()),
            ("duration", report.duration().to_string()),
            ("error", report.error_message()),
            ("extra_info", extra_info),
        ];

        debug!("Posting {} result for {} to {}", report.phase, item.node_id(), url);
        self.client.post_form(url, (username, token), &form)
    }
}

impl TestLifecycle for ReportPlugin {
    fn on_collection_finished(&self, items: &[TestItem]) -> Result<()> {
        // 写文件不依赖上报开关，只看有没有配置输出路径
        write_collection(self.config.collection_output.as_deref(), items)?;

        if self.config.report_enabled() {
            self.post_collection(items)?;
        }
        Ok(())
    }

    fn on_test_report(&self, item: &TestItem, report: &PhaseReport) -> Result<()> {
        if !self.config.report_enabled() {
            return Ok(());
        }
        self.post_phase(item, report)
    }
}
