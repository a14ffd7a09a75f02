use std::path::PathBuf;

use crate::config::file::ReportSection;
use crate::config::options::ReportOptions;

/// 一次测试运行的上报配置
///
/// 构造后不再变化。所有字段都可选: 少了哪个必填项，
/// 上报就整体关闭，这是特性开关而不是错误。
#[derive(Clone, Debug, Default)]
pub struct RunConfig {
    pub collection_output: Option<PathBuf>,
    pub collection_url: Option<String>,
    pub test_url: Option<String>,
    /// 保留字段，任何钩子都不消费它
    pub finalizer_url: Option<String>,
    pub username: Option<String>,
    pub token: Option<String>,
    pub run_id: Option<String>,
}

impl RunConfig {
    /// 只从命令行选项构造
    pub fn from_options(options: &ReportOptions) -> Self {
        Self::resolve(options, None)
    }

    /// 合并命令行与配置文件，命令行优先
    pub fn resolve(options: &ReportOptions, file: Option<&ReportSection>) -> Self {
        let file = file.cloned().unwrap_or_default();

        Self {
            collection_output: options
                .collection_output
                .clone()
                .or(file.collection_output),
            collection_url: clean(options.report_url_api_collection.as_deref())
                .or_else(|| clean(file.report_url_api_collection.as_deref())),
            test_url: clean(options.report_url_api_test.as_deref())
                .or_else(|| clean(file.report_url_api_test.as_deref())),
            finalizer_url: clean(options.report_url_api_finalizer.as_deref())
                .or_else(|| clean(file.report_url_api_finalizer.as_deref())),
            username: clean(options.username.as_deref()).or_else(|| clean(file.username.as_deref())),
            token: clean(options.token.as_deref()).or_else(|| clean(file.token.as_deref())),
            run_id: clean(options.test_run_id.as_deref())
                .or_else(|| clean(file.test_run_id.as_deref())),
        }
    }

    /// 上报是否开启: 两个 API 地址 + 用户名 + token + 运行 ID 全齐
    ///
    /// 每次钩子触发都重新判断，不缓存
    pub fn report_enabled(&self) -> bool {
        self.collection_url.is_some()
            && self.test_url.is_some()
            && self.username.is_some()
            && self.token.is_some()
            && self.run_id.is_some()
    }
}

/// 去掉首尾空白，空串视为未设置
fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
