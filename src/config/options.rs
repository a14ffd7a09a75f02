use std::path::PathBuf;

use clap::Args;

/// 插件的命令行选项组
///
/// 宿主二进制用 #[command(flatten)] 嵌进自己的解析器即可。
/// 所有选项都可选，缺一个上报就整体静默关闭，见 RunConfig。
#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "runna")]
pub struct ReportOptions {
    /// Path to the file where the collection will be dumped
    #[arg(long = "collection-output", value_name = "path")]
    pub collection_output: Option<PathBuf>,

    /// URL to the collection summary API endpoint
    #[arg(long = "report-url-api-collection", value_name = "url")]
    pub report_url_api_collection: Option<String>,

    /// URL to the per-test result API endpoint
    #[arg(long = "report-url-api-test", value_name = "url")]
    pub report_url_api_test: Option<String>,

    /// Reserved finalizer API endpoint, currently unused
    #[arg(long = "report-url-api-finalizer", value_name = "url")]
    pub report_url_api_finalizer: Option<String>,

    /// API username to be authenticated
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// Token to authenticate the user
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// Test run identification
    #[arg(long = "test-run-id", value_name = "id")]
    pub test_run_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // 模拟宿主解析器
    #[derive(Parser)]
    struct HostCli {
        #[command(flatten)]
        report: ReportOptions,
    }

    #[test]
    fn test_parse_all_options() {
        let cli = HostCli::try_parse_from([
            "host",
            "--collection-output",
            "out/tests.txt",
            "--report-url-api-collection",
            "https://reports.example.com/api/collections/",
            "--report-url-api-test",
            "https://reports.example.com/api/tests/",
            "-u",
            "qa-bot",
            "-t",
            "s3cr3t",
            "--test-run-id",
            "nightly-42",
        ])
        .unwrap();

        let report = cli.report;
        assert_eq!(report.collection_output.unwrap(), PathBuf::from("out/tests.txt"));
        assert_eq!(
            report.report_url_api_collection.as_deref(),
            Some("https://reports.example.com/api/collections/")
        );
        assert_eq!(
            report.report_url_api_test.as_deref(),
            Some("https://reports.example.com/api/tests/")
        );
        assert_eq!(report.report_url_api_finalizer, None);
        assert_eq!(report.username.as_deref(), Some("qa-bot"));
        assert_eq!(report.token.as_deref(), Some("s3cr3t"));
        assert_eq!(report.test_run_id.as_deref(), Some("nightly-42"));
    }

    #[test]
    fn test_all_options_are_optional() {
        let cli = HostCli::try_parse_from(["host"]).unwrap();
        assert!(cli.report.collection_output.is_none());
        assert!(cli.report.test_run_id.is_none());
    }

    #[test]
    fn test_finalizer_option_is_accepted() {
        let cli = HostCli::try_parse_from([
            "host",
            "--report-url-api-finalizer",
            "https://reports.example.com/api/finalize/",
        ])
        .unwrap();
        assert_eq!(
            cli.report.report_url_api_finalizer.as_deref(),
            Some("https://reports.example.com/api/finalize/")
        );
    }
}
