use runna::collection::{Location, TestItem};
use runna::config::RunConfig;
use runna::fixtures::ComponentLog;
use runna::hooks::TestLifecycle;
use runna::report::{Phase, PhaseReport, ReportPlugin};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{basic_auth, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn full_config(server_uri: &str) -> RunConfig {
    RunConfig {
        collection_output: None,
        collection_url: Some(format!("{}/api/collections/", server_uri)),
        test_url: Some(format!("{}/api/tests/", server_uri)),
        finalizer_url: None,
        username: Some("qa-bot".to_string()),
        token: Some("s3cr3t".to_string()),
        run_id: Some("run-1".to_string()),
    }
}

fn login_item() -> TestItem {
    TestItem::new(
        "tests/auth.rs::test_login",
        Location::new("tests/auth.rs", Some(14), "test_login"),
    )
}

/// 阻塞客户端不能在异步上下文里直接用
async fn run_blocking<F>(f: F) -> runna::Result<()>
where
    F: FnOnce() -> runna::Result<()> + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_phase_posts_fail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tests/"))
        .and(basic_auth("qa-bot", "s3cr3t"))
        .and(body_string_contains("run_test_id=run-1"))
        .and(body_string_contains("result=FAIL"))
        .and(body_string_contains("node_id=tests%2Fauth.rs%3A%3Atest_login"))
        .and(body_string_contains("step=call"))
        .and(body_string_contains("duration=0.5"))
        .and(body_string_contains("error=AssertionError%3A+boom"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = full_config(&server.uri());
    let item = login_item();
    let report = PhaseReport::failed(Phase::Call, 3.0, 3.5, "AssertionError", "boom");

    run_blocking(move || ReportPlugin::new(config).on_test_report(&item, &report))
        .await
        .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_passed_phase_posts_pass_with_empty_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tests/"))
        .and(body_string_contains("result=PASS"))
        .and(body_string_contains("step=teardown"))
        // error 为空串，紧跟 extra_info
        .and(body_string_contains("error=&extra_info="))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = full_config(&server.uri());
    let item = login_item();
    let report = PhaseReport::passed(Phase::Teardown, 8.0, 8.25);

    run_blocking(move || ReportPlugin::new(config).on_test_report(&item, &report))
        .await
        .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_component_log_appears_in_extra_info() {
    let server = MockServer::start().await;

    // {"log_extra":{"step":"login"}} 的表单编码
    Mock::given(method("POST"))
        .and(path("/api/tests/"))
        .and(body_string_contains(
            "extra_info=%7B%22log_extra%22%3A%7B%22step%22%3A%22login%22%7D%7D",
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = full_config(&server.uri());
    let item = login_item();
    let log = ComponentLog::new(&item);
    log.set("step", "login");
    let report = PhaseReport::passed(Phase::Call, 0.0, 0.1);

    run_blocking(move || ReportPlugin::new(config).on_test_report(&item, &report))
        .await
        .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_each_phase_reported_separately() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tests/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&server)
        .await;

    let config = full_config(&server.uri());
    let item = login_item();

    run_blocking(move || {
        let plugin = ReportPlugin::new(config);
        plugin.on_test_report(&item, &PhaseReport::passed(Phase::Setup, 0.0, 0.1))?;
        plugin.on_test_report(
            &item,
            &PhaseReport::failed(Phase::Call, 0.1, 0.6, "AssertionError", "boom"),
        )?;
        plugin.on_test_report(&item, &PhaseReport::passed(Phase::Teardown, 0.6, 0.7))
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_collection_finished_posts_summary() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/collections/"))
        .and(basic_auth("qa-bot", "s3cr3t"))
        .and(body_string_contains("run_test_id=run-1"))
        .and(body_string_contains("test_list=tests%2Fauth.rs%3A%3Atest_login"))
        .and(body_string_contains("test_list=tests%2Fauth.rs%3A%3Atest_logout"))
        .and(body_string_contains("sys_name="))
        .and(body_string_contains("hostname="))
        .and(body_string_contains("sys_release="))
        .and(body_string_contains("sys_version="))
        .and(body_string_contains("sys_machine="))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = full_config(&server.uri());
    let items = vec![
        login_item(),
        TestItem::new(
            "tests/auth.rs::test_logout",
            Location::new("tests/auth.rs", Some(32), "test_logout"),
        ),
    ];

    run_blocking(move || ReportPlugin::new(config).on_collection_finished(&items))
        .await
        .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_collection_finished_also_writes_file() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/collections/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let out: PathBuf = temp_dir.path().join("out.txt");

    let mut config = full_config(&server.uri());
    config.collection_output = Some(out.clone());
    let items = vec![login_item()];

    run_blocking(move || ReportPlugin::new(config).on_collection_finished(&items))
        .await
        .unwrap();

    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "tests/auth.rs test_login\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_partial_config_never_posts() {
    let server = MockServer::start().await;

    // 缺 token: 两个钩子都不许发请求
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = full_config(&server.uri());
    config.token = None;
    let item = login_item();

    run_blocking(move || {
        let plugin = ReportPlugin::new(config);
        plugin.on_collection_finished(std::slice::from_ref(&item))?;
        plugin.on_test_report(&item, &PhaseReport::passed(Phase::Call, 0.0, 0.1))
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_disabled_reporting_still_writes_collection_file() {
    let temp_dir = TempDir::new().unwrap();
    let out: PathBuf = temp_dir.path().join("out.txt");

    let config = RunConfig {
        collection_output: Some(out.clone()),
        ..RunConfig::default()
    };
    let items = vec![login_item()];

    run_blocking(move || ReportPlugin::new(config).on_collection_finished(&items))
        .await
        .unwrap();

    assert!(out.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_endpoint_propagates_error() {
    // 不重试也不吞错: 传输层失败原样抛给调用方
    let config = full_config("http://127.0.0.1:1");

    let items = vec![login_item()];
    let result = run_blocking(move || ReportPlugin::new(config).on_collection_finished(&items)).await;

    assert!(matches!(result, Err(runna::RunnaError::HttpError(_))));
}
