//! Bootstrap runs against a mock application

use quantumflow::app::{AppConfig, MockApplication};
use quantumflow::bootstrap::{Outcome, run_application};
use quantumflow::cli::{InvocationOptions, parse_options};
use quantumflow::error::FlowError;

#[tokio::test]
async fn test_success_exits_zero_without_diagnostic() {
    let probe = MockApplication::default();
    let app = probe.clone();
    let options = parse_options(["-v", "-i", "in.txt", "-o", "out.txt"]);

    let outcome = run_application(options, move |config| app.configured(config)).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.exit_code(), 0);
    assert!(outcome.diagnostic().is_none());
    assert_eq!(probe.execute_calls(), 1);
}

#[tokio::test]
async fn test_failure_reports_error_once_and_exits_one() {
    let probe = MockApplication::default().failing_with("boom");
    let app = probe.clone();

    let outcome = run_application(InvocationOptions::default(), move |config| {
        app.configured(config)
    })
    .await;

    assert_eq!(outcome.exit_code(), 1);
    assert!(outcome.diagnostic().unwrap().contains("boom"));
    assert_eq!(probe.execute_calls(), 1);

    let Outcome::Failed(err) = outcome else {
        panic!("expected a failed outcome");
    };
    assert!(err.downcast_ref::<FlowError>().is_some());
}

#[tokio::test]
async fn test_application_receives_verbose_only() {
    let probe = MockApplication::default();
    let app = probe.clone();
    let options = InvocationOptions {
        verbose: true,
        input: Some("in.txt".to_string()),
        output: None,
    };

    run_application(options, move |config| app.configured(config)).await;

    assert_eq!(probe.received_config(), Some(AppConfig { verbose: true }));
}

#[tokio::test]
async fn test_any_error_value_is_fatal() {
    let outcome = run_application(InvocationOptions::default(), |_| Failing).await;

    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(outcome.diagnostic().as_deref(), Some("not a FlowError"));
}

#[tokio::test]
async fn test_shipped_application_succeeds() {
    let outcome = quantumflow::run(InvocationOptions::default()).await;

    assert!(outcome.is_success());
}

/// Application failing with an error type the crate knows nothing about
struct Failing;

impl quantumflow::app::Application for Failing {
    fn new(_config: AppConfig) -> Self {
        Self
    }

    async fn execute(&self) -> anyhow::Result<()> {
        Err(std::io::Error::other("not a FlowError").into())
    }
}
