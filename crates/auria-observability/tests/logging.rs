//! Global subscriber installation.

use auria_observability::{init_logging, LogFormat, LogLevel, LoggingConfig, ObservabilityError};

#[test]
fn test_json_logger_installs_once_per_process() {
    let config = LoggingConfig::default()
        .with_level(LogLevel::Warn)
        .with_format(LogFormat::Json);

    assert_eq!(init_logging(&config), Ok(()));
    tracing::warn!(collection = "rings", results = 0, "listing derived");

    let human = config.with_format(LogFormat::Human);
    assert_eq!(init_logging(&human), Err(ObservabilityError::AlreadyInitialized));
}
