use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use xrkit_logger::{LevelFilter, Logger, LoggerError};

// The global subscriber can only be installed once per process, so the whole
// lifecycle is exercised in a single ordered test.
#[test]
#[serial]
fn file_logging_then_second_init_fails() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("integration-file-logging")
        .console(false)
        .path(&log_dir)
        .level(LevelFilter::INFO)
        .init()?;
    assert!(logger.guard().is_some(), "file output should own a worker guard");

    tracing::info!("hello from integration test");
    std::thread::sleep(Duration::from_millis(30));

    let err = Logger::builder()
        .name("integration-second")
        .init()
        .expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }));

    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");
    assert!(fs::metadata(&log_file)?.len() > 0, "log file should not be empty");

    Ok(())
}
