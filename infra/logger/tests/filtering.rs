use landing_logger::{LevelFilter, Logger, LoggerError};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn explicit_directives_select_crates() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let log_dir = tmp.path().join("logs");

    let err = Logger::builder()
        .name("landing-filtering")
        .env_filter("landing_showcase=loud")
        .init()
        .expect_err("malformed directive");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

    let logger = Logger::builder()
        .name("landing-filtering")
        .console(false)
        .directory(&log_dir)
        .level(LevelFilter::ERROR)
        .env_filter("landing_showcase=debug,warn")
        .init()?;

    tracing::debug!(target: "landing_showcase", currency = "dzd", "currency toggled");
    tracing::info!(target: "landing_storage", "value saved atomically");
    tracing::warn!(target: "landing_storage", "discarding malformed preferences");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let path = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");
    let contents = fs::read_to_string(path)?;

    assert!(contents.contains("currency toggled"));
    assert!(contents.contains("currency=\"dzd\""));
    assert!(contents.contains("discarding malformed preferences"));
    assert!(!contents.contains("value saved atomically"));
    assert!(!contents.contains('\u{1b}'), "file output must not carry ANSI colors");
    Ok(())
}
