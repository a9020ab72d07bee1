use landing_logger::{LevelFilter, Logger, LoggerError};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn failed_second_init_keeps_first_writer() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let log_dir = tmp.path().join("logs");

    let logger = Logger::builder()
        .name("landing-desktop")
        .console(false)
        .directory(&log_dir)
        .json(true)
        .level(LevelFilter::INFO)
        .init()?;

    let err = Logger::builder()
        .name("landing-desktop-again")
        .level(LevelFilter::DEBUG)
        .init()
        .expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }));

    tracing::debug!("dropped by the first logger's level");
    tracing::info!(event = "page_view", course = "part_1", "tracked");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let files: Vec<_> = fs::read_dir(&log_dir)?.flatten().map(|entry| entry.path()).collect();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().and_then(|n| n.to_str()).unwrap_or_default().to_owned();
    assert!(name.starts_with("landing-desktop"));
    assert!(name.ends_with(".log"));

    let contents = fs::read_to_string(&files[0])?;
    let lines: Vec<serde_json::Value> =
        contents.lines().map(serde_json::from_str).collect::<Result<_, _>>()?;
    let tracked = lines
        .iter()
        .find(|line| line["fields"]["message"] == "tracked")
        .expect("tracked event written as a JSON line");
    assert_eq!(tracked["fields"]["event"], "page_view");
    assert_eq!(tracked["fields"]["course"], "part_1");
    assert_eq!(tracked["level"], "INFO");
    assert!(!contents.contains("dropped by the first logger's level"));
    Ok(())
}
