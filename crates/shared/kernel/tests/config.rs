use landing_kernel::config::{ConfigError, load_config, load_config_with_env};
use landing_kernel::domain::config::SiteConfig;
use serial_test::serial;
use std::collections::HashMap;
use std::fs;

const SAMPLE: &str = r#"
[registration]
submit_delay_ms = 250

[showcase]
early_bird_deadline = "2031-06-30T12:00:00Z"
timezone = "Europe/Paris"

[logging]
level = "debug"
"#;

fn no_env() -> Option<HashMap<String, String>> {
    Some(HashMap::new())
}

#[test]
fn explicit_file_is_loaded() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("site.toml");
    fs::write(&path, SAMPLE).unwrap();

    let cfg: SiteConfig = load_config_with_env(Some(&path), no_env()).unwrap();

    assert_eq!(cfg.registration.submit_delay_ms, 250);
    assert_eq!(cfg.registration.alert_duration_ms, 5000);
    assert_eq!(cfg.showcase.timezone.as_deref(), Some("Europe/Paris"));
    assert_eq!(cfg.showcase.early_bird_deadline.to_rfc3339(), "2031-06-30T12:00:00+00:00");
    assert_eq!(cfg.logging.level, "debug");
}

#[test]
fn missing_explicit_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = load_config::<SiteConfig>(Some(tmp.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Config { .. }));
}

#[test]
fn environment_overrides_file_values() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("site.toml");
    fs::write(&path, SAMPLE).unwrap();

    let env = HashMap::from([
        ("LANDING__REGISTRATION__SUBMIT_DELAY_MS".to_owned(), "10".to_owned()),
        ("LANDING__STORAGE__DATA_DIR".to_owned(), "/var/lib/landing".to_owned()),
    ]);
    let cfg: SiteConfig = load_config_with_env(Some(&path), Some(env)).unwrap();

    assert_eq!(cfg.registration.submit_delay_ms, 10);
    assert_eq!(cfg.storage.data_dir, std::path::PathBuf::from("/var/lib/landing"));
    assert_eq!(cfg.showcase.timezone.as_deref(), Some("Europe/Paris"));
}

#[test]
#[serial]
fn default_file_is_optional() {
    let tmp = tempfile::tempdir().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(tmp.path()).unwrap();

    let result = load_config_with_env::<SiteConfig>(None::<&str>, no_env());

    std::env::set_current_dir(previous).unwrap();
    let cfg = result.unwrap();
    assert_eq!(cfg.registration.submit_delay_ms, 1500);
}

#[test]
#[serial]
fn default_file_is_picked_up_from_working_directory() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("landing.toml"), SAMPLE).unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(tmp.path()).unwrap();

    let result = load_config_with_env::<SiteConfig>(None::<&str>, no_env());

    std::env::set_current_dir(previous).unwrap();
    assert_eq!(result.unwrap().registration.submit_delay_ms, 250);
}
