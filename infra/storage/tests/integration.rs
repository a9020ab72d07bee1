use landing_storage::{Persistence, Storage, StorageError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Signup {
    course: String,
    email: String,
}

async fn disk() -> (tempfile::TempDir, Storage) {
    let tmp = tempfile::tempdir().unwrap();
    let storage = Storage::builder().root(tmp.path().join("local")).connect().await.unwrap();
    (tmp, storage)
}

#[tokio::test]
async fn values_survive_reconnect() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("local");

    let first = Storage::builder().root(&root).connect().await.unwrap();
    assert_eq!(first.persistence(), Persistence::Disk);
    first.set("userPreferences", r#"{"currency":"dzd"}"#).await.unwrap();
    drop(first);

    let second = Storage::builder().root(&root).create(false).connect().await.unwrap();
    assert_eq!(
        second.get("userPreferences").await.unwrap().as_deref(),
        Some(r#"{"currency":"dzd"}"#)
    );
}

#[tokio::test]
async fn overwrite_replaces_previous_value() {
    let (_tmp, storage) = disk().await;
    storage.set("referral", "first").await.unwrap();
    storage.set("referral", "second").await.unwrap();
    assert_eq!(storage.get("referral").await.unwrap().as_deref(), Some("second"));
}

#[tokio::test]
async fn missing_key_reads_as_none() {
    let (_tmp, storage) = disk().await;
    assert!(storage.get("courseNotifications").await.unwrap().is_none());
    assert!(!storage.remove("courseNotifications").await.unwrap());
}

#[tokio::test]
async fn json_list_roundtrip() {
    let (_tmp, storage) = disk().await;
    let list = vec![Signup { course: "Part 2".into(), email: "a@b.co".into() }];

    storage.save_json("courseNotifications", &list).await.unwrap();
    let loaded: Vec<Signup> = storage.load_json("courseNotifications").await.unwrap().unwrap();

    assert_eq!(loaded, list);
}

#[tokio::test]
async fn malformed_json_is_reported() {
    let (_tmp, storage) = disk().await;
    storage.set("courseNotifications", "not json").await.unwrap();

    let err = storage.load_json::<Vec<Signup>, _>("courseNotifications").await.unwrap_err();
    assert!(matches!(err, StorageError::Malformed { .. }));
}

#[tokio::test]
async fn invalid_keys_are_rejected_before_io() {
    let (_tmp, storage) = disk().await;
    let err = storage.set("../escape", "x").await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidKey { .. }));
}

#[tokio::test]
async fn keys_lists_only_values() {
    let (_tmp, storage) = disk().await;
    storage.set("userPreferences", "{}").await.unwrap();
    storage.set("courseNotifications", "[]").await.unwrap();
    let root = storage.root().unwrap().to_path_buf();
    std::fs::write(root.join("stray.txt"), b"ignored").unwrap();

    let keys = storage.keys().await.unwrap();
    let names: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
    assert_eq!(names, ["courseNotifications", "userPreferences"]);
}

#[tokio::test]
async fn connect_purges_stale_temp_files() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("local");
    std::fs::create_dir_all(&root).unwrap();
    let leftover = root.join("referral.val.landingtmp.3");
    std::fs::write(&leftover, b"partial").unwrap();

    let _storage = Storage::builder()
        .root(&root)
        .stale_after(std::time::Duration::ZERO)
        .connect()
        .await
        .unwrap();

    assert!(!leftover.exists());
}

#[tokio::test]
async fn memory_store_is_isolated_per_handle() {
    let a = Storage::memory();
    let b = Storage::memory();
    a.set("referral", "abc").await.unwrap();

    assert_eq!(a.clone().get("referral").await.unwrap().as_deref(), Some("abc"));
    assert!(b.get("referral").await.unwrap().is_none());
}
