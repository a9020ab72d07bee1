use chrono::Utc;
use landing_domain::constants::PREFERENCES_KEY;
use landing_domain::currency::{Currency, UserPreferences};
use landing_domain::notification::NotificationRequest;
use landing_events::EventBus;
use landing_showcase::notify::NotificationLog;
use landing_showcase::preferences::PreferencesStore;
use landing_storage::Storage;
use std::sync::Arc;

async fn disk() -> (tempfile::TempDir, Storage) {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::builder().root(dir.path().join("local")).connect().await.unwrap();
    (dir, storage)
}

fn request(n: usize) -> NotificationRequest {
    NotificationRequest {
        course_title: "Part 2".into(),
        email: format!("visitor{n}@example.com"),
        timestamp: Utc::now(),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_signups_are_all_kept() {
    let (_dir, storage) = disk().await;
    let log = NotificationLog::new(storage);

    let tasks: Vec<_> = (0..32)
        .map(|n| {
            let log = log.clone();
            tokio::spawn(async move { log.append(request(n)).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let stored = log.list().await.unwrap();
    assert_eq!(stored.len(), 32);
    for n in 0..32 {
        assert!(stored.iter().any(|r| r.email == format!("visitor{n}@example.com")));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_toggles_leave_store_and_memory_in_agreement() {
    let (_dir, storage) = disk().await;
    let prefs = Arc::new(PreferencesStore::open(storage.clone(), EventBus::new()).await.unwrap());

    let tasks: Vec<_> = (0..24)
        .map(|n| {
            let prefs = Arc::clone(&prefs);
            let currency = if n % 2 == 0 { Currency::Dzd } else { Currency::Usd };
            tokio::spawn(async move { prefs.set_currency(currency).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let stored: UserPreferences = storage.load_json(PREFERENCES_KEY).await.unwrap().unwrap();
    assert_eq!(stored, prefs.get());
    assert_eq!(prefs.watch().unwrap().current().as_ref(), &stored);
}
