//! End-to-end behaviour of options over a memory storage area

mod common;

use common::{local, RecordingStore};
use serde_json::json;
use std::sync::Arc;
use webext_options::options::{OptionHandle, Options, StoredOption};
use webext_options::storage::{self, LocalStorage, Records, StorageUnavailable};

fn theme_record(value: &str, default_value: &str) -> Records {
    let mut records = Records::new();
    records.insert(
        "theme".to_string(),
        StoredOption::new(value, default_value).to_record(),
    );
    records
}

#[tokio::test]
async fn test_theme_lifecycle() {
    let storage = LocalStorage::in_memory();
    let options = Options::new(storage.clone());

    let theme = options.option("theme", Some("dark")).await.unwrap();
    assert_eq!(theme.value().await.unwrap(), "dark");
    assert_eq!(theme.default_value().await.unwrap(), "dark");
    assert_eq!(
        storage.all().await.unwrap(),
        json!({"theme": {"currentValue": "dark", "defaultValue": "dark"}})
            .as_object()
            .cloned()
            .unwrap()
    );

    theme.update(|_| "light".to_string()).await.unwrap();
    assert_eq!(theme.value().await.unwrap(), "light");
    assert_eq!(theme.default_value().await.unwrap(), "dark");

    theme.reset().await.unwrap();
    assert_eq!(theme.value().await.unwrap(), "dark");
    assert_eq!(theme.default_value().await.unwrap(), "dark");
}

#[tokio::test]
async fn test_existing_option_keeps_persisted_default_without_writing() {
    let area = Arc::new(RecordingStore::with_records(theme_record("light", "dark")));
    let options = Options::new(local(area.clone()));

    let theme = options.option("theme", Some("blue")).await.unwrap();

    assert_eq!(theme.default_value().await.unwrap(), "dark");
    assert_eq!(theme.value().await.unwrap(), "light");
    assert_eq!(area.writes(), 0);
}

#[tokio::test]
async fn test_reads_never_write() {
    let area = Arc::new(RecordingStore::default());
    let storage = local(area.clone());

    let option = OptionHandle::with_default(storage.clone(), "theme", "dark");
    option.value().await.unwrap();
    option.default_value().await.unwrap();
    Options::new(storage).options().await.unwrap();

    assert_eq!(area.writes(), 0);
}

#[tokio::test]
async fn test_option_is_idempotent() {
    let area = Arc::new(RecordingStore::default());
    let options = Options::new(local(area.clone()));

    let first = options.option("theme", Some("dark")).await.unwrap();
    let second = options.option("theme", Some("dark")).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.value().await.unwrap(), second.value().await.unwrap());
    assert_eq!(
        first.default_value().await.unwrap(),
        second.default_value().await.unwrap()
    );
    assert_eq!(area.writes(), 1);
}

#[tokio::test]
async fn test_update_receives_previous_value() {
    let options = Options::new(LocalStorage::in_memory());
    let option = options.option("option-name-cs", Some("default-value")).await.unwrap();

    option.update(|v| format!("{}-updated", v)).await.unwrap();
    assert_eq!(option.value().await.unwrap(), "default-value-updated");

    option.update(|v| format!("{}-updated", v)).await.unwrap();
    assert_eq!(option.value().await.unwrap(), "default-value-updated-updated");
    assert_eq!(option.default_value().await.unwrap(), "default-value");
}

#[tokio::test]
async fn test_reset_uses_default_in_effect() {
    let storage = LocalStorage::new(Arc::new(
        webext_options::storage::MemoryStorage::with_records(theme_record("light", "dark")),
    ));
    // The handle's own default is never consulted for a stored option
    let option = OptionHandle::with_default(storage, "theme", "blue");

    option.reset().await.unwrap();

    assert_eq!(option.value().await.unwrap(), "dark");
    assert_eq!(option.default_value().await.unwrap(), "dark");
}

#[tokio::test]
async fn test_remove_then_option_reseeds() {
    let storage = LocalStorage::in_memory();
    let options = Options::new(storage.clone());

    let option = options.option("theme", Some("dark")).await.unwrap();
    option.update(|_| "light".to_string()).await.unwrap();
    options.remove("theme").await.unwrap();

    // A handle outliving removal falls back to its supplied default
    assert_eq!(option.value().await.unwrap(), "dark");
    assert!(storage.get("theme").await.unwrap().is_empty());

    let option = options.option("theme", Some("blue")).await.unwrap();
    assert_eq!(option.value().await.unwrap(), "blue");
    assert_eq!(option.default_value().await.unwrap(), "blue");

    options.remove("theme").await.unwrap();
    let option = options.option("theme", None).await.unwrap();
    assert_eq!(option.value().await.unwrap(), "");
    assert_eq!(option.default_value().await.unwrap(), "");
}

#[tokio::test]
async fn test_options_carry_persisted_defaults() {
    let mut records = theme_record("light", "dark");
    records.insert("partial".to_string(), json!({"currentValue": "x"}));
    records.insert("garbage".to_string(), json!(42));
    let storage = LocalStorage::new(Arc::new(
        webext_options::storage::MemoryStorage::with_records(records),
    ));

    let all = Options::new(storage).options().await.unwrap();

    let summary: Vec<_> = all
        .iter()
        .map(|option| (option.name(), option.supplied_default()))
        .collect();
    assert_eq!(
        summary,
        vec![("theme", "dark"), ("partial", ""), ("garbage", "")]
    );
    assert_eq!(all[1].value().await.unwrap(), "x");
    assert_eq!(all[2].value().await.unwrap(), "");
}

#[tokio::test]
async fn test_unavailable_storage_is_reported() {
    let options = Options::new(LocalStorage::unavailable());

    let err = options.option("theme", Some("dark")).await.unwrap_err();

    assert!(storage::is_unavailable(&err));
    let cause = err.downcast_ref::<StorageUnavailable>().unwrap();
    assert!(cause.reason().contains("storage"));
}
