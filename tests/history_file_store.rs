use chrono::Utc;
use shortn::error::ShortnError;
use shortn::history::HistoryStore;
use shortn::store::fs::{FileStore, HISTORY_FILENAME};
use shortn::store::DocumentStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, HistoryStore<FileStore>) {
    let dir = TempDir::new().unwrap();
    let history = HistoryStore::new(FileStore::new(dir.path().to_path_buf()));
    (dir, history)
}

fn document(dir: &TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(dir.path().join(HISTORY_FILENAME)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_add_persists_document_shape() {
    let (dir, mut history) = setup();
    let before = Utc::now();
    let entry = history
        .add("https://example.com/a?b=c", "https://tinyurl.com/x", "tinyurl")
        .unwrap();

    let doc = document(&dir);
    let items = doc["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], entry.id.as_str());
    assert_eq!(items[0]["longUrl"], "https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc");
    assert_eq!(items[0]["shortUrl"], "https://tinyurl.com/x");
    assert_eq!(items[0]["service"], "tinyurl");
    assert!(items[0]["date"].is_string());

    let read = history.read().unwrap();
    assert!(read[0].created_at >= before);
    assert_eq!(read[0].decoded_long_url(), "https://example.com/a?b=c");
}

#[test]
fn test_ordering_survives_reopen() {
    let (dir, mut history) = setup();
    for i in 0..10 {
        history
            .add(&format!("example.com/{}", i), &format!("s{}", i), "isgood")
            .unwrap();
    }

    let reopened = HistoryStore::new(FileStore::new(dir.path().to_path_buf()));
    let shorts: Vec<String> = reopened
        .read()
        .unwrap()
        .into_iter()
        .map(|e| e.short_url)
        .collect();
    let expected: Vec<String> = (0..10).rev().map(|i| format!("s{}", i)).collect();
    assert_eq!(shorts, expected);
}

#[test]
fn test_corrupt_file_recovery() {
    let (dir, mut history) = setup();
    history.add("a.com", "s1", "tinyurl").unwrap();
    fs::write(dir.path().join(HISTORY_FILENAME), "{\"items\": [ truncated").unwrap();

    assert!(history.read().is_none());
    assert!(matches!(
        history.remove("no-such-id"),
        Err(ShortnError::StoreCorruption(_))
    ));

    history.add("b.com", "s2", "tinyurl").unwrap();
    let items = history.read().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].short_url, "s2");
}

#[test]
fn test_remove_absent_id_keeps_bytes_equivalent() {
    let (dir, mut history) = setup();
    history.add("a.com", "s1", "tinyurl").unwrap();
    history.add("b.com", "s2", "tinyurl").unwrap();
    let before = document(&dir);

    history.remove("no-such-id").unwrap();
    assert_eq!(document(&dir), before);
}

#[test]
fn test_clear_without_existing_file() {
    let (dir, mut history) = setup();
    history.clear().unwrap();
    assert_eq!(document(&dir), serde_json::json!({"items": []}));
    assert!(history.read().is_none());
}

#[test]
fn test_reads_documents_from_older_releases() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf());
    store
        .save(
            r#"{"items": [{"id": "0b9a8c7d-6e5f-4a3b-8c2d-1e0f9a8b7c6d", "longUrl": "https%3A%2F%2Fexample.org%2F", "shortUrl": "https://is.gd/old", "service": "isgood", "date": "2018-11-05T08:15:30"}]}"#,
        )
        .unwrap();

    let history = HistoryStore::new(store);
    let items = history.read().unwrap();
    assert_eq!(items[0].decoded_long_url(), "https://example.org/");
    assert_eq!(items[0].created_at.to_rfc3339(), "2018-11-05T08:15:30+00:00");
}

#[test]
fn test_foreign_ids_are_kept_on_add() {
    let (dir, mut history) = setup();
    fs::write(
        dir.path().join(HISTORY_FILENAME),
        r#"{"items": [{"id": "legacy-1", "longUrl": "a.com", "shortUrl": "https://is.gd/a", "service": "isgood", "date": "2020-01-01T10:00:00"}]}"#,
    )
    .unwrap();

    assert_eq!(history.read().unwrap()[0].id, "legacy-1");
    history.add("b.com", "https://is.gd/b", "isgood").unwrap();

    let doc = document(&dir);
    let ids: Vec<&str> = doc["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[1], "legacy-1");
}
