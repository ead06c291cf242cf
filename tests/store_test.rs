//! ドキュメント保存のテスト
//!
//! JSONファイルへの保存・読み込みと、整理機能を通した永続化を検証

use chrono::{TimeZone, Utc};
use demo_gallery::store::FileStore;
use demo_gallery_common::organizer::{DocumentStore, NewDocument, Organizer, SortKey};
use demo_gallery_common::{DocumentType, Error};
use tempfile::tempdir;

/// 保存ファイルがなければ空
#[test]
fn test_missing_store_loads_empty() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("docs.json"));
    assert!(store.load().unwrap().is_empty());
}

/// 空のファイルも空扱い
#[test]
fn test_blank_store_loads_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docs.json");
    std::fs::write(&path, "  \n").unwrap();
    assert!(FileStore::new(&path).load().unwrap().is_empty());
}

/// 壊れたJSONは読み込みエラー
#[test]
fn test_corrupt_store_fails_to_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docs.json");
    std::fs::write(&path, "[{ broken").unwrap();

    assert!(Organizer::open(FileStore::new(&path)).is_err());
    // 読み込めなくても空の一覧で起動できる
    assert!(Organizer::open_or_empty(FileStore::new(&path)).is_empty());
}

/// 作成した内容が別インスタンスから読める
#[test]
fn test_documents_persist_across_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("docs.json");

    let id = {
        let mut organizer = Organizer::open(FileStore::new(&path)).unwrap();
        let doc = organizer
            .create(NewDocument::tab("https://example.com", "Example", "page text").unwrap())
            .unwrap();
        doc.id.clone()
    };

    let organizer = Organizer::open(FileStore::new(&path)).unwrap();
    let doc = organizer.get(&id).expect("保存したドキュメントが見つからない");
    assert_eq!(doc.doc_type, DocumentType::Tab);
    assert_eq!(doc.title, "Example");
    assert_eq!(doc.url.as_deref(), Some("https://example.com"));
    assert_eq!(doc.size, "page text".chars().count());
}

/// 作成して削除すると保存内容は元と同じになる
#[test]
fn test_create_then_delete_restores_collection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docs.json");

    let mut organizer = Organizer::open(FileStore::new(&path)).unwrap();
    organizer.create(NewDocument::text("Keep", "stays").unwrap()).unwrap();
    let before = FileStore::new(&path).load().unwrap();

    let id = organizer
        .create(NewDocument::manual("Temp", "goes away").unwrap())
        .unwrap()
        .id
        .clone();
    organizer.delete(&id).unwrap();

    let after = FileStore::new(&path).load().unwrap();
    assert_eq!(before, after);
}

/// 並び替えた順序がそのまま保存される
#[test]
fn test_sort_order_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docs.json");
    let mut organizer = Organizer::open(FileStore::new(&path)).unwrap();

    let t = |d| Utc.with_ymd_and_hms(2024, 1, d, 9, 0, 0).unwrap();
    organizer.create_at(NewDocument::text("banana", "1").unwrap(), t(1)).unwrap();
    organizer.create_at(NewDocument::text("Apple", "22").unwrap(), t(2)).unwrap();
    organizer.create_at(NewDocument::text("cherry", "333").unwrap(), t(3)).unwrap();

    organizer.sort(SortKey::Title).unwrap();
    let titles: Vec<String> = FileStore::new(&path)
        .load()
        .unwrap()
        .into_iter()
        .map(|d| d.title)
        .collect();
    assert_eq!(titles, vec!["Apple", "banana", "cherry"]);

    organizer.sort(SortKey::Size).unwrap();
    let sizes: Vec<usize> = FileStore::new(&path).load().unwrap().iter().map(|d| d.size).collect();
    assert_eq!(sizes, vec![3, 2, 1]);
}

/// 保存ファイルは localStorage と同じ camelCase の配列
#[test]
fn test_store_file_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docs.json");
    let mut organizer = Organizer::open(FileStore::new(&path)).unwrap();
    organizer.create(NewDocument::file("notes.txt", "abc".to_string())).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let first = &raw.as_array().unwrap()[0];
    assert_eq!(first["type"], "file");
    assert_eq!(first["fileName"], "notes.txt");
    assert!(first.get("createdAt").is_some());
    assert!(first.get("url").is_none());
}

/// 存在しないIDの削除はエラーで、保存内容は変わらない
#[test]
fn test_delete_unknown_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("docs.json");
    let mut organizer = Organizer::open(FileStore::new(&path)).unwrap();
    organizer.create(NewDocument::text("only", "").unwrap()).unwrap();

    let err = organizer.delete("missing").unwrap_err();
    assert!(matches!(err, Error::DocumentNotFound(_)));
    assert_eq!(FileStore::new(&path).load().unwrap().len(), 1);
}
