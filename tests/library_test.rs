//! HTMLライブラリの統合テスト
//!
//! 一時フォルダに取り込み・検索・重複削除・一覧出力を行って結果を検証する

use chrono::{Local, TimeZone};
use demo_gallery::error::GalleryError;
use demo_gallery::library::{
    cleanup_duplicates, export_list, import_file, list_files, render_list, search_files, ExportFormat,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const MAX: u64 = 1024 * 1024;

fn write_page(dir: &Path, name: &str, title: &str, body: &str) -> std::path::PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(
        &path,
        format!(
            "<html><head><title>{}</title><meta name=\"description\" content=\"{} page\"></head><body>{}</body></html>",
            title, title, body
        ),
    )
    .unwrap();
    path
}

fn now() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2026, 1, 18, 9, 30, 0).unwrap()
}

/// 同名があれば日時付きの名前で取り込む
#[test]
fn test_import_adds_timestamp_on_collision() {
    let dir = tempdir().unwrap();
    let source = write_page(&dir.path().join("src"), "canvas.html", "Canvas", "draw");
    let library = dir.path().join("library");

    let first = import_file(&library, &source, None, MAX, now()).unwrap();
    let second = import_file(&library, &source, None, MAX, now()).unwrap();

    assert_eq!(first, library.join("canvas.html"));
    assert_eq!(second, library.join("canvas_20260118_093000.html"));
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

/// 名前指定では .html を補う
#[test]
fn test_import_with_new_name() {
    let dir = tempdir().unwrap();
    let source = write_page(&dir.path().join("src"), "raw.htm", "Raw", "");
    let library = dir.path().join("library");

    let dest = import_file(&library, &source, Some("chart"), MAX, now()).unwrap();
    assert_eq!(dest, library.join("chart.html"));
}

/// 上限を超えるファイルは取り込まない
#[test]
fn test_import_rejects_large_file() {
    let dir = tempdir().unwrap();
    let source = write_page(&dir.path().join("src"), "big.html", "Big", &"x".repeat(2048));
    let library = dir.path().join("library");

    let err = import_file(&library, &source, None, 1024, now()).unwrap_err();
    assert!(matches!(err, GalleryError::FileTooLarge { max: 1024, .. }));
    assert!(!library.join("big.html").exists());
}

/// 存在しないファイルは失敗
#[test]
fn test_import_missing_source() {
    let dir = tempdir().unwrap();
    let err = import_file(dir.path(), &dir.path().join("nope.html"), None, MAX, now()).unwrap_err();
    assert!(matches!(err, GalleryError::FileNotFound(_)));
}

/// HTMLだけをメタデータ付きで一覧
#[test]
fn test_list_with_metadata() {
    let dir = tempdir().unwrap();
    let library = dir.path().join("library");
    write_page(&library, "a.html", "Alpha", "one");
    write_page(&library, "b.HTM", "Beta", "two");
    fs::write(library.join("notes.txt"), "not html").unwrap();

    let files = list_files(&library).unwrap();
    assert_eq!(files.len(), 2);

    let alpha = files.iter().find(|f| f.filename == "a.html").unwrap();
    assert_eq!(alpha.title, "Alpha");
    assert_eq!(alpha.description, "Alpha page");
    assert_eq!(alpha.size_bytes, fs::metadata(library.join("a.html")).unwrap().len());
    assert_eq!(alpha.checksum.len(), 64);
}

/// フォルダがなければ空
#[test]
fn test_list_missing_dir_is_empty() {
    let dir = tempdir().unwrap();
    assert!(list_files(&dir.path().join("missing")).unwrap().is_empty());
}

/// タイトル・本文の大文字小文字を無視した検索
#[test]
fn test_search_title_and_content() {
    let dir = tempdir().unwrap();
    let library = dir.path().join("library");
    write_page(&library, "a.html", "Particles", "gravity");
    write_page(&library, "b.html", "Waves", "Sine GRAVITY well");
    write_page(&library, "c.html", "Clock", "ticks");

    let names = |q: &str| -> Vec<String> {
        let mut names: Vec<String> =
            search_files(&library, q).unwrap().into_iter().map(|f| f.filename).collect();
        names.sort();
        names
    };

    assert_eq!(names("particles"), vec!["a.html"]);
    assert_eq!(names("Gravity"), vec!["a.html", "b.html"]);
    assert_eq!(names("c.htm"), vec!["c.html"]);
    assert!(names("nothing-here").is_empty());
}

/// 同じ内容は1つだけ残す
#[test]
fn test_cleanup_duplicates_keeps_one_copy() {
    let dir = tempdir().unwrap();
    let library = dir.path().join("library");
    write_page(&library, "a.html", "Same", "body");
    write_page(&library, "b.html", "Same", "body");
    write_page(&library, "c.html", "Other", "body");

    let removed = cleanup_duplicates(&library).unwrap();
    assert_eq!(removed.len(), 1);

    let remaining = list_files(&library).unwrap();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().any(|f| f.title == "Same"));
    assert!(remaining.iter().any(|f| f.title == "Other"));

    assert!(cleanup_duplicates(&library).unwrap().is_empty());
}

/// CSVはヘッダー付き、JSONは配列
#[test]
fn test_export_list_formats() {
    let dir = tempdir().unwrap();
    let library = dir.path().join("library");
    write_page(&library, "a.html", "Quote, \"inside\"", "x");

    let csv = render_list(&list_files(&library).unwrap(), ExportFormat::Csv).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "filename,path,title,description,size_bytes,modified_time,checksum"
    );
    assert!(lines.next().unwrap().contains(r#""Quote, ""inside""""#));

    let out = dir.path().join("exports");
    let path = export_list(&library, ExportFormat::Json, Some(&out), now()).unwrap();
    assert_eq!(path, out.join("library_files_20260118_093000.json"));

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["filename"], "a.html");
    assert!(items[0].get("modified").is_none());
}
