//! マニフェスト生成の統合テスト
//!
//! 一時フォルダにデモ構成を作り、demos.json の中身を検証する

use demo_gallery::manifest::{build_manifest, BuildOutcome, ManifestBuilder};
use demo_gallery_common::DemoEntry;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn add_demo(root: &Path, name: &str, meta: Option<&str>) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.html"), "<!DOCTYPE html><title>demo</title>").unwrap();
    if let Some(meta) = meta {
        fs::write(dir.join("meta.json"), meta).unwrap();
    }
}

fn read_manifest(path: &Path) -> Vec<DemoEntry> {
    let content = fs::read_to_string(path).expect("マニフェストが読めない");
    serde_json::from_str(&content).expect("マニフェストのJSONが不正")
}

/// デモフォルダがなければ成功扱いで何も書かない
#[test]
fn test_missing_demos_dir_is_not_an_error() {
    let dir = tempdir().unwrap();
    let demos = dir.path().join("demos");
    let manifest = dir.path().join("demos.json");

    let outcome = build_manifest(&demos, &manifest).unwrap();
    assert!(matches!(outcome, BuildOutcome::NoDemosDir(_)));
    assert!(!manifest.exists());
}

/// 空のデモフォルダは空配列
#[test]
fn test_empty_demos_dir() {
    let dir = tempdir().unwrap();
    let demos = dir.path().join("demos");
    fs::create_dir(&demos).unwrap();
    let manifest = dir.path().join("demos.json");

    let outcome = build_manifest(&demos, &manifest).unwrap();
    assert_eq!(outcome, BuildOutcome::Written { count: 0, path: manifest.clone() });
    assert_eq!(fs::read_to_string(&manifest).unwrap(), "[]\n");
}

/// index.html のないフォルダは除外され、全体は成功する
#[test]
fn test_folder_without_entry_page_skipped() {
    let dir = tempdir().unwrap();
    let demos = dir.path().join("demos");
    add_demo(&demos, "good", None);
    fs::create_dir_all(demos.join("broken")).unwrap();
    fs::write(demos.join("broken").join("meta.json"), r#"{"title":"Broken"}"#).unwrap();

    let manifest = dir.path().join("demos.json");
    build_manifest(&demos, &manifest).unwrap();

    let entries = read_manifest(&manifest);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "good");
}

/// メタデータなしは既定値
#[test]
fn test_defaults_without_meta() {
    let dir = tempdir().unwrap();
    let demos = dir.path().join("demos");
    add_demo(&demos, "plain", None);

    let manifest = dir.path().join("demos.json");
    build_manifest(&demos, &manifest).unwrap();

    let entries = read_manifest(&manifest);
    assert_eq!(
        entries[0],
        DemoEntry {
            id: "plain".into(),
            title: "plain".into(),
            description: String::new(),
            path: "demos/plain/index.html".into(),
            thumbnail: String::new(),
            tags: vec![],
        }
    );
}

/// 壊れた meta.json は警告のみで既定値
#[test]
fn test_malformed_meta_defaults() {
    let dir = tempdir().unwrap();
    let demos = dir.path().join("demos");
    add_demo(&demos, "bad-meta", Some("{ invalid json }"));
    add_demo(&demos, "array-meta", Some(r#"["not", "an", "object"]"#));

    let manifest = dir.path().join("demos.json");
    build_manifest(&demos, &manifest).unwrap();

    let entries = read_manifest(&manifest);
    assert_eq!(entries.len(), 2);
    for entry in &entries {
        assert_eq!(entry.title, entry.id);
        assert!(entry.tags.is_empty());
    }
}

/// メタデータの値が反映される
#[test]
fn test_meta_fields_applied() {
    let dir = tempdir().unwrap();
    let demos = dir.path().join("demos");
    add_demo(
        &demos,
        "particles",
        Some(r#"{"title":"Particle Field","description":"Dots","tags":["canvas","animation"]}"#),
    );

    let manifest = dir.path().join("demos.json");
    build_manifest(&demos, &manifest).unwrap();

    let entries = read_manifest(&manifest);
    assert_eq!(entries[0].title, "Particle Field");
    assert_eq!(entries[0].description, "Dots");
    assert_eq!(entries[0].tags, vec!["canvas", "animation"]);
}

/// 大文字小文字を無視したタイトル順、同順位はフォルダ名順
#[test]
fn test_sorted_by_title_case_insensitive() {
    let dir = tempdir().unwrap();
    let demos = dir.path().join("demos");
    add_demo(&demos, "a-zeta", Some(r#"{"title":"zeta"}"#));
    add_demo(&demos, "b-alpha", Some(r#"{"title":"Alpha"}"#));
    add_demo(&demos, "c-mid", Some(r#"{"title":"mid"}"#));
    add_demo(&demos, "d-alpha", Some(r#"{"title":"alpha"}"#));

    let manifest = dir.path().join("demos.json");
    build_manifest(&demos, &manifest).unwrap();

    let ids: Vec<String> = read_manifest(&manifest).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["b-alpha", "d-alpha", "c-mid", "a-zeta"]);
}

/// 同じ構成から2回生成するとバイト単位で一致
#[test]
fn test_build_is_idempotent() {
    let dir = tempdir().unwrap();
    let demos = dir.path().join("demos");
    for i in 0..12 {
        add_demo(
            &demos,
            &format!("demo-{:02}", 11 - i),
            Some(&format!(r#"{{"title":"Demo {}","tags":["t{}"]}}"#, i % 3, i % 4)),
        );
    }

    let manifest = dir.path().join("demos.json");
    build_manifest(&demos, &manifest).unwrap();
    let first = fs::read(&manifest).unwrap();

    build_manifest(&demos, &manifest).unwrap();
    let second = fs::read(&manifest).unwrap();

    assert_eq!(first, second);
    assert!(first.ends_with(b"\n"));
}

/// サムネイルは png > jpg > jpeg > webp > gif の順で採用
#[test]
fn test_thumbnail_precedence() {
    let dir = tempdir().unwrap();
    let demos = dir.path().join("demos");
    add_demo(&demos, "both", None);
    fs::write(demos.join("both").join("thumbnail.jpg"), b"jpg").unwrap();
    fs::write(demos.join("both").join("thumbnail.png"), b"png").unwrap();
    add_demo(&demos, "gif-only", None);
    fs::write(demos.join("gif-only").join("thumbnail.gif"), b"gif").unwrap();

    let manifest = dir.path().join("demos.json");
    build_manifest(&demos, &manifest).unwrap();

    let entries = read_manifest(&manifest);
    let both = entries.iter().find(|e| e.id == "both").unwrap();
    let gif = entries.iter().find(|e| e.id == "gif-only").unwrap();
    assert_eq!(both.thumbnail, "demos/both/thumbnail.png");
    assert_eq!(gif.thumbnail, "demos/gif-only/thumbnail.gif");
}

/// トップレベルのファイルは無視
#[test]
fn test_top_level_files_ignored() {
    let dir = tempdir().unwrap();
    let demos = dir.path().join("demos");
    add_demo(&demos, "real", None);
    fs::write(demos.join("index.html"), "<html></html>").unwrap();

    let builder = ManifestBuilder::new(&demos, &dir.path().join("demos.json"));
    let entries = builder.build().unwrap().unwrap();
    assert_eq!(entries.len(), 1);
}

/// デモフォルダの位置がファイルなら失敗
#[test]
fn test_demos_root_is_file_fails() {
    let dir = tempdir().unwrap();
    let demos = dir.path().join("demos");
    fs::write(&demos, "oops").unwrap();

    let result = build_manifest(&demos, &dir.path().join("demos.json"));
    assert!(result.is_err());
}

/// 既存のマニフェストを丸ごと置き換える
#[test]
fn test_existing_manifest_replaced() {
    let dir = tempdir().unwrap();
    let demos = dir.path().join("demos");
    add_demo(&demos, "one", None);
    let manifest = dir.path().join("demos.json");
    fs::write(&manifest, "stale content that is much longer than the new manifest ...").unwrap();

    build_manifest(&demos, &manifest).unwrap();
    assert_eq!(read_manifest(&manifest).len(), 1);
    assert!(!dir.path().join(".demos.json.tmp").exists());
}

/// アクセント付きタイトルも照合順で並ぶ
#[test]
fn test_sorted_by_title_ignoring_accents() {
    let dir = tempdir().unwrap();
    let demos = dir.path().join("demos");
    add_demo(&demos, "one", Some(r#"{"title":"Zebra"}"#));
    add_demo(&demos, "two", Some(r#"{"title":"Éclair"}"#));
    add_demo(&demos, "three", Some(r#"{"title":"apple"}"#));

    let manifest = dir.path().join("demos.json");
    build_manifest(&demos, &manifest).unwrap();

    let titles: Vec<String> = read_manifest(&manifest).into_iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["apple", "Éclair", "Zebra"]);
}

/// マニフェストとデモフォルダが同じ場所ならパスに接頭辞を付けない
#[test]
fn test_manifest_inside_demos_root() {
    let dir = tempdir().unwrap();
    add_demo(dir.path(), "orbit", None);

    let manifest = dir.path().join("demos.json");
    build_manifest(dir.path(), &manifest).unwrap();

    let entries = read_manifest(&manifest);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, "orbit/index.html");
}
