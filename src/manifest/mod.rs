//! マニフェスト生成
//!
//! デモフォルダを走査して `demos.json` を作る。フォルダ単位の欠損
//! （エントリページなし・メタデータ破損・サムネイルなし）は警告か既定値で
//! 吸収し、走査そのもののIOエラーだけを失敗として返す。

use crate::error::Result;
use crate::scanner::{self, find_thumbnail, DemoDir, ENTRY_PAGE};
use demo_gallery_common::{compare_titles, DemoEntry, DemoMeta};
use rayon::prelude::*;
use std::path::{Component, Path, PathBuf};

/// 生成結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// デモフォルダがない（何も書かない）
    NoDemosDir(PathBuf),
    Written { count: usize, path: PathBuf },
}

pub struct ManifestBuilder {
    demos_root: PathBuf,
    base_dir: PathBuf,
}

impl ManifestBuilder {
    /// `manifest_path` のフォルダを基準に相対パスを作る
    pub fn new(demos_root: impl Into<PathBuf>, manifest_path: &Path) -> Self {
        let base_dir = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self { demos_root: demos_root.into(), base_dir }
    }

    pub fn demos_root(&self) -> &Path {
        &self.demos_root
    }

    /// マニフェストから見たデモフォルダのパス（`/` 区切り）
    ///
    /// 同じフォルダなら空文字。配下にない場合はフォルダ名だけを使う。
    pub fn link_prefix(&self) -> String {
        let root = absolute_clean(&self.demos_root);
        let base = absolute_clean(&self.base_dir);
        if root == base {
            return String::new();
        }
        if let Ok(rel) = root.strip_prefix(&base) {
            return to_posix(rel);
        }
        root.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "demos".to_string())
    }

    /// フォルダ1件分のエントリ（エントリページがなければ `None`）
    pub fn build_entry(&self, dir: &DemoDir, prefix: &str) -> Option<DemoEntry> {
        if !dir.has_entry_page() {
            tracing::warn!("[build-manifest] Skipping {}: missing {}", dir.name, ENTRY_PAGE);
            return None;
        }

        let meta = read_meta(dir);

        let thumbnail = find_thumbnail(&dir.path)
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .map(|file| join_posix(&[prefix, &dir.name, &file]))
            .unwrap_or_default();

        Some(DemoEntry {
            id: dir.name.clone(),
            title: meta.title.unwrap_or_else(|| dir.name.clone()),
            description: meta.description.unwrap_or_default(),
            path: join_posix(&[prefix, &dir.name, ENTRY_PAGE]),
            thumbnail,
            tags: meta.tags,
        })
    }

    /// 全エントリを生成してタイトル順に並べる
    ///
    /// デモフォルダがなければ `None`。
    pub fn build(&self) -> Result<Option<Vec<DemoEntry>>> {
        if !self.demos_root.exists() {
            return Ok(None);
        }

        let dirs = scanner::scan_demo_dirs(&self.demos_root)?;
        tracing::debug!("[build-manifest] {} folder(s) under {}", dirs.len(), self.demos_root.display());

        let prefix = self.link_prefix();
        // collect は入力順を保つ
        let mut entries: Vec<DemoEntry> = dirs
            .par_iter()
            .filter_map(|dir| self.build_entry(dir, &prefix))
            .collect();

        sort_entries(&mut entries);
        Ok(Some(entries))
    }
}

fn read_meta(dir: &DemoDir) -> DemoMeta {
    let meta_path = dir.meta_file();
    if !meta_path.is_file() {
        return DemoMeta::default();
    }

    let content = match std::fs::read_to_string(&meta_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("[build-manifest] Warning: failed to read meta.json in {}: {}", dir.name, e);
            return DemoMeta::default();
        }
    };

    match DemoMeta::from_json(&content) {
        Ok(meta) => meta,
        Err(e) => {
            tracing::warn!("[build-manifest] Warning: failed to parse meta.json in {}: {}", dir.name, e);
            DemoMeta::default()
        }
    }
}

/// タイトル順（大文字小文字無視、同順位は入力順）
pub fn sort_entries(entries: &mut [DemoEntry]) {
    entries.sort_by(|a, b| compare_titles(&a.title, &b.title));
}

/// マニフェストの文字列表現（2スペースインデント、末尾改行）
pub fn render_manifest(entries: &[DemoEntry]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    Ok(json)
}

/// マニフェストを置き換える（一時ファイルに書いてからリネーム）
pub fn write_manifest(path: &Path, entries: &[DemoEntry]) -> Result<()> {
    let json = render_manifest(entries)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "demos.json".to_string());
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

    std::fs::write(&tmp_path, json)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        std::fs::remove_file(&tmp_path).ok();
        return Err(e.into());
    }
    Ok(())
}

/// 走査から書き出しまで
pub fn build_manifest(demos_root: &Path, manifest_path: &Path) -> Result<BuildOutcome> {
    let builder = ManifestBuilder::new(demos_root, manifest_path);

    let Some(entries) = builder.build()? else {
        tracing::info!("[build-manifest] No demos directory found at {}", demos_root.display());
        return Ok(BuildOutcome::NoDemosDir(demos_root.to_path_buf()));
    };

    write_manifest(manifest_path, &entries)?;
    tracing::info!(
        "[build-manifest] Wrote {} demo(s) to {}",
        entries.len(),
        manifest_path.display()
    );

    Ok(BuildOutcome::Written {
        count: entries.len(),
        path: manifest_path.to_path_buf(),
    })
}

/// 作業フォルダ基準の絶対パスにし、`.` と `..` を字句的に畳む
fn absolute_clean(path: &Path) -> PathBuf {
    let path = if path.as_os_str().is_empty() { Path::new(".") } else { path };
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut cleaned = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

fn to_posix(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn join_posix(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> DemoEntry {
        DemoEntry {
            id: title.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_link_prefix_relative() {
        let builder = ManifestBuilder::new("demos", Path::new("demos.json"));
        assert_eq!(builder.link_prefix(), "demos");

        let builder = ManifestBuilder::new("/site/public/demos", Path::new("/site/public/demos.json"));
        assert_eq!(builder.link_prefix(), "demos");

        let builder = ManifestBuilder::new("/site/public/a/b", Path::new("/site/public/demos.json"));
        assert_eq!(builder.link_prefix(), "a/b");
    }

    #[test]
    fn test_link_prefix_outside_base() {
        let builder = ManifestBuilder::new("/elsewhere/showcase", Path::new("/site/demos.json"));
        assert_eq!(builder.link_prefix(), "showcase");

        // 相対のマニフェストは作業フォルダ基準
        let builder = ManifestBuilder::new("/srv/site/demos", Path::new("demos.json"));
        assert_eq!(builder.link_prefix(), "demos");
    }

    #[test]
    fn test_link_prefix_same_directory() {
        let builder = ManifestBuilder::new(".", Path::new("demos.json"));
        assert_eq!(builder.link_prefix(), "");

        let builder = ManifestBuilder::new("/site/public", Path::new("/site/public/demos.json"));
        assert_eq!(builder.link_prefix(), "");

        let builder = ManifestBuilder::new("/site/public/./demos/../", Path::new("/site/public/demos.json"));
        assert_eq!(builder.link_prefix(), "");

        let builder = ManifestBuilder::new("/site/public/demos/./x/..", Path::new("/site/public/demos.json"));
        assert_eq!(builder.link_prefix(), "demos");
    }

    #[test]
    fn test_entry_paths_without_prefix() {
        let tmp = tempfile::tempdir().unwrap();
        let demo = tmp.path().join("x");
        std::fs::create_dir(&demo).unwrap();
        std::fs::write(demo.join(ENTRY_PAGE), "<html></html>").unwrap();
        std::fs::write(demo.join("thumbnail.png"), b"png").unwrap();

        let builder = ManifestBuilder::new(tmp.path(), &tmp.path().join("demos.json"));
        let prefix = builder.link_prefix();
        assert_eq!(prefix, "");

        let dir = DemoDir { name: "x".into(), path: demo };
        let entry = builder.build_entry(&dir, &prefix).unwrap();
        assert_eq!(entry.path, "x/index.html");
        assert_eq!(entry.thumbnail, "x/thumbnail.png");
    }

    #[test]
    fn test_sort_is_stable_and_case_insensitive() {
        let mut entries = vec![entry("beta"), entry("Alpha"), entry("alpha"), entry("ALPHA")];
        sort_entries(&mut entries);
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "alpha", "ALPHA", "beta"]);
    }

    #[test]
    fn test_sort_ignores_accents() {
        let mut entries = vec![entry("Zebra"), entry("Éclair"), entry("apple")];
        sort_entries(&mut entries);
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["apple", "Éclair", "Zebra"]);
    }

    #[test]
    fn test_render_manifest_format() {
        let json = render_manifest(&[]).unwrap();
        assert_eq!(json, "[]\n");

        let json = render_manifest(&[entry("A")]).unwrap();
        assert!(json.ends_with("]\n"));
        assert!(json.contains("\n    \"id\": \"A\",\n"));
    }

    #[test]
    fn test_join_posix() {
        assert_eq!(join_posix(&["demos", "x", "index.html"]), "demos/x/index.html");
        assert_eq!(join_posix(&["a/b/", "x", "thumbnail.png"]), "a/b/x/thumbnail.png");
    }
}
