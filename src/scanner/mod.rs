mod thumbnail;

pub use thumbnail::{find_thumbnail, THUMBNAIL_EXTENSIONS};

use crate::error::{GalleryError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// デモのエントリページ
pub const ENTRY_PAGE: &str = "index.html";

/// デモのメタデータ
pub const META_FILE: &str = "meta.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoDir {
    /// フォルダ名（そのままIDになる）
    pub name: String,
    pub path: PathBuf,
}

impl DemoDir {
    pub fn entry_page(&self) -> PathBuf {
        self.path.join(ENTRY_PAGE)
    }

    pub fn meta_file(&self) -> PathBuf {
        self.path.join(META_FILE)
    }

    pub fn has_entry_page(&self) -> bool {
        self.entry_page().is_file()
    }
}

/// ルート直下のサブフォルダを列挙
///
/// フォルダ名順で返す。シンボリックリンクはたどらない。
/// 走査中のIOエラーはそのまま返す。
pub fn scan_demo_dirs(root: &Path) -> Result<Vec<DemoDir>> {
    if !root.exists() {
        return Err(GalleryError::FolderNotFound(root.display().to_string()));
    }
    if !root.is_dir() {
        return Err(GalleryError::NotADirectory(root.display().to_string()));
    }

    let mut dirs = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)  // 直下のみ
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        dirs.push(DemoDir {
            name: entry.file_name().to_string_lossy().to_string(),
            path: entry.path().to_path_buf(),
        });
    }

    Ok(dirs)
}
