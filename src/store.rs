//! ドキュメントのJSONファイル保存先
//!
//! ブラウザ版の localStorage と同じく、一覧全体を1つのJSON配列として
//! 丸ごと置き換える。

use demo_gallery_common::organizer::{DocumentRecord, DocumentStore};
use demo_gallery_common::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> demo_gallery_common::Result<Vec<DocumentRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&mut self, documents: &[DocumentRecord]) -> demo_gallery_common::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(documents)?;
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| Error::Storage(format!("invalid store path: {}", self.path.display())))?;
        let tmp_path = self.path.with_file_name(format!(".{}.tmp", file_name));

        fs::write(&tmp_path, json)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            fs::remove_file(&tmp_path).ok();
            return Err(e.into());
        }
        Ok(())
    }
}
