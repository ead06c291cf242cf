//! 永続化の境界
//!
//! 一覧全体を1つの値として読み書きする。部分更新はしない。

use super::record::DocumentRecord;
use crate::Result;

/// ブラウザの localStorage で使うキー
pub const STORAGE_KEY: &str = "tabOrganizerDocuments";

/// ドキュメント一覧の保存先
pub trait DocumentStore {
    /// 保存済み一覧を読む（未保存なら空）
    fn load(&self) -> Result<Vec<DocumentRecord>>;

    /// 一覧全体を置き換える
    fn save(&mut self, documents: &[DocumentRecord]) -> Result<()>;
}

/// メモリ上の保存先（テスト・一時利用）
///
/// 実際の保存先と同じくJSON文字列として保持する。
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self { blob: Some(blob.into()) }
    }

    /// 最後に保存されたJSON
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Vec<DocumentRecord>> {
        match &self.blob {
            Some(blob) => Ok(serde_json::from_str(blob)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, documents: &[DocumentRecord]) -> Result<()> {
        self.blob = Some(serde_json::to_string(documents)?);
        Ok(())
    }
}
