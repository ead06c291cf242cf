use crate::error::{GalleryError, Result};
use crate::library::DEFAULT_MAX_IMPORT_MB;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ドキュメント保存先を上書きする環境変数
pub const STORE_ENV: &str = "DEMO_GALLERY_STORE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// デモフォルダのルート
    pub demos_dir: PathBuf,
    /// マニフェストの出力先
    pub manifest_path: PathBuf,
    /// 静的ギャラリーページの出力先
    pub page_path: PathBuf,
    pub page_title: String,
    /// プロジェクト一覧の入力フォルダ
    pub projects_dir: PathBuf,
    /// プロジェクト一覧の出力先
    pub index_path: PathBuf,
    /// ドキュメント保存先（省略時はデータディレクトリ）
    pub store_path: Option<PathBuf>,
    /// HTMLライブラリのフォルダ
    pub library_dir: PathBuf,
    /// 取り込みサイズ上限（MB）
    pub max_import_mb: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demos_dir: PathBuf::from("demos"),
            manifest_path: PathBuf::from("demos.json"),
            page_path: PathBuf::from("gallery.html"),
            page_title: "Demo Gallery".into(),
            projects_dir: PathBuf::from("projects"),
            index_path: PathBuf::from("index.html"),
            store_path: None,
            library_dir: PathBuf::from("html_library"),
            max_import_mb: DEFAULT_MAX_IMPORT_MB,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読めない・壊れた設定は警告して既定値
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                tracing::warn!("Config unavailable, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            tracing::warn!("Could not read {}, using defaults: {}", config_path.display(), e);
            Self::default()
        })
    }

    pub fn max_import_bytes(&self) -> u64 {
        self.max_import_mb.saturating_mul(1024 * 1024)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        tracing::info!("Saved config to {}", config_path.display());
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GalleryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("demo-gallery").join("config.json"))
    }

    /// ドキュメント保存先
    ///
    /// 環境変数 > 設定ファイル > データディレクトリの順。
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Ok(path) = std::env::var(STORE_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }

        let data = dirs::data_dir()
            .ok_or_else(|| GalleryError::Config("データディレクトリが見つかりません".into()))?;
        Ok(data.join("demo-gallery").join("documents.json"))
    }
}
