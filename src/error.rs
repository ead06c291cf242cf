use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダではありません: {0}")]
    NotADirectory(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("ファイルが大きすぎます: {size} バイト（上限 {max} バイト）")]
    FileTooLarge { size: u64, max: u64 },

    #[error("スキャンエラー: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("CSV出力エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] demo_gallery_common::Error),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
