use std::path::{Path, PathBuf};

/// サムネイルの拡張子（この順で探し、最初に見つかったものを使う）
pub const THUMBNAIL_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

const THUMBNAIL_STEM: &str = "thumbnail";

/// `thumbnail.<ext>` を優先順に探す
pub fn find_thumbnail(dir: &Path) -> Option<PathBuf> {
    THUMBNAIL_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", THUMBNAIL_STEM, ext)))
        .find(|p| p.is_file())
}
