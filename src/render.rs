//! 静的ギャラリーページ生成

use crate::error::Result;
use demo_gallery_common::{gallery, GalleryState};
use std::path::Path;

/// マニフェストを読み、フィルタを適用した状態を作る
pub fn load_gallery(manifest: &Path, search: &str, tags: &[String]) -> Result<GalleryState> {
    let content = std::fs::read_to_string(manifest)?;
    let demos = gallery::parse_manifest(&content)?;

    let mut state = GalleryState::new(demos);
    state.set_search(search);
    for tag in tags {
        if !state.is_active(tag) {
            state.toggle_tag(tag);
        }
    }
    Ok(state)
}

/// ページを書き出して表示件数を返す
pub fn render_gallery_page(
    manifest: &Path,
    output: &Path,
    search: &str,
    tags: &[String],
    title: &str,
) -> Result<usize> {
    let state = load_gallery(manifest, search, tags)?;
    std::fs::write(output, gallery::render_page(&state, title))?;
    tracing::info!(
        "Rendered {} of {} demo(s) to {}",
        state.filtered().len(),
        state.demos().len(),
        output.display()
    );
    Ok(state.filtered().len())
}
