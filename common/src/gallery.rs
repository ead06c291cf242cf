//! ギャラリーのフィルタとレンダリング
//!
//! ブラウザ版とCLIの静的ページ生成で共有する。状態は [`GalleryState`] が
//! 一括して保持し、フィルタ変更のたびにグリッドのマークアップを作り直す。

use crate::escape::{escape_attr, escape_html};
use crate::types::DemoEntry;
use crate::Result;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// タグクラウドに表示する最大件数
pub const TAG_CLOUD_LIMIT: usize = 15;

/// マニフェスト読込失敗時の表示
pub const LOAD_ERROR_MESSAGE: &str =
    "<p>Could not load demos.json. Make sure it exists at the repo root.</p>";

/// 該当なし時の表示
pub const NO_RESULTS_MESSAGE: &str = "<p>No demos match your filters.</p>";

/// マニフェストJSONを読み込む
///
/// 配列でない正しいJSONは空リストとして扱う。壊れたJSONはエラー。
pub fn parse_manifest(json: &str) -> Result<Vec<DemoEntry>> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value)?)
}

/// タグの出現回数を数え、多い順に上位 `limit` 件を返す
///
/// 同数の場合は最初に出現した順。
pub fn tag_cloud(entries: &[DemoEntry], limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        for tag in &entry.tags {
            match index.get(tag.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(tag.as_str(), counts.len());
                    counts.push((tag.clone(), 1));
                }
            }
        }
    }

    // sort_by は安定ソート
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// 1件がフィルタ条件に合うか
///
/// `query` は小文字化・trim済みであること。
pub fn matches(entry: &DemoEntry, query: &str, active_tags: &HashSet<String>) -> bool {
    let matches_text = query.is_empty() || entry.search_text().contains(query);
    let matches_tags = active_tags.is_empty() || entry.has_any_tag(active_tags);
    matches_text && matches_tags
}

/// ギャラリーの状態
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    demos: Vec<DemoEntry>,
    filtered: Vec<DemoEntry>,
    active_tags: HashSet<String>,
    search: String,
}

impl GalleryState {
    pub fn new(demos: Vec<DemoEntry>) -> Self {
        let mut state = Self::default();
        state.load(demos);
        state
    }

    /// 全件を差し替えてフィルタを再適用
    pub fn load(&mut self, demos: Vec<DemoEntry>) {
        self.demos = demos;
        self.apply_filters();
    }

    pub fn demos(&self) -> &[DemoEntry] {
        &self.demos
    }

    pub fn filtered(&self) -> &[DemoEntry] {
        &self.filtered
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn active_tags(&self) -> &HashSet<String> {
        &self.active_tags
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.active_tags.contains(tag)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.apply_filters();
    }

    /// タグのON/OFFを切り替え、切替後にONならtrue
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let active = if self.active_tags.remove(tag) {
            false
        } else {
            self.active_tags.insert(tag.to_string());
            true
        };
        self.apply_filters();
        active
    }

    /// 絞り込み結果を全件から作り直す
    pub fn apply_filters(&mut self) {
        let query = self.search.trim().to_lowercase();
        self.filtered = self
            .demos
            .iter()
            .filter(|d| matches(d, &query, &self.active_tags))
            .cloned()
            .collect();
    }

    pub fn tag_cloud(&self) -> Vec<(String, usize)> {
        tag_cloud(&self.demos, TAG_CLOUD_LIMIT)
    }

    /// グリッドのHTML
    pub fn render_grid(&self) -> String {
        if self.filtered.is_empty() {
            return NO_RESULTS_MESSAGE.to_string();
        }
        self.filtered.iter().map(card_html).collect()
    }

    /// タグクラウドのHTML（静的ページ用）
    pub fn render_tag_cloud(&self) -> String {
        self.tag_cloud()
            .iter()
            .map(|(tag, _)| {
                format!(
                    r#"<button class="tag" type="button" aria-pressed="{}">{}</button>"#,
                    self.is_active(tag),
                    escape_html(tag)
                )
            })
            .collect()
    }
}

/// カード1枚のHTML
pub fn card_html(demo: &DemoEntry) -> String {
    let href = if demo.path.is_empty() { "#" } else { demo.path.as_str() };
    let title = if demo.title.is_empty() { "Untitled" } else { demo.title.as_str() };

    let thumb = if demo.thumbnail.is_empty() {
        r#"<div class="thumb" role="img" aria-label="Preview"></div>"#.to_string()
    } else {
        format!(r#"<img class="thumb" src="{}" alt="">"#, escape_attr(&demo.thumbnail))
    };

    let tags: String = demo
        .tags
        .iter()
        .map(|t| format!(r#"<span class="badge">{}</span>"#, escape_html(t)))
        .collect();

    format!(
        r#"
  <a href="{href}" class="card">
    {thumb}
    <div class="card-body">
      <strong class="card-title">{title}</strong>
      <p class="card-desc">{desc}</p>
      <div class="card-tags">{tags}</div>
    </div>
  </a>
  "#,
        href = escape_attr(href),
        thumb = thumb,
        title = escape_html(title),
        desc = escape_html(&demo.description),
        tags = tags,
    )
}

const PAGE_STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1100px; padding: 24px; }
    .tags { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 20px; }
    .tag { border: 1px solid #ccc; border-radius: 999px; background: #fff; padding: 4px 12px; }
    .tag[aria-pressed="true"] { background: #007acc; color: #fff; }
    #grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; }
    .card { display: block; border: 1px solid #ddd; border-radius: 8px; color: inherit; text-decoration: none; overflow: hidden; }
    .thumb { display: block; width: 100%; aspect-ratio: 16 / 9; object-fit: cover; background: #eee; }
    .card-body { padding: 12px; }
    .badge { display: inline-block; font-size: 0.8em; background: #eef; border-radius: 4px; margin: 2px; padding: 2px 6px; }
"#;

/// 静的なギャラリーページ全体のHTML
pub fn render_page(state: &GalleryState, page_title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<h1>{title}</h1>
<p class="count">{shown} / {total}</p>
<div id="tags" class="tags">{tags}</div>
<div id="grid">{grid}</div>
</body>
</html>
"#,
        title = escape_html(page_title),
        style = PAGE_STYLE,
        shown = state.filtered().len(),
        total = state.demos().len(),
        tags = state.render_tag_cloud(),
        grid = state.render_grid(),
    )
}
