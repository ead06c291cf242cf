//! マニフェストの型定義
//!
//! `demos.json` の1要素と、各デモフォルダの `meta.json` の検証済み表現。

use icu_collator::{Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// デモ1件（マニフェストの1要素）
///
/// フィールド順がそのままJSONのキー順になる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoEntry {
    /// フォルダ名
    pub id: String,
    pub title: String,
    pub description: String,
    /// エントリページへの相対パス
    pub path: String,
    /// サムネイルへの相対パス（無ければ空文字）
    pub thumbnail: String,
    pub tags: Vec<String>,
}

impl DemoEntry {
    /// 検索対象テキスト（小文字化済み）
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.tags.join(" ")).to_lowercase()
    }

    pub fn has_any_tag<'a, I>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        tags.into_iter().any(|t| self.tags.contains(t))
    }
}

/// `meta.json` の検証済み内容
///
/// 想定外の形は決定的に「メタデータなし」側へ寄せる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl DemoMeta {
    /// JSON値から読み取る
    ///
    /// - オブジェクト以外 → 全フィールド既定値
    /// - `title` は空でない文字列のみ採用
    /// - `tags` は配列のみ採用し、文字列以外の要素は捨てる
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let title = obj
            .get("title")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let description = obj
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string);

        let tags = obj
            .get("tags")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { title, description, tags }
    }

    /// JSON文字列から読み取る（パース失敗はエラー）
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.tags.is_empty()
    }
}

thread_local! {
    /// 一次強度（大文字小文字・アクセントを無視）の照合器
    static TITLE_COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Primary);
        match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!("Collator unavailable, falling back to lowercase order: {:?}", e);
                None
            }
        }
    };
}

/// タイトル比較（ロケール照合、大文字小文字とアクセントを区別しない）
///
/// 安定ソートと組み合わせるため、照合上等しければ `Equal` を返す。
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    })
}
