//! ドキュメントレコード

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ドキュメント種別
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// ブラウザのタブから貼り付け
    Tab,
    /// 手入力テキスト
    #[default]
    Text,
    /// アップロード/ドロップしたファイル
    File,
    /// 新規作成ダイアログ
    Manual,
    #[serde(other)]
    Other,
}

impl DocumentType {
    pub fn icon(&self) -> &'static str {
        match self {
            DocumentType::Tab => "🌐",
            DocumentType::Text => "📝",
            DocumentType::File => "📁",
            DocumentType::Manual | DocumentType::Other => "📄",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Tab => "tab",
            DocumentType::Text => "text",
            DocumentType::File => "file",
            DocumentType::Manual => "manual",
            DocumentType::Other => "other",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 保存されるドキュメント1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type", default)]
    pub doc_type: DocumentType,
    pub created_at: DateTime<Utc>,
    /// 文字数
    #[serde(default)]
    pub size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl DocumentRecord {
    /// 本文を差し替えて文字数を再計算
    pub fn set_content(&mut self, content: String) {
        self.size = char_len(&content);
        self.content = content;
    }
}

/// 作成前の入力
///
/// 種別ごとのコンストラクタで既定タイトルとtrimの規則を決める。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub title: String,
    pub content: String,
    pub url: Option<String>,
    pub doc_type: DocumentType,
    pub file_name: Option<String>,
}

impl NewDocument {
    /// タブ貼り付け（タイトル・本文とも空なら `None`）
    pub fn tab(url: &str, title: &str, content: &str) -> Option<Self> {
        let (url, title, content) = (url.trim(), title.trim(), content.trim());
        if title.is_empty() && content.is_empty() {
            return None;
        }
        Some(Self {
            title: non_empty_or(title, "Untitled Tab"),
            content: content.to_string(),
            url: (!url.is_empty()).then(|| url.to_string()),
            doc_type: DocumentType::Tab,
            file_name: None,
        })
    }

    /// テキスト入力（タイトル・本文とも空なら `None`）
    pub fn text(title: &str, content: &str) -> Option<Self> {
        let (title, content) = (title.trim(), content.trim());
        if title.is_empty() && content.is_empty() {
            return None;
        }
        Some(Self {
            title: non_empty_or(title, "Untitled Document"),
            content: content.to_string(),
            url: None,
            doc_type: DocumentType::Text,
            file_name: None,
        })
    }

    /// ファイル読込（本文はそのまま保持）
    pub fn file(file_name: &str, content: String) -> Self {
        Self {
            title: file_name.to_string(),
            content,
            url: None,
            doc_type: DocumentType::File,
            file_name: Some(file_name.to_string()),
        }
    }

    /// 新規作成（タイトル必須）
    pub fn manual(title: &str, content: &str) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            content: content.to_string(),
            url: None,
            doc_type: DocumentType::Manual,
            file_name: None,
        })
    }

    pub(crate) fn into_record(self, id: String, created_at: DateTime<Utc>) -> DocumentRecord {
        DocumentRecord {
            id,
            size: char_len(&self.content),
            title: self.title,
            content: self.content,
            url: self.url,
            doc_type: self.doc_type,
            created_at,
            file_name: self.file_name,
        }
    }
}

fn non_empty_or(s: &str, fallback: &str) -> String {
    if s.is_empty() {
        fallback.to_string()
    } else {
        s.to_string()
    }
}

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// 時刻とエントロピーからIDを生成（base36連結）
pub fn generate_id(now: DateTime<Utc>, entropy: u64) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or_default();
    format!("{}{}", to_base36(millis), to_base36(entropy))
}

/// 現在時刻と乱数からIDを生成
pub fn new_id(now: DateTime<Utc>) -> String {
    let entropy = uuid::Uuid::new_v4().as_u128() as u64;
    generate_id(now, entropy)
}
