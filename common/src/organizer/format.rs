//! 表示用フォーマット

use chrono::{DateTime, Local, TimeZone, Utc};

/// 一覧のプレビュー文字数
pub const PREVIEW_CHARS: usize = 150;

/// 一覧に出すURLの文字数
pub const URL_PREVIEW_CHARS: usize = 30;

/// サイズ表示（1024未満は文字数、以降はKB/MB）
pub fn format_size(size: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let n = size as f64;
    if n < KB {
        format!("{} chars", size)
    } else if n < MB {
        format!("{} KB", (n / KB).round() as u64)
    } else {
        format!("{} MB", (n / MB).round() as u64)
    }
}

/// 日時表示（ローカル時刻）
pub fn format_date(date: &DateTime<Utc>) -> String {
    format_date_in(date, &Local)
}

/// 日時表示（タイムゾーン指定）
pub fn format_date_in<Tz>(date: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string()
}

/// 先頭 `max_chars` 文字（切り詰めたかどうかも返す）
pub fn truncate_chars(s: &str, max_chars: usize) -> (&str, bool) {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => (&s[..idx], true),
        None => (s, false),
    }
}

/// プレビュー文字列（切り詰めたら "..." を付ける）
pub fn preview(s: &str, max_chars: usize) -> String {
    let (head, truncated) = truncate_chars(s, max_chars);
    if truncated {
        format!("{}...", head)
    } else {
        head.to_string()
    }
}
