//! 一覧・詳細のHTML

use super::format::{format_date, format_size, preview, truncate_chars, PREVIEW_CHARS, URL_PREVIEW_CHARS};
use super::record::DocumentRecord;
use crate::escape::{escape_attr, escape_html};

/// 空の一覧
pub const EMPTY_STATE: &str = r#"
            <div class="empty-state">
                <h3>🎯 Ready to organize!</h3>
                <p>Add your first piece of content above to get started! 🚀</p>
            </div>
        "#;

/// 一覧のカード1枚
pub fn document_card(doc: &DocumentRecord) -> String {
    let url = doc
        .url
        .as_deref()
        .map(|u| {
            let (head, _) = truncate_chars(u, URL_PREVIEW_CHARS);
            format!(r#" • 🔗 <span class="document-url">{}...</span>"#, escape_html(head))
        })
        .unwrap_or_default();

    format!(
        r#"
        <div class="document-card" data-id="{id}">
            <div class="document-title">{icon} {title}</div>
            <div class="document-meta">📅 {date} • 📏 {size}{url}</div>
            <div class="document-preview">{preview}</div>
        </div>
    "#,
        id = escape_attr(&doc.id),
        icon = doc.doc_type.icon(),
        title = escape_html(&doc.title),
        date = format_date(&doc.created_at),
        size = format_size(doc.size),
        url = url,
        preview = escape_html(&preview(&doc.content, PREVIEW_CHARS)),
    )
}

/// 一覧全体
pub fn render_list(documents: &[DocumentRecord]) -> String {
    if documents.is_empty() {
        return EMPTY_STATE.to_string();
    }
    documents.iter().map(document_card).collect()
}

/// 詳細表示の本文
pub fn render_detail(doc: &DocumentRecord) -> String {
    let url = doc
        .url
        .as_deref()
        .map(|u| {
            format!(
                r#"<div class="document-link"><strong>🔗 URL:</strong> <a href="{}" target="_blank">{}</a></div>"#,
                escape_attr(u),
                escape_html(u)
            )
        })
        .unwrap_or_default();

    format!(
        r#"
        <div class="document-info">
            <span><strong>📅 Created:</strong> {date}</span>
            <span><strong>📏 Size:</strong> {size}</span>
            <span><strong>🏷️ Type:</strong> {doc_type}</span>
            {url}
        </div>
        <pre class="document-body">{content}</pre>
    "#,
        date = format_date(&doc.created_at),
        size = format_size(doc.size),
        doc_type = doc.doc_type.as_str().to_uppercase(),
        url = url,
        content = escape_html(&doc.content),
    )
}
