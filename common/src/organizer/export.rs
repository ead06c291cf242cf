//! HTMLエクスポート
//!
//! 単体・一括とも外部依存のない1ファイルのHTMLを生成する。

use super::format::{format_date, format_size};
use super::record::DocumentRecord;
use crate::escape::{escape_attr, escape_html};
use crate::{Error, Result};
use chrono::NaiveDate;

const EXPORT_STYLE: &str = r#"
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; max-width: 1200px; margin: 0 auto; padding: 20px; line-height: 1.6; }
        .document { margin-bottom: 40px; padding: 20px; border-left: 5px solid #4CAF50; background: #f9f9f9; border-radius: 8px; }
        .document-title { font-size: 1.5em; color: #4CAF50; margin-bottom: 10px; }
        .document-meta { color: #666; margin-bottom: 20px; font-size: 0.9em; }
        .document-content { background: white; padding: 15px; border-radius: 5px; border: 1px solid #ddd; }
        .document-content pre { white-space: pre-wrap; font-family: inherit; margin: 0; }
        .toc { background: #e8f5e8; padding: 20px; border-radius: 8px; margin-bottom: 30px; }
        .toc h2 { color: #4CAF50; margin-top: 0; }
        .toc a { color: #2196F3; text-decoration: none; }
    "#;

/// エクスポート結果（ファイル名と中身）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub html: String,
}

fn document_section(doc: &DocumentRecord) -> String {
    let url = doc
        .url
        .as_deref()
        .map(|u| format!(r#" | 🔗 <a href="{}" target="_blank">Original URL</a>"#, escape_attr(u)))
        .unwrap_or_default();

    format!(
        r#"
    <div class="document" id="doc-{id}">
        <div class="document-title">{icon} {title}</div>
        <div class="document-meta">📅 Created: {date} | 📏 Size: {size} | 🏷️ Type: {doc_type}{url}</div>
        <div class="document-content"><pre>{content}</pre></div>
    </div>
"#,
        id = escape_attr(&doc.id),
        icon = doc.doc_type.icon(),
        title = escape_html(&doc.title),
        date = format_date(&doc.created_at),
        size = format_size(doc.size),
        doc_type = doc.doc_type.as_str().to_uppercase(),
        url = url,
        content = escape_html(&doc.content),
    )
}

fn html_document(title: &str, body: &str) -> String {
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
{body}
</body>
</html>
"#,
        title = escape_html(title),
        style = EXPORT_STYLE,
        body = body,
    )
}

/// ファイル名に使えない文字を置き換える
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim().trim_matches('.');
    if trimmed.is_empty() {
        "document".to_string()
    } else {
        trimmed.to_string()
    }
}

/// 1件を単独のHTMLとして出力
pub fn export_document(doc: &DocumentRecord) -> ExportFile {
    ExportFile {
        file_name: format!("{}.html", sanitize_file_name(&doc.title)),
        html: html_document(&doc.title, &document_section(doc)),
    }
}

/// 全件を目次付きの1つのHTMLとして出力
pub fn export_all(documents: &[DocumentRecord], generated_on: NaiveDate) -> Result<ExportFile> {
    if documents.is_empty() {
        return Err(Error::NothingToExport);
    }

    let toc: String = documents
        .iter()
        .map(|doc| {
            format!(
                r##"<div>• <a href="#doc-{}">{} {}</a></div>"##,
                escape_attr(&doc.id),
                doc.doc_type.icon(),
                escape_html(&doc.title)
            )
        })
        .collect();

    let sections: String = documents.iter().map(document_section).collect();

    let body = format!(
        r#"    <h1>📚 My Organized Documents</h1>
    <p>Generated on {date}</p>
    <div class="toc">
        <h2>📋 Table of Contents</h2>
        {toc}
    </div>
{sections}"#,
        date = generated_on.format("%Y-%m-%d"),
        toc = toc,
        sections = sections,
    );

    Ok(ExportFile {
        file_name: format!("all-documents-{}.html", generated_on.format("%Y-%m-%d")),
        html: html_document("📚 My Organized Documents", &body),
    })
}
