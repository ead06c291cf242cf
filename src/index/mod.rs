//! プロジェクト一覧ページ生成
//!
//! フラットなフォルダ内の `*.html` を集め、各ページの `<title>` を
//! リンク名にした `index.html` を書き出す。

use crate::error::{GalleryError, Result};
use demo_gallery_common::escape::{escape_attr, escape_html};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

lazy_static! {
    static ref TITLE_RE: Regex = Regex::new(r"(?i)<title>(.*?)</title>").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub file: String,
    pub title: String,
    /// ページから見たリンク先
    pub href: String,
}

/// HTMLから `<title>` を取り出す（1行内のみ）
pub fn extract_title(html: &str) -> Option<String> {
    TITLE_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// フォルダ直下の `*.html` をファイル名順に集める
pub fn scan_projects(dir: &Path) -> Result<Vec<Project>> {
    if !dir.is_dir() {
        return Err(GalleryError::FolderNotFound(dir.display().to_string()));
    }

    let link_dir = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "projects".to_string());

    let mut projects = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }
        let is_html = path.extension().map(|e| e == "html").unwrap_or(false);
        if !is_html {
            continue;
        }

        let file = entry.file_name().to_string_lossy().to_string();
        let title = match std::fs::read_to_string(path) {
            Ok(content) => extract_title(&content).unwrap_or_else(|| file_stem(path)),
            Err(e) => {
                tracing::warn!("Error reading file {}: {}", path.display(), e);
                file_stem(path)
            }
        };

        projects.push(Project {
            href: format!("{}/{}", link_dir, file),
            file,
            title,
        });
    }

    Ok(projects)
}

/// 一覧ページのHTML
pub fn render_index(projects: &[Project]) -> String {
    let items = projects
        .iter()
        .map(|p| {
            format!(
                r#"        <li class="project-item">
            <a href="{}" class="project-link">{}</a>
        </li>"#,
                escape_attr(&p.href),
                escape_html(&p.title)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>OpenDemos - Project Gallery</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; line-height: 1.6; }}
        h1 {{ color: #333; border-bottom: 2px solid #007acc; padding-bottom: 10px; }}
        .project-list {{ list-style: none; padding: 0; }}
        .project-item {{ margin: 15px 0; padding: 15px; border: 1px solid #ddd; border-radius: 5px; background-color: #f9f9f9; }}
        .project-link {{ text-decoration: none; color: #007acc; font-weight: bold; font-size: 1.1em; }}
        .project-link:hover {{ text-decoration: underline; color: #005599; }}
        .project-count {{ color: #666; font-style: italic; }}
    </style>
</head>
<body>
    <h1>OpenDemos - Project Gallery</h1>
    <p>Various project demos in browsers (html, etc...)</p>
    <p class="project-count">Total projects: {count}</p>

    <ul class="project-list">
{items}
    </ul>

    <footer>
        <p><em>Generated automatically by demo-gallery index</em></p>
    </footer>
</body>
</html>
"#,
        count = projects.len(),
        items = items,
    )
}

/// 一覧生成の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    NoProjects,
    Written { projects: Vec<Project>, path: PathBuf },
}

/// 走査から書き出しまで
pub fn generate_index(projects_dir: &Path, output: &Path) -> Result<IndexOutcome> {
    let projects = scan_projects(projects_dir)?;

    if projects.is_empty() {
        tracing::info!("No HTML files found in the projects directory.");
        return Ok(IndexOutcome::NoProjects);
    }

    std::fs::write(output, render_index(&projects))?;
    tracing::info!("Generated {} with {} project links", output.display(), projects.len());

    Ok(IndexOutcome::Written {
        projects,
        path: output.to_path_buf(),
    })
}
