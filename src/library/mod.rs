//! ローカルHTMLライブラリ
//!
//! 書き出したHTMLファイルを1つのフォルダに集めて管理する。
//! 取り込み・メタデータ付き一覧・検索・重複削除・一覧の書き出し（CSV/JSON）。

use crate::error::{GalleryError, Result};
use crate::index::extract_title;
use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

mod command;

pub use command::run_library;

/// 対象拡張子（大文字小文字を区別しない）
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// 取り込みサイズ上限の既定値（MB）
pub const DEFAULT_MAX_IMPORT_MB: u64 = 10;

lazy_static! {
    static ref DESCRIPTION_RE: Regex = Regex::new(
        r#"(?is)<meta\s+name\s*=\s*["']description["']\s+content\s*=\s*["'](.*?)["']"#
    )
    .unwrap();
}

/// ライブラリ内の1ファイル
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryFile {
    pub filename: String,
    pub path: String,
    pub title: String,
    pub description: String,
    pub size_bytes: u64,
    /// 更新日時（ローカル時刻、秒まで）
    pub modified_time: String,
    /// SHA-256（16進小文字）
    pub checksum: String,
    #[serde(skip)]
    modified: SystemTime,
}

/// 一覧の書き出し形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unsupported format: {}. Use csv or json", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .map(|e| {
            let ext = e.to_string_lossy().to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

pub fn checksum(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// `<meta name="description">` の内容
pub fn extract_description(html: &str) -> Option<String> {
    DESCRIPTION_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// 1ファイル分のメタデータ
pub fn file_metadata(path: &Path) -> Result<LibraryFile> {
    let bytes = std::fs::read(path)?;
    let modified = std::fs::metadata(path)?.modified()?;
    let html = String::from_utf8_lossy(&bytes);

    Ok(LibraryFile {
        filename: path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        path: path.display().to_string(),
        title: extract_title(&html).map(|t| t.trim().to_string()).unwrap_or_default(),
        description: extract_description(&html).unwrap_or_default(),
        size_bytes: bytes.len() as u64,
        modified_time: DateTime::<Local>::from(modified).format("%Y-%m-%dT%H:%M:%S").to_string(),
        checksum: checksum(&bytes),
        modified,
    })
}

/// 取り込み先のファイル名
///
/// 名前指定なら `.html` を補う。既に同名があれば日時を付け、それも埋まっていれば連番を足す。
pub fn destination_for(
    library_dir: &Path,
    source: &Path,
    new_name: Option<&str>,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    let filename = match new_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) if name.ends_with(".html") => name.to_string(),
        Some(name) => format!("{}.html", name),
        None => source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| GalleryError::FileNotFound(source.display().to_string()))?,
    };

    let destination = library_dir.join(&filename);
    if !destination.exists() {
        return Ok(destination);
    }

    let as_path = Path::new(&filename);
    let stem = as_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let ext = as_path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let stamped = format!("{}_{}", stem, now.format("%Y%m%d_%H%M%S"));

    let mut candidate = library_dir.join(format!("{}{}", stamped, ext));
    let mut n = 2;
    while candidate.exists() {
        candidate = library_dir.join(format!("{}_{}{}", stamped, n, ext));
        n += 1;
    }
    Ok(candidate)
}

/// HTMLファイルをライブラリへコピー
pub fn import_file(
    library_dir: &Path,
    source: &Path,
    new_name: Option<&str>,
    max_bytes: u64,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    if !source.is_file() {
        return Err(GalleryError::FileNotFound(source.display().to_string()));
    }

    let size = std::fs::metadata(source)?.len();
    if size > max_bytes {
        return Err(GalleryError::FileTooLarge { size, max: max_bytes });
    }

    std::fs::create_dir_all(library_dir)?;
    let destination = destination_for(library_dir, source, new_name, now)?;
    std::fs::copy(source, &destination)?;

    tracing::info!("Imported {} to {}", source.display(), destination.display());
    Ok(destination)
}

/// フォルダ直下のHTMLを新しい順に（同時刻はファイル名順）
///
/// フォルダがなければ空。読めないファイルは警告して飛ばす。
pub fn list_files(library_dir: &Path) -> Result<Vec<LibraryFile>> {
    if !library_dir.exists() {
        return Ok(Vec::new());
    }
    if !library_dir.is_dir() {
        return Err(GalleryError::NotADirectory(library_dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(library_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_supported(entry.path()) {
            continue;
        }
        match file_metadata(entry.path()) {
            Ok(file) => files.push(file),
            Err(e) => tracing::warn!("Error processing file {}: {}", entry.path().display(), e),
        }
    }

    files.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.filename.cmp(&b.filename)));
    Ok(files)
}

/// ファイル名・タイトル・説明・本文の部分一致（大文字小文字を区別しない）
pub fn search_files(library_dir: &Path, query: &str) -> Result<Vec<LibraryFile>> {
    let query = query.trim().to_lowercase();
    let files = list_files(library_dir)?;
    if query.is_empty() {
        return Ok(files);
    }

    Ok(files
        .into_iter()
        .filter(|file| {
            let in_meta = [&file.filename, &file.title, &file.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&query));
            in_meta
                || match std::fs::read(&file.path) {
                    Ok(bytes) => String::from_utf8_lossy(&bytes).to_lowercase().contains(&query),
                    Err(e) => {
                        tracing::warn!("Error searching in file {}: {}", file.path, e);
                        false
                    }
                }
        })
        .collect())
}

/// 内容が同じファイルを削除し、削除したファイル名を返す
///
/// 最も古いもの（同時刻ならファイル名順で先）を残す。
pub fn cleanup_duplicates(library_dir: &Path) -> Result<Vec<String>> {
    let mut files = list_files(library_dir)?;
    files.sort_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.filename.cmp(&b.filename)));

    let mut seen = HashSet::new();
    let mut removed = Vec::new();
    for file in files {
        if seen.insert(file.checksum.clone()) {
            continue;
        }
        match std::fs::remove_file(&file.path) {
            Ok(()) => {
                tracing::info!("Removed duplicate: {}", file.filename);
                removed.push(file.filename);
            }
            Err(e) => tracing::warn!("Error removing duplicate {}: {}", file.path, e),
        }
    }
    Ok(removed)
}

/// 一覧をCSVまたはJSONの文字列にする
///
/// CSVはヘッダー付き（0件なら空）、JSONは2スペースインデントで末尾改行。
pub fn render_list(files: &[LibraryFile], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for file in files {
                writer.serialize(file)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| GalleryError::Io(e.into_error()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        ExportFormat::Json => Ok(serde_json::to_string_pretty(files)? + "\n"),
    }
}

/// 一覧を書き出す（出力先がフォルダまたは拡張子なしなら日時付きの名前で作る）
pub fn export_list(
    library_dir: &Path,
    format: ExportFormat,
    output: Option<&Path>,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    let files = list_files(library_dir)?;
    let content = render_list(&files, format)?;

    let file_name = format!("library_files_{}.{}", now.format("%Y%m%d_%H%M%S"), format.extension());
    let path = match output {
        Some(out) if out.is_dir() || out.extension().is_none() => out.join(file_name),
        Some(out) => out.to_path_buf(),
        None => PathBuf::from(file_name),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, content)?;

    tracing::info!("Exported {} file(s) to {}", files.len(), path.display());
    Ok(path)
}
