//! `library` サブコマンドの実装

use super::{
    cleanup_duplicates, export_list, import_file, list_files, render_list, search_files, ExportFormat,
    LibraryFile,
};
use crate::cli::LibraryCommand;
use crate::error::Result;
use demo_gallery_common::organizer::format::{format_size, preview};
use std::path::Path;

fn print_table(files: &[LibraryFile]) {
    println!("{:<30} {:<10} {:<40} {:<20}", "ファイル名", "サイズ", "タイトル", "更新日時");
    println!("{}", "-".repeat(100));
    for file in files {
        println!(
            "{:<30} {:<10} {:<40} {:<20}",
            preview(&file.filename, 27),
            format_size(file.size_bytes as usize),
            preview(&file.title, 37),
            file.modified_time
        );
    }
}

pub fn run_library(action: LibraryCommand, library_dir: &Path, max_bytes: u64) -> Result<()> {
    match action {
        LibraryCommand::Import { path, name } => {
            let dest = import_file(library_dir, &path, name.as_deref(), max_bytes, chrono::Local::now())?;
            println!("✔ 取り込みました: {}", dest.display());
        }

        LibraryCommand::List { json } => {
            let files = list_files(library_dir)?;
            if json {
                print!("{}", render_list(&files, ExportFormat::Json)?);
            } else if files.is_empty() {
                println!("HTMLファイルがありません: {}", library_dir.display());
            } else {
                print_table(&files);
            }
        }

        LibraryCommand::Search { query } => {
            let results = search_files(library_dir, &query)?;
            if results.is_empty() {
                println!("該当するファイルはありません: {}", query);
            } else {
                println!("🔍 \"{}\" に一致: {}件", query, results.len());
                print_table(&results);
            }
        }

        LibraryCommand::Cleanup => {
            let removed = cleanup_duplicates(library_dir)?;
            if removed.is_empty() {
                println!("重複はありません");
            } else {
                println!("✔ {}件の重複を削除しました:", removed.len());
                for name in &removed {
                    println!("  - {}", name);
                }
            }
        }

        LibraryCommand::ExportList { format, output } => {
            let path = export_list(library_dir, format, output.as_deref(), chrono::Local::now())?;
            println!("✔ 一覧を出力しました: {}", path.display());
        }
    }

    Ok(())
}
