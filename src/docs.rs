//! `docs` サブコマンドの実装

use crate::cli::DocsCommand;
use crate::error::Result;
use crate::store::FileStore;
use demo_gallery_common::organizer::format::{format_date, format_size, preview, PREVIEW_CHARS};
use demo_gallery_common::organizer::{ExportFile, NewDocument, Organizer, OrganizerEvent};
use demo_gallery_common::Error;
use dialoguer::Confirm;
use std::path::{Path, PathBuf};

/// 出力先がフォルダ（または拡張子なし）ならファイル名を付ける
fn output_path_for(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        Some(out) if out.is_dir() || out.extension().is_none() => out.join(file_name),
        Some(out) => out.to_path_buf(),
        None => PathBuf::from(file_name),
    }
}

fn write_export(file: &ExportFile, output: Option<&Path>) -> Result<PathBuf> {
    let path = output_path_for(output, &file.file_name);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, &file.html)?;
    Ok(path)
}

fn print_list(organizer: &Organizer<FileStore>) {
    if organizer.is_empty() {
        println!("🎯 ドキュメントはまだありません");
        return;
    }

    println!("{:<22} {:<6} {:<30} {:<10} {:<16}", "ID", "種別", "タイトル", "サイズ", "作成日時");
    println!("{}", "-".repeat(90));
    for doc in organizer.documents() {
        let title = preview(&doc.title, 27);
        println!(
            "{:<22} {:<6} {:<30} {:<10} {:<16}",
            doc.id,
            doc.doc_type.as_str(),
            title,
            format_size(doc.size),
            format_date(&doc.created_at)
        );
        if !doc.content.is_empty() {
            println!("    {}", preview(&doc.content.replace('\n', " "), PREVIEW_CHARS));
        }
    }
}

fn log_event(event: &OrganizerEvent, documents: &[demo_gallery_common::DocumentRecord]) {
    tracing::debug!("{:?} ({} document(s))", event, documents.len());
}

pub fn run_docs(action: DocsCommand, store_path: &Path) -> Result<()> {
    let mut organizer = Organizer::open(FileStore::new(store_path))?;
    organizer.subscribe(log_event);

    match action {
        DocsCommand::AddText { title, content } => {
            let input = NewDocument::text(&title, &content).ok_or(Error::EmptyDocument)?;
            let doc = organizer.create(input)?;
            println!("✔ 追加しました: {} ({})", doc.title, doc.id);
        }

        DocsCommand::AddTab { url, title, content } => {
            let input = NewDocument::tab(&url, &title, &content).ok_or(Error::EmptyDocument)?;
            let doc = organizer.create(input)?;
            println!("✔ 追加しました: {} ({})", doc.title, doc.id);
        }

        DocsCommand::AddFile { path } => {
            let content = std::fs::read_to_string(&path)?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            let doc = organizer.create(NewDocument::file(&file_name, content))?;
            println!("✔ 取り込みました: {} ({}, {})", doc.title, doc.id, format_size(doc.size));
        }

        DocsCommand::New { title, content } => {
            let input = NewDocument::manual(&title, &content).ok_or(Error::EmptyDocument)?;
            let doc = organizer.create(input)?;
            println!("✔ 作成しました: {} ({})", doc.title, doc.id);
        }

        DocsCommand::List => print_list(&organizer),

        DocsCommand::Show { id } => {
            let doc = organizer
                .get(&id)
                .ok_or_else(|| Error::DocumentNotFound(id.clone()))?;
            println!("{} {}", doc.doc_type.icon(), doc.title);
            println!("  作成: {}", format_date(&doc.created_at));
            println!("  サイズ: {}", format_size(doc.size));
            println!("  種別: {}", doc.doc_type.as_str().to_uppercase());
            if let Some(url) = &doc.url {
                println!("  URL: {}", url);
            }
            println!();
            println!("{}", doc.content);
        }

        DocsCommand::Edit { id, title, content } => {
            organizer.update(&id, title.as_deref(), content)?;
            println!("✔ 更新しました: {}", id);
        }

        DocsCommand::Delete { id, yes } => {
            let title = organizer
                .get(&id)
                .map(|d| d.title.clone())
                .ok_or_else(|| Error::DocumentNotFound(id.clone()))?;

            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!("🗑️ \"{}\" を削除しますか?", title))
                    .default(false)
                    .interact()?;

            if confirmed {
                organizer.delete(&id)?;
                println!("✔ 削除しました: {}", title);
            } else {
                println!("削除を中止しました");
            }
        }

        DocsCommand::Sort { by } => {
            organizer.sort(by)?;
            println!("✔ {} で並び替えました", by);
            print_list(&organizer);
        }

        DocsCommand::Export { id, output } => {
            let file = organizer.export_document(&id)?;
            let path = write_export(&file, output.as_deref())?;
            println!("✔ 出力しました: {}", path.display());
        }

        DocsCommand::ExportAll { output } => {
            let today = chrono::Local::now().date_naive();
            let file = organizer.export_all(today)?;
            let path = write_export(&file, output.as_deref())?;
            println!("✔ {}件を出力しました: {}", organizer.len(), path.display());
        }
    }

    Ok(())
}
