use anyhow::Context;
use clap::Parser;
use demo_gallery::{cli, config, docs, index, library, manifest, render};
use cli::{Cli, Commands};
use config::Config;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::INFO
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(level)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Commands::Build { demos: None, output: None });

    // 書き戻す config 以外は壊れた設定でも既定値で続行
    let config = match command {
        Commands::Config { .. } => Config::load().context("設定の読み込みに失敗")?,
        _ => Config::load_or_default(),
    };

    match command {
        Commands::Build { demos, output } => {
            let demos = demos.unwrap_or_else(|| config.demos_dir.clone());
            let output = output.unwrap_or_else(|| config.manifest_path.clone());

            match manifest::build_manifest(&demos, &output)
                .with_context(|| format!("マニフェスト生成に失敗: {}", demos.display()))?
            {
                manifest::BuildOutcome::NoDemosDir(_) => {
                    println!("デモフォルダがないためスキップしました");
                }
                manifest::BuildOutcome::Written { count, path } => {
                    println!("✔ {}件のデモを書き出しました: {}", count, path.display());
                }
            }
        }

        Commands::Render { manifest, output, search, tags, title } => {
            let manifest = manifest.unwrap_or_else(|| config.manifest_path.clone());
            let output = output.unwrap_or_else(|| config.page_path.clone());
            let title = title.unwrap_or_else(|| config.page_title.clone());

            let shown = render::render_gallery_page(&manifest, &output, &search, &tags, &title)
                .with_context(|| format!("Could not load {}", manifest.display()))?;
            println!("✔ {}件を表示するページを生成: {}", shown, output.display());
        }

        Commands::Index { projects, output } => {
            let projects = projects.unwrap_or_else(|| config.projects_dir.clone());
            let output = output.unwrap_or_else(|| config.index_path.clone());

            match index::generate_index(&projects, &output)
                .with_context(|| format!("一覧生成に失敗: {}", projects.display()))?
            {
                index::IndexOutcome::NoProjects => {
                    println!("HTMLファイルが見つかりません: {}", projects.display());
                }
                index::IndexOutcome::Written { projects, path } => {
                    println!("✔ {}件のリンクを生成: {}", projects.len(), path.display());
                    for (i, project) in projects.iter().enumerate() {
                        println!("{}. {}", i + 1, project.title);
                    }
                }
            }
        }

        Commands::Docs { store, action } => {
            let store_path = match store {
                Some(path) => path,
                None => config.store_path()?,
            };
            docs::run_docs(action, &store_path)?;
        }

        Commands::Library { dir, action } => {
            let dir = dir.unwrap_or_else(|| config.library_dir.clone());
            library::run_library(action, &dir, config.max_import_bytes())?;
        }

        Commands::Config { set_demos_dir, set_manifest, set_store, set_library_dir, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(dir) = set_demos_dir {
                config.demos_dir = dir;
                changed = true;
            }
            if let Some(path) = set_manifest {
                config.manifest_path = path;
                changed = true;
            }
            if let Some(path) = set_store {
                config.store_path = Some(path);
                changed = true;
            }
            if let Some(dir) = set_library_dir {
                config.library_dir = dir;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  デモフォルダ: {}", config.demos_dir.display());
                println!("  マニフェスト: {}", config.manifest_path.display());
                println!("  ギャラリーページ: {}", config.page_path.display());
                println!("  プロジェクトフォルダ: {}", config.projects_dir.display());
                println!("  HTMLライブラリ: {}", config.library_dir.display());
                match config.store_path() {
                    Ok(path) => println!("  ドキュメント保存先: {}", path.display()),
                    Err(e) => println!("  ドキュメント保存先: 不明 ({})", e),
                }
            }
        }
    }

    Ok(())
}
