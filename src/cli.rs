use clap::{Parser, Subcommand};
use crate::library::ExportFormat;
use demo_gallery_common::SortKey;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "demo-gallery")]
#[command(about = "デモギャラリーのマニフェスト生成・ページ生成・ドキュメント整理", long_about = None)]
#[command(version)]
pub struct Cli {
    /// 省略時はマニフェスト生成
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// デモフォルダを走査して demos.json を生成
    Build {
        /// デモフォルダ（デフォルト: 設定値 / demos）
        #[arg(short, long)]
        demos: Option<PathBuf>,

        /// 出力JSONファイル（デフォルト: 設定値 / demos.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// マニフェストから静的ギャラリーページを生成
    Render {
        /// 入力マニフェスト
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// 出力HTMLファイル
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 検索文字列
        #[arg(short, long, default_value = "")]
        search: String,

        /// 絞り込みタグ（複数指定可）
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// ページタイトル
        #[arg(long)]
        title: Option<String>,
    },

    /// HTMLプロジェクトフォルダから index.html を生成
    Index {
        /// プロジェクトフォルダ
        #[arg(short, long)]
        projects: Option<PathBuf>,

        /// 出力HTMLファイル
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ドキュメント整理
    Docs {
        /// 保存先JSONファイル
        #[arg(long, global = true)]
        store: Option<PathBuf>,

        #[command(subcommand)]
        action: DocsCommand,
    },

    /// ローカルHTMLライブラリ
    Library {
        /// ライブラリフォルダ（デフォルト: 設定値 / html_library）
        #[arg(long, global = true)]
        dir: Option<PathBuf>,

        #[command(subcommand)]
        action: LibraryCommand,
    },

    /// 設定を表示/編集
    Config {
        /// デモフォルダを設定
        #[arg(long)]
        set_demos_dir: Option<PathBuf>,

        /// マニフェスト出力先を設定
        #[arg(long)]
        set_manifest: Option<PathBuf>,

        /// ドキュメント保存先を設定
        #[arg(long)]
        set_store: Option<PathBuf>,

        /// HTMLライブラリフォルダを設定
        #[arg(long)]
        set_library_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum DocsCommand {
    /// テキストを追加
    AddText {
        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short, long, default_value = "")]
        content: String,
    },

    /// ブラウザのタブ内容を追加
    AddTab {
        #[arg(short, long, default_value = "")]
        url: String,

        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short, long, default_value = "")]
        content: String,
    },

    /// ファイルをテキストとして取り込む
    AddFile {
        #[arg(required = true)]
        path: PathBuf,
    },

    /// 新規ドキュメント（タイトル必須）
    New {
        #[arg(required = true)]
        title: String,

        #[arg(short, long, default_value = "")]
        content: String,
    },

    /// 一覧表示
    List,

    /// 1件を全文表示
    Show {
        #[arg(required = true)]
        id: String,
    },

    /// タイトル・本文を編集
    Edit {
        #[arg(required = true)]
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,
    },

    /// 削除
    Delete {
        #[arg(required = true)]
        id: String,

        /// 確認を省略
        #[arg(short, long)]
        yes: bool,
    },

    /// 並び替えて保存 (date/title/size)
    Sort {
        #[arg(required = true)]
        by: SortKey,
    },

    /// 1件をHTMLに出力
    Export {
        #[arg(required = true)]
        id: String,

        /// 出力先（ファイルまたはフォルダ）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 全件を目次付きHTMLに出力
    ExportAll {
        /// 出力先（ファイルまたはフォルダ）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum LibraryCommand {
    /// HTMLファイルを取り込む
    Import {
        #[arg(required = true)]
        path: PathBuf,

        /// 取り込み後のファイル名
        #[arg(short, long)]
        name: Option<String>,
    },

    /// メタデータ付き一覧
    List {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// ファイル名・タイトル・本文を検索
    Search {
        #[arg(required = true)]
        query: String,
    },

    /// 内容が同じファイルを削除
    Cleanup,

    /// 一覧を書き出す (csv/json)
    ExportList {
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// 出力先（ファイルまたはフォルダ）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
