//! Demo Gallery
//!
//! デモフォルダのマニフェスト生成、静的ギャラリーページ生成、
//! プロジェクト一覧生成、ドキュメント整理（JSONファイル保存）、
//! ローカルHTMLライブラリ管理。

pub mod cli;
pub mod config;
pub mod docs;
pub mod error;
pub mod index;
pub mod library;
pub mod manifest;
pub mod render;
pub mod scanner;
pub mod store;
