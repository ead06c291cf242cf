//! Demo Gallery Common Library
//!
//! CLIとWeb(WASM)で共有される型・フィルタ・レンダリング

pub mod error;
pub mod escape;
pub mod gallery;
pub mod organizer;
pub mod types;

pub use error::{Error, Result};
pub use escape::{escape_attr, escape_html};
pub use gallery::{card_html, parse_manifest, render_page, tag_cloud, GalleryState};
pub use organizer::{DocumentRecord, DocumentStore, DocumentType, NewDocument, Organizer, SortKey};
pub use types::{compare_titles, DemoEntry, DemoMeta};
