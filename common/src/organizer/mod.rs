//! ドキュメント整理
//!
//! 一覧は [`Organizer`] が保持し、変更のたびに [`DocumentStore`] へ丸ごと書き戻す。
//! 変更後の副作用（通知表示など）はリスナー登録で受け取る。

pub mod export;
pub mod format;
pub mod record;
pub mod render;
pub mod store;

pub use export::{export_all, export_document, ExportFile};
pub use record::{generate_id, new_id, DocumentRecord, DocumentType, NewDocument};
pub use store::{DocumentStore, MemoryStore, STORAGE_KEY};

use crate::types::compare_titles;
use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// 並び替えキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// 作成日時（新しい順）
    Date,
    /// タイトル（昇順）
    Title,
    /// サイズ（大きい順）
    Size,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "title" => Ok(SortKey::Title),
            "size" => Ok(SortKey::Size),
            _ => Err(format!("Unknown sort key: {}. Use date, title, or size", s)),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Date => write!(f, "date"),
            SortKey::Title => write!(f, "title"),
            SortKey::Size => write!(f, "size"),
        }
    }
}

/// 変更通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrganizerEvent {
    Added(String),
    Updated(String),
    Deleted(String),
    Sorted(SortKey),
}

type Listener = Box<dyn FnMut(&OrganizerEvent, &[DocumentRecord])>;

/// ドキュメント一覧のコントローラ
pub struct Organizer<S: DocumentStore> {
    documents: Vec<DocumentRecord>,
    store: S,
    listeners: Vec<Listener>,
}

impl<S: DocumentStore> Organizer<S> {
    /// 保存先から読み込んで開く
    pub fn open(store: S) -> Result<Self> {
        let documents = store.load()?;
        Ok(Self { documents, store, listeners: Vec::new() })
    }

    /// 保存先が壊れていても空の一覧で開く
    pub fn open_or_empty(store: S) -> Self {
        let documents = match store.load() {
            Ok(documents) => documents,
            Err(e) => {
                tracing::warn!("Stored documents could not be read, starting empty: {}", e);
                Vec::new()
            }
        };
        Self { documents, store, listeners: Vec::new() }
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn get(&self, id: &str) -> Option<&DocumentRecord> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// 変更リスナーを登録
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&OrganizerEvent, &[DocumentRecord]) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// 追加（IDと作成日時を採番）
    pub fn create(&mut self, input: NewDocument) -> Result<&DocumentRecord> {
        self.create_at(input, Utc::now())
    }

    /// 追加（作成日時を指定）
    pub fn create_at(&mut self, input: NewDocument, now: DateTime<Utc>) -> Result<&DocumentRecord> {
        let mut id = new_id(now);
        while self.get(&id).is_some() {
            id = new_id(now);
        }

        let mut next = self.documents.clone();
        next.push(input.into_record(id.clone(), now));
        self.commit(next, OrganizerEvent::Added(id))?;

        let idx = self.documents.len() - 1;
        Ok(&self.documents[idx])
    }

    /// タイトル・本文の編集
    ///
    /// タイトルは空白のみなら変更しない。本文を変えたらサイズを再計算する。
    pub fn update(&mut self, id: &str, title: Option<&str>, content: Option<String>) -> Result<()> {
        let idx = self.position(id)?;
        let mut next = self.documents.clone();
        let doc = &mut next[idx];

        if let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) {
            doc.title = title.to_string();
        }
        if let Some(content) = content {
            doc.set_content(content);
        }

        self.commit(next, OrganizerEvent::Updated(id.to_string()))
    }

    /// 削除（確認は呼び出し側で行う）
    pub fn delete(&mut self, id: &str) -> Result<DocumentRecord> {
        let idx = self.position(id)?;
        let mut next = self.documents.clone();
        let removed = next.remove(idx);

        self.commit(next, OrganizerEvent::Deleted(removed.id.clone()))?;
        Ok(removed)
    }

    /// 並び替えて保存
    pub fn sort(&mut self, key: SortKey) -> Result<()> {
        let mut next = self.documents.clone();
        match key {
            SortKey::Date => next.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortKey::Title => next.sort_by(|a, b| compare_titles(&a.title, &b.title)),
            SortKey::Size => next.sort_by(|a, b| b.size.cmp(&a.size)),
        }
        self.commit(next, OrganizerEvent::Sorted(key))
    }

    /// 定期保存（空なら何もしない）
    pub fn autosave(&mut self) -> Result<bool> {
        if self.documents.is_empty() {
            return Ok(false);
        }
        self.store.save(&self.documents)?;
        tracing::debug!("Auto-saved {} document(s)", self.documents.len());
        Ok(true)
    }

    pub fn export_document(&self, id: &str) -> Result<ExportFile> {
        self.get(id)
            .map(export_document)
            .ok_or_else(|| Error::DocumentNotFound(id.to_string()))
    }

    pub fn export_all(&self, generated_on: chrono::NaiveDate) -> Result<ExportFile> {
        export_all(&self.documents, generated_on)
    }

    pub fn render_list(&self) -> String {
        render::render_list(&self.documents)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.documents
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| Error::DocumentNotFound(id.to_string()))
    }

    /// 保存に成功した一覧だけを反映して通知する
    fn commit(&mut self, next: Vec<DocumentRecord>, event: OrganizerEvent) -> Result<()> {
        self.store.save(&next)?;
        self.documents = next;
        for listener in &mut self.listeners {
            listener(&event, &self.documents);
        }
        Ok(())
    }
}
