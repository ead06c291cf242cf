//! メインアプリケーションコンポーネント

use crate::components::{
    document_detail::DocumentDetail,
    document_form::DocumentForm,
    document_list::DocumentList,
    gallery::DemoGallery,
    header::Header,
};
use crate::storage::LocalStore;
use demo_gallery_common::organizer::{Organizer, OrganizerEvent};
use gloo::timers::callback::Interval;
use leptos::prelude::*;

/// ページからの相対パス
const MANIFEST_URL: &str = "demos.json";

const AUTOSAVE_INTERVAL_MS: u32 = 30_000;

/// 整理機能の状態（リスナーを持つのでスレッドローカル）
pub type OrganizerSignal = RwSignal<Organizer<LocalStore>, LocalStorage>;

/// 表示中のページ
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Gallery,
    Organizer,
}

fn status_message(event: &OrganizerEvent, count: usize) -> String {
    match event {
        OrganizerEvent::Added(_) => format!("✅ Added! {} document(s) organized", count),
        OrganizerEvent::Updated(_) => "💾 Changes saved".to_string(),
        OrganizerEvent::Deleted(_) => format!("🗑️ Deleted. {} document(s) left", count),
        OrganizerEvent::Sorted(key) => format!("🔀 Sorted by {}", key),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Gallery);
    let status = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<String>);

    let mut documents = Organizer::open_or_empty(LocalStore);
    documents.subscribe(move |event, all| status.set(status_message(event, all.len())));
    let organizer: OrganizerSignal = RwSignal::new_local(documents);

    // App はページの寿命と同じなのでタイマーは手放す
    Interval::new(AUTOSAVE_INTERVAL_MS, move || {
        if let Some(Err(e)) = organizer.try_update(|o| o.autosave()) {
            web_sys::console::error_1(&format!("Auto-save failed: {}", e).into());
        }
    })
    .forget();

    view! {
        <div class="container">
            <Header page=page set_page=set_page />

            <div class:hidden=move || page.get() != Page::Gallery>
                <DemoGallery manifest_url=MANIFEST_URL />
            </div>

            <div class:hidden=move || page.get() != Page::Organizer>
                <DocumentForm organizer=organizer status=status />
                <p class="status">{move || status.get()}</p>
                <DocumentList organizer=organizer selected=selected status=status />
                <DocumentDetail organizer=organizer selected=selected status=status />
            </div>
        </div>
    }
}
