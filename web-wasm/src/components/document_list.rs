//! ドキュメント一覧

use crate::app::OrganizerSignal;
use crate::download::download_html;
use demo_gallery_common::SortKey;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

#[component]
pub fn DocumentList(
    organizer: OrganizerSignal,
    selected: RwSignal<Option<String>>,
    status: RwSignal<String>,
) -> impl IntoView {
    let on_sort = move |ev: web_sys::Event| {
        let Ok(key) = event_target_value(&ev).parse::<SortKey>() else {
            return;
        };
        if let Some(Err(e)) = organizer.try_update(|o| o.sort(key)) {
            status.set(format!("⚠️ {}", e));
        }
    };

    let on_export_all = move |_| {
        let today = chrono::Local::now().date_naive();
        match organizer.with_untracked(|o| o.export_all(today)) {
            Ok(file) => match download_html(&file) {
                Ok(()) => status.set(format!("📦 Exported {}", file.file_name)),
                Err(e) => web_sys::console::error_1(&e),
            },
            Err(e) => status.set(format!("⚠️ {}", e)),
        }
    };

    // カードは inner_html で描くのでクリックは親で拾う
    let on_list_click = move |ev: MouseEvent| {
        let id = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(".document-card").ok().flatten())
            .and_then(|card| card.get_attribute("data-id"));
        if let Some(id) = id {
            selected.set(Some(id));
        }
    };

    view! {
        <section class="documents">
            <div class="documents-header">
                <h2>{move || format!("📚 Documents ({})", organizer.with(|o| o.len()))}</h2>
                <select class="sort-select" on:change=on_sort>
                    <option value="">"Sort by..."</option>
                    <option value="date">"📅 Date"</option>
                    <option value="title">"🔤 Title"</option>
                    <option value="size">"📏 Size"</option>
                </select>
                <button
                    class="btn btn-secondary"
                    disabled=move || organizer.with(|o| o.is_empty())
                    on:click=on_export_all
                >
                    "📦 Export All"
                </button>
            </div>
            <div
                class="document-list"
                on:click=on_list_click
                inner_html=move || organizer.with(|o| o.render_list())
            ></div>
        </section>
    }
}
