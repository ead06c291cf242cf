//! ドキュメント詳細（表示・編集・削除・出力）

use crate::app::OrganizerSignal;
use crate::download::download_html;
use demo_gallery_common::organizer::render::render_detail;
use demo_gallery_common::DocumentRecord;
use leptos::prelude::*;

#[component]
pub fn DocumentDetail(
    organizer: OrganizerSignal,
    selected: RwSignal<Option<String>>,
    status: RwSignal<String>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(String::new());
    let (edit_content, set_edit_content) = signal(String::new());

    let current = move || -> Option<DocumentRecord> {
        let id = selected.get()?;
        organizer.with(|o| o.get(&id).cloned())
    };
    let current_untracked = move || -> Option<DocumentRecord> {
        let id = selected.get_untracked()?;
        organizer.with_untracked(|o| o.get(&id).cloned())
    };

    let close = move || {
        selected.set(None);
        set_editing.set(false);
    };

    let on_edit = move |_| {
        if let Some(doc) = current_untracked() {
            set_edit_title.set(doc.title);
            set_edit_content.set(doc.content);
            set_editing.set(true);
        }
    };

    let on_save = move |_| {
        let Some(id) = selected.get_untracked() else {
            return;
        };
        let title = edit_title.get_untracked();
        let content = edit_content.get_untracked();
        match organizer.try_update(|o| o.update(&id, Some(&title), Some(content))) {
            Some(Err(e)) => status.set(format!("⚠️ {}", e)),
            _ => set_editing.set(false),
        }
    };

    let on_delete = move |_| {
        let Some(doc) = current_untracked() else {
            return;
        };
        if !gloo::dialogs::confirm(&format!("🗑️ Delete \"{}\"?", doc.title)) {
            return;
        }
        match organizer.try_update(|o| o.delete(&doc.id).map(|_| ())) {
            Some(Err(e)) => status.set(format!("⚠️ {}", e)),
            _ => close(),
        }
    };

    let on_export = move |_| {
        let Some(id) = selected.get_untracked() else {
            return;
        };
        match organizer.with_untracked(|o| o.export_document(&id)) {
            Ok(file) => {
                if let Err(e) = download_html(&file) {
                    web_sys::console::error_1(&e);
                }
            }
            Err(e) => status.set(format!("⚠️ {}", e)),
        }
    };

    view! {
        <Show when=move || current().is_some()>
            <div class="modal">
                <div class="modal-content">
                    <div class="modal-header">
                        <h2>
                            {move || {
                                current()
                                    .map(|d| format!("{} {}", d.doc_type.icon(), d.title))
                                    .unwrap_or_default()
                            }}
                        </h2>
                        <button class="close" on:click=move |_| close()>"×"</button>
                    </div>

                    <Show
                        when=move || editing.get()
                        fallback=move || {
                            view! {
                                <div
                                    class="document-detail"
                                    inner_html=move || current().map(|d| render_detail(&d)).unwrap_or_default()
                                ></div>
                            }
                        }
                    >
                        <input
                            type="text"
                            class="edit-title"
                            prop:value=move || edit_title.get()
                            on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                        />
                        <textarea
                            class="edit-content"
                            prop:value=move || edit_content.get()
                            on:input=move |ev| set_edit_content.set(event_target_value(&ev))
                        ></textarea>
                    </Show>

                    <div class="modal-actions">
                        <Show
                            when=move || editing.get()
                            fallback=move || view! { <button class="btn" on:click=on_edit>"✏️ Edit"</button> }
                        >
                            <button class="btn btn-primary" on:click=on_save>"💾 Save"</button>
                            <button class="btn" on:click=move |_| set_editing.set(false)>"Cancel"</button>
                        </Show>
                        <button class="btn btn-secondary" on:click=on_export>"📄 Export"</button>
                        <button class="btn btn-danger" on:click=on_delete>"🗑️ Delete"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
