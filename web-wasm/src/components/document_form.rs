//! ドキュメント追加フォーム
//!
//! タブ内容の貼り付け・テキスト・ファイル・手動作成の4通り。

use crate::app::OrganizerSignal;
use demo_gallery_common::organizer::NewDocument;
use demo_gallery_common::Error;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, FileReader, HtmlInputElement};

const TITLE_REQUIRED: &str = "⚠️ Please enter a title for the new document";

#[component]
pub fn DocumentForm(organizer: OrganizerSignal, status: RwSignal<String>) -> impl IntoView {
    let (tab_url, set_tab_url) = signal(String::new());
    let (tab_title, set_tab_title) = signal(String::new());
    let (tab_content, set_tab_content) = signal(String::new());
    let (text_title, set_text_title) = signal(String::new());
    let (text_content, set_text_content) = signal(String::new());
    let (manual_title, set_manual_title) = signal(String::new());
    let (manual_content, set_manual_content) = signal(String::new());
    let (is_dragover, set_is_dragover) = signal(false);

    // 追加できたら true
    let add = move |input: NewDocument| -> bool {
        match organizer.try_update(|o| o.create(input).map(|_| ())) {
            Some(Ok(())) => true,
            Some(Err(e)) => {
                status.set(format!("⚠️ {}", e));
                false
            }
            None => false,
        }
    };

    let on_add_tab = move |_| {
        let input = NewDocument::tab(
            &tab_url.get_untracked(),
            &tab_title.get_untracked(),
            &tab_content.get_untracked(),
        );
        let Some(input) = input else {
            status.set(format!("⚠️ {}", Error::EmptyDocument));
            return;
        };
        if add(input) {
            set_tab_url.set(String::new());
            set_tab_title.set(String::new());
            set_tab_content.set(String::new());
        }
    };

    let on_add_text = move |_| {
        let input = NewDocument::text(&text_title.get_untracked(), &text_content.get_untracked());
        let Some(input) = input else {
            status.set(format!("⚠️ {}", Error::EmptyDocument));
            return;
        };
        if add(input) {
            set_text_title.set(String::new());
            set_text_content.set(String::new());
        }
    };

    let on_create = move |_| {
        let input = NewDocument::manual(&manual_title.get_untracked(), &manual_content.get_untracked());
        let Some(input) = input else {
            status.set(TITLE_REQUIRED.to_string());
            return;
        };
        if add(input) {
            set_manual_title.set(String::new());
            set_manual_content.set(String::new());
        }
    };

    let on_file_loaded = move |file_name: String, content: String| {
        add(NewDocument::file(&file_name, content));
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            read_files(files, on_file_loaded);
        }
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            read_files(files, on_file_loaded);
        }
    };

    view! {
        <section class="document-form">
            <div class="form-section">
                <h3>"🌐 Paste a tab"</h3>
                <input
                    type="url"
                    placeholder="https://..."
                    prop:value=move || tab_url.get()
                    on:input=move |ev| set_tab_url.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Page title"
                    prop:value=move || tab_title.get()
                    on:input=move |ev| set_tab_title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Page content"
                    prop:value=move || tab_content.get()
                    on:input=move |ev| set_tab_content.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn-primary" on:click=on_add_tab>"Add Tab"</button>
            </div>

            <div class="form-section">
                <h3>"📝 Add text"</h3>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || text_title.get()
                    on:input=move |ev| set_text_title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Content"
                    prop:value=move || text_content.get()
                    on:input=move |ev| set_text_content.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn-primary" on:click=on_add_text>"Add Text"</button>
            </div>

            <div class="form-section">
                <h3>"📁 Import files"</h3>
                <div
                    class="drop-zone"
                    class:dragover=move || is_dragover.get()
                    on:dragover=move |ev: DragEvent| {
                        ev.prevent_default();
                        set_is_dragover.set(true);
                    }
                    on:dragleave=move |_| set_is_dragover.set(false)
                    on:drop=on_drop
                >
                    <p>"Drop text files here or choose them below"</p>
                    <input type="file" multiple=true on:change=on_file_change />
                </div>
            </div>

            <div class="form-section">
                <h3>"✍️ New document"</h3>
                <input
                    type="text"
                    placeholder="Title (required)"
                    prop:value=move || manual_title.get()
                    on:input=move |ev| set_manual_title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Content"
                    prop:value=move || manual_content.get()
                    on:input=move |ev| set_manual_content.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn-primary" on:click=on_create>"Create"</button>
            </div>
        </section>
    }
}

fn read_files<F>(files: FileList, on_loaded: F)
where
    F: Fn(String, String) + Copy + 'static,
{
    for i in 0..files.length() {
        if let Some(file) = files.get(i) {
            read_text_file(file, on_loaded);
        }
    }
}

/// ファイルをテキストとして読み込み、終わったら `on_loaded(ファイル名, 本文)`
fn read_text_file<F>(file: File, on_loaded: F)
where
    F: Fn(String, String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            web_sys::console::error_1(&e);
            return;
        }
    };

    let file_name = file.name();
    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Some(text) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            on_loaded(file_name.clone(), text);
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_text(&file) {
        web_sys::console::error_1(&e);
    }
}
