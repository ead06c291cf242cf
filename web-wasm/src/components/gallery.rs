//! デモギャラリーコンポーネント
//!
//! カードのマークアップは共通ライブラリが作り、エスケープ済みのものを
//! そのまま `inner_html` に流す。

use crate::fetch::fetch_manifest;
use demo_gallery_common::gallery::{GalleryState, LOAD_ERROR_MESSAGE};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LoadState {
    Loading,
    Loaded,
    Failed,
}

#[component]
pub fn DemoGallery(manifest_url: &'static str) -> impl IntoView {
    let state = RwSignal::new(GalleryState::default());
    let (load_state, set_load_state) = signal(LoadState::Loading);

    spawn_local(async move {
        match fetch_manifest(manifest_url).await {
            Ok(demos) => {
                state.update(|s| s.load(demos));
                set_load_state.set(LoadState::Loaded);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load {}: {}", manifest_url, e).into());
                set_load_state.set(LoadState::Failed);
            }
        }
    });

    let grid_html = move || match load_state.get() {
        LoadState::Loading => String::new(),
        LoadState::Failed => LOAD_ERROR_MESSAGE.to_string(),
        LoadState::Loaded => state.with(|s| s.render_grid()),
    };

    view! {
        <section class="gallery">
            <input
                type="search"
                id="search"
                class="search"
                placeholder="Search demos..."
                prop:value=move || state.with(|s| s.search().to_string())
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    state.update(|s| s.set_search(query));
                }
            />

            <div id="tags" class="tags">
                <For
                    each=move || state.with(|s| s.tag_cloud())
                    key=|(tag, count)| (tag.clone(), *count)
                    children=move |(tag, count)| view! { <TagButton tag=tag count=count state=state /> }
                />
            </div>

            <p class="count">
                {move || state.with(|s| format!("{} / {}", s.filtered().len(), s.demos().len()))}
            </p>

            <div id="grid" class="grid" inner_html=grid_html></div>
        </section>
    }
}

#[component]
fn TagButton(tag: String, count: usize, state: RwSignal<GalleryState>) -> impl IntoView {
    let is_active = {
        let tag = tag.clone();
        move || state.with(|s| s.is_active(&tag))
    };
    let is_pressed = is_active.clone();
    let label = format!("{} ({})", tag, count);

    view! {
        <button
            type="button"
            class="tag"
            class:active=is_active
            aria-pressed=move || is_pressed().to_string()
            on:click=move |_| {
                state.update(|s| {
                    s.toggle_tag(&tag);
                });
            }
        >
            {label}
        </button>
    }
}
