//! ヘッダーコンポーネント

use crate::app::Page;
use leptos::prelude::*;

#[component]
pub fn Header(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Demo Gallery"</h1>
            <nav class="tabs">
                <button
                    class="tab"
                    class:active=move || page.get() == Page::Gallery
                    on:click=move |_| set_page.set(Page::Gallery)
                >
                    "🖼️ Gallery"
                </button>
                <button
                    class="tab"
                    class:active=move || page.get() == Page::Organizer
                    on:click=move |_| set_page.set(Page::Organizer)
                >
                    "📚 Organizer"
                </button>
            </nav>
        </header>
    }
}
