use crate::book::BookState;
use leptos::*;

/// The hardcover pair: the clickable front with the embossed frame, and the
/// plain back the pages rest on. Opening is one-way; the cover swings aside
/// and stays there.
#[component]
pub fn BookCover(
    state: RwSignal<BookState>,
    title: String,
    subtitle: String,
    cover_date: String,
) -> impl IntoView {
    view! {
        <div
            class="hardcover front"
            class:open=move || state.with(|s| s.is_open())
            on:click=move |_| state.update(|s| s.open())
        >
            <div class="book-cover-content">
                <div class="leather-texture"></div>
                <div class="gold-frame">
                    <div class="logo-icon">"✦"</div>
                    <h1 class="cover-title">{title}</h1>
                    <div class="cover-subtitle">{subtitle}</div>
                    <div class="divider-line"></div>
                    <div class="cover-location">{cover_date}</div>
                    {move || {
                        (!state.with(|s| s.is_open())).then(|| {
                            view! { <div class="click-hint">"CLICK TO OPEN"</div> }
                        })
                    }}
                </div>
            </div>
        </div>

        <div class="hardcover back">
            <div class="leather-texture"></div>
        </div>
    }
}
