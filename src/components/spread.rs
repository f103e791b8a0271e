use crate::book::{BookState, SpreadView};
use leptos::*;

/// The open spread: one photo pasted on each page, with the page-turn
/// buttons overlaid. The whole spread is rebuilt whenever the projection
/// changes so the spread animation replays on every page turn.
#[component]
pub fn PageSpread(
    state: RwSignal<BookState>,
    spread: Memo<SpreadView>,
    date_stamp: String,
) -> impl IntoView {
    view! {
        {move || {
            let SpreadView { left, right, .. } = spread.get();
            let stamp = date_stamp.clone();
            view! {
                <div class="spread-content">
                    <div class="page left-page">
                        <div class="page-inner animate-spread-left">
                            {left.map(|photo| {
                                view! {
                                    <div class="photo-entry">
                                        <div class="tape-strip top-left"></div>
                                        <div class="image-frame">
                                            <img src=photo.src alt="Memory"/>
                                            <div class="grain-overlay"></div>
                                        </div>
                                        <div class="handwritten-caption">{photo.caption}</div>
                                        <div class="date-stamp">{stamp}</div>
                                    </div>
                                }
                            })}
                        </div>
                    </div>

                    <div class="page right-page">
                        <div class="page-inner animate-spread-right">
                            {match right {
                                Some(photo) => view! {
                                    <div class="photo-entry controls-overlay-wrapper">
                                        <div class="tape-strip top-right"></div>
                                        <div class="image-frame">
                                            <img src=photo.src alt="Memory"/>
                                            <div class="grain-overlay"></div>
                                        </div>
                                        <div class="handwritten-caption">{photo.caption}</div>
                                    </div>
                                }
                                .into_view(),
                                None => view! {
                                    <div class="end-of-book">
                                        <div class="end-text">"The End"</div>
                                    </div>
                                }
                                .into_view(),
                            }}
                        </div>
                    </div>

                    <div class="nav-controls">
                        <button
                            class="nav-btn prev"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                state.update(|s| s.prev_page());
                            }
                            disabled=move || !state.with(|s| s.can_go_prev())
                        >
                            "←"
                        </button>
                        <button
                            class="nav-btn next"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                state.update(|s| s.next_page());
                            }
                            disabled=move || !state.with(|s| s.can_go_next())
                        >
                            "→"
                        </button>
                    </div>
                </div>
            }
        }}
    }
}
