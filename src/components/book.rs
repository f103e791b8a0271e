use crate::book::{spread_for_page, BookState};
use crate::browser;
use crate::components::{BookCover, PageSpread, RedirectToast};
use crate::config::{Album, COUNTDOWN_TICK_MS, REDIRECT_DELAY_MS};
use crate::timer::Countdown;
use leptos::*;

#[component]
pub fn PhotoBook() -> impl IntoView {
    let album = Album::load();
    let state = create_rw_signal(BookState::new(album.image_count()));
    let (redirect_in, set_redirect_in) = create_signal(None::<u32>);

    let title = album.title.clone();
    let subtitle = album.subtitle.clone();
    let cover_date = album.cover_date.clone();
    let date_stamp = album.date_stamp.clone();
    let redirect_label = album.redirect_label.clone();
    let redirect_url = album.redirect_url.clone();

    let spread =
        create_memo(move |_| spread_for_page(&album, state.with(|s| s.visible_page())));

    // Memoized so the countdown effect only fires when this actually flips,
    // not on every state notification.
    let on_last_spread = create_memo(move |_| state.with(|s| s.on_last_spread()));

    // Replacing the stored countdown cancels the previous one; leaving the
    // last spread or tearing the component down stores None.
    let countdown = store_value(None::<Countdown>);
    create_effect(move |_| {
        countdown.set_value(None);
        if on_last_spread.get() {
            let url = redirect_url.clone();
            let armed = Countdown::arm(
                REDIRECT_DELAY_MS,
                COUNTDOWN_TICK_MS,
                move |seconds| set_redirect_in.set(Some(seconds)),
                move || browser::redirect_to(&url),
            );
            match armed {
                Ok(running) => countdown.set_value(Some(running)),
                Err(_) => {
                    browser::log_warning("Keepsake: could not schedule the redirect countdown")
                }
            }
        } else {
            set_redirect_in.set(None);
        }
    });
    on_cleanup(move || countdown.set_value(None));

    view! {
        <div class="scene">
            <div class="book-chassis" class:open=move || state.with(|s| s.is_open())>
                <BookCover
                    state=state
                    title=title
                    subtitle=subtitle
                    cover_date=cover_date
                />

                <div class="paper-spread">
                    <div class="center-spine"></div>
                    <PageSpread state=state spread=spread date_stamp=date_stamp/>
                </div>
            </div>

            <RedirectToast redirect_in=redirect_in label=redirect_label/>
        </div>
    }
}
