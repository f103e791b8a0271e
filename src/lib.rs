pub mod book;
pub mod browser;
pub mod components;
pub mod config;
pub mod pages;
pub mod timer;

use components::PhotoBook;
use leptos::*;
use leptos_router::*;
use pages::NotFoundPage;
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="not-found">
                <div class="error-container">
                    <h2>"Something went wrong"</h2>
                    <p>"The album could not be displayed. Try refreshing the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                </div>
            </main>
        }>
            <Router>
                <Routes>
                    <Route path="/" view=PhotoBook/>
                    <Route path="/*" view=NotFoundPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(Root);
}
