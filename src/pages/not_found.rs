use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"404"</h1>
            <p class="not-found-text">"这一页不存在"</p>

            <nav class="back-nav">
                <A href="/">"回到相册"</A>
            </nav>
        </main>
    }
}
