use crate::config::REDIRECT_DELAY_SECONDS;
use crate::timer::progress_ratio;
use leptos::*;

/// Toast announcing the upcoming navigation, visible only while a countdown
/// is running. The copy is derived from the configured delay so the readout
/// always matches the real navigation time.
#[component]
pub fn RedirectToast(redirect_in: ReadSignal<Option<u32>>, label: String) -> impl IntoView {
    view! {
        {move || {
            redirect_in.get().map(|seconds| {
                let percent = progress_ratio(REDIRECT_DELAY_SECONDS, seconds) * 100.0;
                view! {
                    <div class="redirect-toast">
                        <div class="redirect-card">
                            <div class="redirect-title">"即将跳转"</div>
                            <div class="redirect-desc">
                                {format!("{} 秒后进入 {}", REDIRECT_DELAY_SECONDS, label)}
                            </div>
                            <div class="redirect-progress">
                                <span style=format!("width: {percent:.0}%")></span>
                            </div>
                            <div class="redirect-count">{format!("{}秒", seconds)}</div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
