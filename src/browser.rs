//! Thin wrappers over the browser APIs the app touches directly.

/// Navigate the page to `url`, replacing the album.
pub fn redirect_to(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(url).is_err() {
        log_warning(&format!("Keepsake: failed to navigate to {}", url));
    }
}

/// Log a warning to the browser console.
pub fn log_warning(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}
