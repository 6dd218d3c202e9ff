/// Browser confirmation dialog. Without a window (tests, workers) nothing is confirmed.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
