//! API utilities for frontend-backend communication

/// Порт, на котором слушает backend (см. `[server] port`)
const BACKEND_PORT: u16 = 3000;

/// Base URL of the backend, derived from the current window location.
///
/// Returns an empty string outside a browser window, so paths stay
/// relative to the page origin.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path such as `/api/analyze`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
