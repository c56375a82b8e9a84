//! Thin wrapper around the browser geolocation API.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Position, PositionError};
use yew::Callback;

/// Ask the browser for the user's position.
///
/// Results arrive through the callbacks: `on_success` with `(latitude,
/// longitude)`, `on_error` with a description. When the geolocation API is
/// missing entirely the error callback fires immediately, so callers always
/// hear back exactly once.
pub fn request_position(on_success: Callback<(f64, f64)>, on_error: Callback<String>) {
    let Some(window) = web_sys::window() else {
        on_error.emit("no window object".to_string());
        return;
    };

    let geolocation = match window.navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(_) => {
            log::warn!("Geolocation API unavailable");
            on_error.emit("geolocation unavailable".to_string());
            return;
        }
    };

    let success = Closure::once_into_js(move |position: Position| {
        let coords = position.coords();
        log::debug!(
            "Geolocation fix: {:.2}, {:.2}",
            coords.latitude(),
            coords.longitude()
        );
        on_success.emit((coords.latitude(), coords.longitude()));
    });

    let on_error_cb = on_error.clone();
    let error = Closure::once_into_js(move |err: PositionError| {
        log::warn!("Geolocation failed: {} (code {})", err.message(), err.code());
        on_error_cb.emit(err.message());
    });

    if let Err(e) = geolocation.get_current_position_with_error_callback(
        success.unchecked_ref(),
        Some(error.unchecked_ref()),
    ) {
        log::warn!("Geolocation request rejected: {:?}", e);
        on_error.emit("geolocation request rejected".to_string());
    }
}
