//! Log Commands
//!
//! Frontend bindings for writing to the shell's rolling log.

use serde::Serialize;
use super::invoke;

#[derive(Serialize)]
struct LogEventArgs<'a> {
    level: &'a str,
    message: &'a str,
}

/// Append a line to the shell log; also echoed to the browser console
pub async fn log_event(level: &str, message: &str) -> Result<(), String> {
    web_sys::console::log_1(&format!("[{}] {}", level.to_uppercase(), message).into());
    let js_args = serde_wasm_bindgen::to_value(&LogEventArgs { level, message }).map_err(|e| e.to_string())?;
    invoke("log_event", js_args).await;
    Ok(())
}
