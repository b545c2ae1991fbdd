//! Navigation Commands
//!
//! Frontend binding for handing a routing URL to the host URL handler.

use serde::Serialize;
use super::try_invoke;

#[derive(Serialize)]
struct OpenRouteArgs<'a> {
    url: &'a str,
}

/// Ask the shell to open a routing URL in the system maps application.
/// A rejected URL or a failing handler comes back as the shell's message.
pub async fn open_route(url: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&OpenRouteArgs { url }).map_err(|e| e.to_string())?;
    try_invoke("open_route", js_args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))?;
    Ok(())
}
