//! Route Commands
//!
//! Opens routing URLs in the platform's maps application.

use tauri::{AppHandle, Runtime};

use crate::domain::RouteRequest;

/// Parse the URL, logging a rejection
fn check_route(url: &str) -> Result<RouteRequest, String> {
    RouteRequest::parse(url).map_err(|e| {
        let _ = rolling_logger::warn(&format!("Rejected route '{}': {}", url, e));
        e.to_string()
    })
}

/// Open a routing URL with the system handler
#[tauri::command]
pub async fn open_route<R: Runtime>(app: AppHandle<R>, url: String) -> Result<(), String> {
    let request = check_route(&url)?;

    let _ = rolling_logger::info(&format!(
        "Opening route to {}",
        request.destination().unwrap_or_default()
    ));

    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        let _ = &app;
        open::that_detached(request.as_str()).map_err(|e| e.to_string())?;
    }
    #[cfg(any(target_os = "android", target_os = "ios"))]
    {
        use tauri_plugin_shell::ShellExt;
        #[allow(deprecated)]
        app.shell().open(request.as_str(), None).map_err(|e| e.to_string())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_route_rejection_is_reported() {
        let err = check_route("file:///etc/passwd").unwrap_err();
        assert!(err.contains("not allowed"), "unexpected message: {}", err);
    }

    #[test]
    fn test_check_route_accepts_maps_url() {
        let request = check_route("http://maps.apple.com/?saddr=12.9716,77.5946&daddr=12.93,77.59&dirflg=d").unwrap();
        assert_eq!(request.destination().as_deref(), Some("12.93,77.59"));
    }
}
