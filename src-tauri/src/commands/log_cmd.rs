//! Log Commands
//!
//! Lets the frontend append lines to the rolling log.

/// Write a frontend event to the log at the given level
#[tauri::command]
pub async fn log_event(level: String, message: String) -> Result<(), String> {
    let level: log::Level = level
        .parse()
        .map_err(|_| format!("Unknown log level: {}", level))?;
    rolling_logger::log_at(level, &format!("[frontend] {}", message))
}
