//! Places Shell
//!
//! Hosts the webview frontend and acts as its platform bridge:
//! - domain: Rules for what may be handed to the system URL handler
//! - commands: Tauri command handlers

use tauri::Manager;

mod domain;
mod commands;

const LOG_APP_NAME: &str = "Places";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let log_dir = app.path().app_log_dir()?;
            rolling_logger::init_logger(log_dir, LOG_APP_NAME)?;

            let _ = rolling_logger::info(&format!(
                "App setup at {}",
                chrono::Local::now().format("%H:%M:%S%.3f")
            ));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::open_route,
            commands::log_event,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
