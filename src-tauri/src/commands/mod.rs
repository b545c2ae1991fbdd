//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the host platform.

mod route_cmd;
mod log_cmd;

pub use route_cmd::*;
pub use log_cmd::*;
