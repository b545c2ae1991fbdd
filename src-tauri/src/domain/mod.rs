//! Domain Layer
//!
//! Host-side rules for what the shell will open on the frontend's behalf.

mod route;

pub use route::{RouteError, RouteRequest};
