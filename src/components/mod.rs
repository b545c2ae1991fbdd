//! UI Components
//!
//! Leptos components for the two screens and the tab bar.

mod tab_bar;
mod place_form;
mod place_map;
mod notice_banner;

pub use tab_bar::TabBar;
pub use place_form::PlaceForm;
pub use place_map::PlaceMap;
pub use notice_banner::NoticeBanner;
