//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::{AppConfig, CoordinatePolicy, RouteConfig};
use crate::models::Region;

/// How long a confirmation notice stays on screen
const NOTICE_DURATION: Duration = Duration::from_secs(4);

/// Confirmation shown after a successful action
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// App-wide config and notice signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    next_notice_id: StoredValue<u32>,
    /// Notice currently on screen - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Notice currently on screen - write
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(config: AppConfig, notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>)) -> Self {
        Self {
            config: StoredValue::new(config),
            next_notice_id: StoredValue::new(0),
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    pub fn reference(&self) -> Region {
        self.config.with_value(|c| c.region.clone())
    }

    pub fn route(&self) -> RouteConfig {
        self.config.with_value(|c| c.route.clone())
    }

    pub fn policy(&self) -> CoordinatePolicy {
        self.config.with_value(|c| c.validation.policy)
    }

    /// Show a notice, clearing it after a delay unless a newer one replaced it
    pub fn notify(&self, title: &str, body: &str) {
        let id = self.next_notice_id.get_value();
        self.next_notice_id.set_value(id.wrapping_add(1));
        self.set_notice.set(Some(Notice {
            id,
            title: title.to_string(),
            body: body.to_string(),
        }));

        let notice = self.notice;
        let set_notice = self.set_notice;
        spawn_local(async move {
            sleep(NOTICE_DURATION).await;
            if notice.get_untracked().map(|n| n.id) == Some(id) {
                set_notice.set(None);
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}
