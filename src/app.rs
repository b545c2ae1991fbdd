//! Places Frontend App
//!
//! Root container: owns the place list, the active tab and the form draft,
//! and wires the two screens to them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{NoticeBanner, PlaceForm, PlaceMap, TabBar};
use crate::config::AppConfig;
use crate::context::{AppContext, Notice};
use crate::models::Place;
use crate::store::{store_add_place, store_select_tab, AppState, AppStateStoreFields, Tab};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let theme_vars = config.theme.css_vars();
    let seed_count = config.seed.len();

    // State
    let store = Store::new(AppState::new(config.seed.clone()));
    provide_context(store);
    provide_context(AppContext::new(config, signal::<Option<Notice>>(None)));

    // Callbacks are created once and shared by every render
    let on_select_tab = Callback::new(move |tab: Tab| store_select_tab(&store, tab));
    let on_add_place = Callback::new(move |place: Place| store_add_place(&store, place));

    let active_tab = Signal::derive(move || store.active_tab().get());
    let places = Signal::derive(move || store.places().get());

    spawn_local(async move {
        let _ = commands::log_event("info", &format!("started with {} seed places", seed_count)).await;
    });

    view! {
        <div class="app-layout" style=theme_vars>
            <NoticeBanner />
            <main class="screen">
                {move || match active_tab.get() {
                    Tab::Map => view! {
                        <h1 class="screen-title">"Favorite Places"</h1>
                        <PlaceMap places=places />
                    }.into_any(),
                    Tab::AddForm => view! {
                        <h1 class="screen-title">"Add Place"</h1>
                        <PlaceForm on_add_place=on_add_place />
                    }.into_any(),
                }}
            </main>
            <TabBar active=active_tab on_select=on_select_tab />
        </div>
    }
}
