//! Place Map Component
//!
//! Renders the place list as markers on a fixed region around the reference
//! point. Each marker carries a navigation callout routing from the reference.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::models::{Marker, Place};
use crate::navigation::derive_markers;

/// Map view over a read-only snapshot of the place list
#[component]
pub fn PlaceMap(#[prop(into)] places: Signal<Vec<Place>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let reference = ctx.reference();
    let route = ctx.route();

    let reference_title = reference.title.clone();
    let markers = Memo::new(move |_| places.with(|p| derive_markers(p, &reference, &route)));

    let on_region = move || {
        markers.get().into_iter().enumerate()
            .filter(|(_, m)| m.position.is_some())
            .collect::<Vec<_>>()
    };
    let off_region = move || {
        markers.get().into_iter().enumerate()
            .filter(|(_, m)| m.position.is_none())
            .collect::<Vec<_>>()
    };

    view! {
        <div class="place-map">
            <div class="map-surface">
                <div class="map-pin reference" style="left: 50%; top: 50%;">
                    <span class="map-pin-title">{reference_title}</span>
                </div>
                // Index keys are stable: the list is append-only
                <For
                    each=on_region
                    key=|(i, _)| *i
                    children=move |(_, marker)| view! { <MarkerPin marker=marker /> }
                />
            </div>
            <Show when=move || !off_region().is_empty()>
                <h3 class="off-map-heading">"Outside this area"</h3>
            </Show>
            <ul class="off-map-list">
                <For
                    each=off_region
                    key=|(i, _)| *i
                    children=move |(_, marker)| view! {
                        <li class="off-map-item">
                            <span class="off-map-title">{marker.title.clone()}</span>
                            <NavigationButton url=marker.route_url />
                        </li>
                    }
                />
            </ul>
            <p class="place-count">{move || format!("{} places", markers.get().len())}</p>
        </div>
    }
}

/// Positioned marker with its callout
#[component]
fn MarkerPin(marker: Marker) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (left, top) = marker.position.unwrap_or((50.0, 50.0));
    let style = format!("left: {:.3}%; top: {:.3}%;", left, top);
    let head_title = marker.title.clone();
    let callout_title = marker.title;
    let url = marker.route_url;

    view! {
        <div class="map-pin" style=style>
            <button class="map-pin-head" title=head_title on:click=move |_| set_open.update(|v| *v = !*v)>
                "●"
            </button>
            <Show when=move || open.get()>
                <div class="map-callout">
                    <span class="map-pin-title">{callout_title.clone()}</span>
                    <NavigationButton url=url.clone() />
                </div>
            </Show>
        </div>
    }
}

/// Opens the route in the system maps app
#[component]
fn NavigationButton(url: String) -> impl IntoView {
    let url = StoredValue::new(url);
    view! {
        <button class="navigation-btn" on:click=move |ev| {
            ev.stop_propagation();
            navigate(url.get_value());
        }>
            "Navigation"
        </button>
    }
}

/// Hand the URL to the host handler; failures are logged only
fn navigate(url: String) {
    spawn_local(async move {
        if let Err(e) = commands::open_route(&url).await {
            web_sys::console::error_1(&format!("[MAP] Failed to open route: {}", e).into());
        }
    });
}
