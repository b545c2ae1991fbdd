//! Place Form Component
//!
//! Collects name, latitude and longitude. Validation is deferred to submit,
//! where every field is checked and a valid place is emitted upward.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::AppContext;
use crate::draft::Field;
use crate::models::Place;
use crate::store::{store_submit_draft, store_update_field, use_app_store, AppStateStoreFields};

const ADDED_TITLE: &str = "Place added";
const ADDED_BODY: &str = "Your place is added to the map. Click on the Favorites tab to view.";

/// Add-place form; `on_add_place` receives only validated places
#[component]
pub fn PlaceForm(#[prop(into)] on_add_place: Callback<Place>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_submit_draft(&store, ctx.policy()) {
            Some(place) => {
                let message = format!("added '{}' at {},{}", place.name, place.latitude, place.longitude);
                on_add_place.run(place);
                ctx.notify(ADDED_TITLE, ADDED_BODY);
                spawn_local(async move {
                    let _ = commands::log_event("info", &message).await;
                });
            }
            None => {
                web_sys::console::log_1(&"[FORM] Submit rejected".into());
            }
        }
        dismiss_keyboard();
    };

    view! {
        <form class="place-form" on:submit=on_submit>
            <FieldInput field=Field::Name />
            <FieldInput field=Field::Latitude />
            <FieldInput field=Field::Longitude />
            <button type="submit" class="place-form-submit">"Add Place"</button>
        </form>
    }
}

/// Labelled text input bound to one draft field
#[component]
fn FieldInput(field: Field) -> impl IntoView {
    let store = use_app_store();
    let input_mode = match field {
        Field::Name => "text",
        Field::Latitude | Field::Longitude => "decimal",
    };

    view! {
        <label class="field-label">{field.label()}</label>
        <input
            type="text"
            class="field-input"
            inputmode=input_mode
            prop:value=move || store.draft().read().value(field).to_string()
            on:input=move |ev| store_update_field(&store, field, event_target_value(&ev))
        />
        <FieldErrorText message=Signal::derive(move || store.draft().read().error_message(field)) />
    }
}

/// Inline validation message; renders empty text when the field is valid
#[component]
fn FieldErrorText(message: Signal<String>) -> impl IntoView {
    view! {
        <p class="field-error">{move || message.get()}</p>
    }
}

/// Drop focus from the active input so the on-screen keyboard closes
fn dismiss_keyboard() {
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    if let Some(element) = active.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        let _ = element.blur();
    }
}
