//! Notice Banner Component
//!
//! Dismissable confirmation shown after a place is added.

use leptos::prelude::*;
use crate::context::AppContext;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.notice.get().map(|notice| view! {
            <div class="notice" role="alert">
                <div class="notice-title">{notice.title}</div>
                <div class="notice-body">{notice.body}</div>
                <button class="notice-close" on:click=move |_| ctx.dismiss_notice()>"OK"</button>
            </div>
        })}
    }
}
