//! Tab Bar Component
//!
//! Bottom navigation switching between the map and the add-place form.

use leptos::prelude::*;
use crate::store::Tab;

/// Tab bar; one button per screen
#[component]
pub fn TabBar(
    #[prop(into)] active: Signal<Tab>,
    #[prop(into)] on_select: Callback<Tab>,
) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {Tab::ALL.iter().map(|tab| {
                let tab = *tab;
                let is_active = move || active.get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "tab-item active" } else { "tab-item" }
                        on:click=move |_| on_select.run(tab)
                    >
                        <div class="tab-icon">{tab.icon()}</div>
                        <div class="tab-label">{tab.label()}</div>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
