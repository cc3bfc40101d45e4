use leptos::prelude::*;

use crate::shared::icons::icon;

/// Empty-state placeholder for pages whose content has not been produced yet
#[component]
pub fn Empty(
    /// Caption shown under the illustration
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon("film")}</div>
            <p class="empty-state__label">{label}</p>
        </div>
    }
}
