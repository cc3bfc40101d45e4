//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Application brand
//! - Generation quota badge
//! - User avatar

use leptos::prelude::*;

use crate::shared::components::user_avatar::UserAvatar;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use crate::system::usage::context::use_usage;

/// TopHeader component - main application top bar.
#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let usage = use_usage();

    // Initial quota fetch; afterwards pages refresh it per submission.
    Effect::new(move |_| {
        usage.refresh();
    });

    let user_info = Signal::derive(move || auth_state.get().user_info);

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("clapperboard")}
                <span class="top-header__title">"Motion Studio"</span>
            </div>

            <div class="top-header__actions">
                // Quota badge
                {move || usage.usage.get().map(|u| view! {
                    <div class="top-header__usage" title=format!("Resets {}", format_date(&u.resets_at.to_rfc3339()))>
                        <span class="top-header__usage-count">
                            {format!("{} / {} generations", u.used, u.limit)}
                        </span>
                    </div>
                })}

                // User info
                <div class="top-header__user">
                    <UserAvatar user=user_info />
                </div>
            </div>
        </div>
    }
}
