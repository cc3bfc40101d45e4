pub mod top_header;

use leptos::prelude::*;

use crate::pages::video::VideoPage;
use crate::shared::toast::ToastHost;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |                Content                    |
/// +------------------------------------------+
/// ```
///
/// Toasts overlay the shell from the top-right corner.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-main">
                <VideoPage />
            </div>

            <ToastHost />
        </div>
    }
}
