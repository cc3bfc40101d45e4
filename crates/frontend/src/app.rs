use crate::layout::Shell;
use crate::shared::toast::ToastService;
use crate::system::auth::context::AuthProvider;
use crate::system::usage::context::UsageContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the toast and usage stores to the whole app via context.
    provide_context(ToastService::new());
    provide_context(UsageContext::new());

    view! {
        <AuthProvider>
            <Shell />
        </AuthProvider>
    }
}
