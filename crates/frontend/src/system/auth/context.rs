use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component
///
/// Resolves the session once on mount. The identity provider owns the
/// session lifecycle; this component only mirrors its answer.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user_info) => {
                    set_auth_state.set(AuthState {
                        user_info: Some(user_info),
                    });
                }
                Err(e) => {
                    // Not signed in, or the provider is unreachable. The
                    // badge renders its fallback either way.
                    log::warn!("session lookup failed: {}", e);
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}
