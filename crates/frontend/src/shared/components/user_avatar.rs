use contracts::system::auth::UserInfo;
use leptos::prelude::*;

/// Round badge for the signed-in user: profile image when available,
/// initials fallback otherwise.
///
/// The identity record is passed in explicitly, so the component does not
/// care which session provider produced it. Before the session resolves the
/// record is absent and the badge renders empty.
#[component]
pub fn UserAvatar(
    /// Identity record of the current user, absent until the session resolves
    #[prop(into)]
    user: Signal<Option<UserInfo>>,
) -> impl IntoView {
    view! {
        <div class="user-avatar">
            {move || match user.get() {
                Some(record) => match record.image_url.clone() {
                    Some(src) => view! {
                        <img class="user-avatar__image" src=src alt="User avatar" />
                    }
                    .into_any(),
                    None => view! {
                        <span class="user-avatar__initials">{record.initials()}</span>
                    }
                    .into_any(),
                },
                None => view! { <span class="user-avatar__initials"></span> }.into_any(),
            }}
        </div>
    }
}
