//! Initials badge for the signed-in user.

use leptos::prelude::*;

use crate::state::store::AppAuthStore;

/// Circular badge showing the user's initials, or nothing when signed out.
#[component]
pub fn UserAvatar() -> impl IntoView {
    let auth = expect_context::<AppAuthStore>().state();

    view! {
        <div
            class="user-avatar"
            title=move || auth.get().user.map(|user| user.email).unwrap_or_default()
        >
            {move || auth.get().user_initials()}
        </div>
    }
}
