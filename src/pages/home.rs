//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the route every successful auth action navigates to. It shows who
//! is signed in and hosts the logout control; unauthenticated visitors are
//! redirected to `/login` once the session probe settles.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::user_avatar::UserAvatar;
use crate::state::auth::ActionKind;
use crate::state::store::AppAuthStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<AppAuthStore>();
    let auth = store.state();

    install_unauth_redirect(auth, use_navigate());

    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Signed in as {} {}", user.first_name, user.last_name))
            .unwrap_or_default()
    };

    let logout_store = store.clone();
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let store = logout_store.clone();
            leptos::task::spawn_local(async move {
                store.logout_user().await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &logout_store;
        }
    };

    let error_message = move || {
        auth.get().error.and_then(|error| {
            if error.action == ActionKind::LogoutUser {
                Some(error.message)
            } else {
                None
            }
        })
    };
    let dismiss_store = store.clone();

    view! {
        <div class="home-page">
            <header class="home-header">
                <h1>"ListKeeper"</h1>
                <div class="home-header__identity">
                    <UserAvatar/>
                    <span class="home-header__greeting">{greeting}</span>
                    <button class="home-header__logout" on:click=on_logout>
                        "Log Out"
                    </button>
                </div>
            </header>
            <Show when=move || error_message().is_some()>
                <p class="home-banner home-banner--error">
                    {move || error_message().unwrap_or_default()}
                    <button
                        class="home-banner__dismiss"
                        on:click={
                            let store = dismiss_store.clone();
                            move |_| store.clear_error()
                        }
                    >
                        "Dismiss"
                    </button>
                </p>
            </Show>
            <main class="home-content">
                <p>"Your lists will appear here."</p>
            </main>
        </div>
    }
}
