//! Login page: email + password form in front of the auth store.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::ActionKind;
use crate::state::store::AppAuthStore;

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<AppAuthStore>();
    let auth = store.state();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit_store = store.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    submit_store.set_error(ActionKind::LoginUser, message);
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let store = submit_store.clone();
            leptos::task::spawn_local(async move {
                store.login_user(&email_value, &password_value).await;
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    let error_message = move || {
        auth.get().error.and_then(|error| {
            if error.action == ActionKind::LoginUser {
                Some(error.message)
            } else {
                None
            }
        })
    };
    let dismiss_store = store.clone();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ListKeeper"</h1>
                <p class="login-card__subtitle">"Sign In"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || error_message().is_some()>
                    <p class="login-message login-message--error">
                        {move || error_message().unwrap_or_default()}
                        <button
                            class="login-message__dismiss"
                            on:click={
                                let store = dismiss_store.clone();
                                move |_| store.clear_error()
                            }
                        >
                            "Dismiss"
                        </button>
                    </p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "New here? "<a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
