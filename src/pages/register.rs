//! Registration page: five-field form feeding the auth store.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::state::auth::ActionKind;
use crate::state::store::AppAuthStore;

/// Validated registration fields, ready to hand to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RegisterInput {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    password_verify: String,
}

fn validate_register_input(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    password_verify: &str,
) -> Result<RegisterInput, &'static str> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    let email = email.trim();
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if password != password_verify {
        return Err("Passwords do not match.");
    }
    Ok(RegisterInput {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        password_verify: password_verify.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<AppAuthStore>();
    let auth = store.state();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_verify = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit_store = store.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_register_input(
            &first_name.get(),
            &last_name.get(),
            &email.get(),
            &password.get(),
            &password_verify.get(),
        ) {
            Ok(input) => input,
            Err(message) => {
                submit_store.set_error(ActionKind::RegisterUser, message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let store = submit_store.clone();
            leptos::task::spawn_local(async move {
                store
                    .register_user(
                        &input.first_name,
                        &input.last_name,
                        &input.email,
                        &input.password,
                        &input.password_verify,
                    )
                    .await;
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            busy.set(false);
        }
    };

    let error_message = move || {
        auth.get().error.and_then(|error| {
            if error.action == ActionKind::RegisterUser {
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
                <p class="login-card__subtitle">"Create Account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="first name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
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
                    <input
                        class="login-input"
                        type="password"
                        placeholder="confirm password"
                        prop:value=move || password_verify.get()
                        on:input=move |ev| password_verify.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
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
                    "Already registered? "<a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
