//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::HttpAuthApi;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::store::AppAuthStore;
use crate::util::nav::Navigator;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the auth store once, shares it via context, and kicks off the
/// initial session probe so a returning browser is recognized on load.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = AppAuthStore::new(HttpAuthApi, Navigator::browser());
    let session_probe = store.clone();
    provide_context(store);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session_probe.check_session().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session_probe;

    view! {
        <Stylesheet id="leptos" href="/pkg/listkeeper.css"/>
        <Title text="ListKeeper"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
