use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use login_core::ClientConfig;

use crate::components::Login;

/// Root application component that provides the client config and routes
/// `/login` to the login view.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    // Provide context to all child components
    provide_context(config);

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/login") view=Login />
                    // Mount point only; the home page is served elsewhere.
                    <Route path=path!("/") view=|| view! { <div class="home"></div> } />
                </Routes>
            </main>
        </Router>
    }
}
