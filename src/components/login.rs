use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use login_core::{ClientConfig, LoginFlow, LoginScreen, LOADING_MESSAGE};
use send_wrapper::SendWrapper;

use crate::browser::{BrowserStorage, GraphqlHttpTransport, RouterNavigator, WindowAlert};
use crate::components::CredentialField;
use crate::models::LoginState;

type BrowserLoginFlow =
    LoginFlow<GraphqlHttpTransport<BrowserStorage>, BrowserStorage, WindowAlert, RouterNavigator>;

/// Login view mounted at the login path.
///
/// Checks the session on mount, then renders a loading message, a redirect
/// home, or the credential form.
#[component]
pub fn Login() -> impl IntoView {
    let config = use_context::<ClientConfig>().expect("ClientConfig context missing");
    let state = LoginState::new();
    let home_path = config.home_path.clone();

    let flow: Rc<BrowserLoginFlow> = Rc::new(LoginFlow::new(
        config.clone(),
        GraphqlHttpTransport::new(config, BrowserStorage),
        BrowserStorage,
        WindowAlert,
        RouterNavigator::from_router(),
    ));

    // Session check, once per mount
    let session_flow = Rc::clone(&flow);
    spawn_local(async move {
        let session = session_flow.resolve_session().await;
        state.resolve_session(session);
    });

    let flow = StoredValue::new(SendWrapper::new(flow));

    // No in-flight guard: every click issues its own request.
    let on_submit = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let Some(form) = state.credentials() else {
            return;
        };
        let Some(flow) = flow.try_get_value() else {
            return;
        };

        spawn_local(async move {
            match flow.submit(&form).await {
                Ok(outcome) => state.apply_outcome(outcome),
                Err(e) => tracing::error!(error = %e, "login request failed"),
            }
        });
    };

    let on_loginid = Callback::new(move |value: Option<String>| state.edit_loginid(value));
    let on_password = Callback::new(move |value: Option<String>| state.edit_password(value));

    move || match state.screen() {
        LoginScreen::Loading => view! { <div>{LOADING_MESSAGE}</div> }.into_any(),
        LoginScreen::Redirecting => view! { <Redirect path=home_path.clone() /> }.into_any(),
        LoginScreen::FormVisible => view! {
            <div>
                <CredentialField
                    label="ID"
                    input_type="text"
                    value=Signal::derive(move || state.loginid())
                    on_edit=on_loginid
                />
                <CredentialField
                    label="PW"
                    input_type="password"
                    value=Signal::derive(move || state.password())
                    on_edit=on_password
                />
                <div>
                    <input type="submit" value="ログイン" on:click=on_submit />
                </div>
            </div>
        }
        .into_any(),
    }
}
