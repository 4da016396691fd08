use leptos::prelude::*;
use login_core::{CredentialForm, LoggedUser, LoginOutcome, LoginScreen, RequestState};

/// Reactive state owned by one mounted login view.
///
/// Updates go through `try_*` so a response landing after the view has been
/// unmounted is dropped instead of touching a disposed signal.
#[derive(Clone, Copy)]
pub struct LoginState {
    /// Identifier and password as typed
    pub form: RwSignal<CredentialForm>,
    /// Session check, pending until the first response
    pub session: RwSignal<RequestState<Option<LoggedUser>>>,
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CredentialForm::new()),
            session: RwSignal::new(RequestState::Pending),
        }
    }

    /// Which of the three screens to render
    pub fn screen(&self) -> LoginScreen {
        self.session.with(LoginScreen::resolve)
    }

    pub fn loginid(&self) -> String {
        self.form.with(|form| form.loginid.clone())
    }

    pub fn password(&self) -> String {
        self.form.with(|form| form.password.clone())
    }

    pub fn edit_loginid(&self, value: Option<String>) {
        self.form.update(|form| form.set_loginid(value));
    }

    pub fn edit_password(&self, value: Option<String>) {
        self.form.update(|form| form.set_password(value));
    }

    /// Snapshot of the form for submission, if the view is still mounted
    pub fn credentials(&self) -> Option<CredentialForm> {
        self.form.try_get_untracked()
    }

    pub fn resolve_session(&self, session: RequestState<Option<LoggedUser>>) {
        if self.session.try_set(session).is_some() {
            tracing::debug!("session check resolved after unmount; ignored");
        }
    }

    pub fn apply_outcome(&self, outcome: LoginOutcome) {
        if self.form.try_update(|form| form.apply_outcome(outcome)).is_none() {
            tracing::debug!(?outcome, "login resolved after unmount; ignored");
        }
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new()
    }
}
