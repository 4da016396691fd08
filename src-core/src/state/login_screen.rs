use super::request_state::RequestState;
use crate::models::LoggedUser;

/// Text shown while the session check is outstanding.
pub const LOADING_MESSAGE: &str = "Now Loading...";

/// The three mutually exclusive things the login view can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginScreen {
    Loading,
    Redirecting,
    FormVisible,
}

impl LoginScreen {
    /// Pick the screen for the current session-check state.
    ///
    /// A failed check renders the form: the user can still try to log in.
    pub const fn resolve(session: &RequestState<Option<LoggedUser>>) -> Self {
        match session {
            RequestState::Pending => Self::Loading,
            RequestState::Success(Some(_)) => Self::Redirecting,
            RequestState::Success(None) | RequestState::Failure(_) => Self::FormVisible,
        }
    }
}
