use super::request_state::RequestState;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::graphql::{LoggedUserQuery, LoginMutation, Operation};
use crate::models::{CredentialForm, LoggedUser, LoginOutcome};
use crate::ports::{KeyValueStore, Navigator, Notifier, Transport};

/// Drives the two remote operations of the login view against injected
/// capabilities.
pub struct LoginFlow<T, S, N, H> {
    config: ClientConfig,
    transport: T,
    storage: S,
    notifier: N,
    navigator: H,
}

impl<T, S, N, H> LoginFlow<T, S, N, H>
where
    T: Transport,
    S: KeyValueStore,
    N: Notifier,
    H: Navigator,
{
    pub const fn new(config: ClientConfig, transport: T, storage: S, notifier: N, navigator: H) -> Self {
        Self {
            config,
            transport,
            storage,
            notifier,
            navigator,
        }
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ask the backend who is logged in.
    #[allow(clippy::future_not_send)]
    pub async fn check_session(&self) -> Result<Option<LoggedUser>> {
        let request = LoggedUserQuery::request(&())?;
        tracing::debug!(operation = request.label(), "checking session");

        let body = self.transport.execute(&request).await?;
        let data = LoggedUserQuery::decode(body)?;

        match &data.logged_user {
            Some(user) => tracing::info!(user_id = %user.id, "session already authenticated"),
            None => tracing::debug!("no authenticated session"),
        }

        Ok(data.logged_user)
    }

    /// Session check folded into the state the view renders from.
    #[allow(clippy::future_not_send)]
    pub async fn resolve_session(&self) -> RequestState<Option<LoggedUser>> {
        let result = self.check_session().await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "session check failed; showing login form");
        }
        result.into()
    }

    /// Send the form's credentials to the login mutation.
    ///
    /// Accepted: the token is written under the token storage key and the
    /// home path is pushed. Rejected: the rejection notice is raised; the
    /// caller clears its form via [`CredentialForm::apply_outcome`].
    #[allow(clippy::future_not_send)]
    pub async fn submit(&self, form: &CredentialForm) -> Result<LoginOutcome> {
        let request = LoginMutation::request(&form.variables())?;
        tracing::debug!(operation = request.label(), loginid = %form.loginid, "submitting credentials");

        let body = self.transport.execute(&request).await?;
        let payload = LoginMutation::decode(body)?.login;

        if !payload.result {
            tracing::warn!(loginid = %form.loginid, "login rejected");
            self.notifier.alert(&self.config.rejected_message);
            return Ok(LoginOutcome::Rejected);
        }

        let token = payload.token().ok_or(ClientError::MissingToken)?;
        self.storage.set(&self.config.token_storage_key, token)?;
        self.navigator.push(&self.config.home_path);
        tracing::info!(loginid = %form.loginid, "login accepted");

        Ok(LoginOutcome::Authenticated)
    }
}
