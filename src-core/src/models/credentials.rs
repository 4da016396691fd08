use super::login::{LoginOutcome, LoginVariables};

/// Local form state of the login view.
///
/// Values are stored exactly as typed: no trimming, no validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialForm {
    pub loginid: String,
    pub password: String,
}

impl CredentialForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the identifier with the raw input value; absent means empty.
    pub fn set_loginid(&mut self, value: Option<String>) {
        self.loginid = value.unwrap_or_default();
    }

    /// Replace the password with the raw input value; absent means empty.
    pub fn set_password(&mut self, value: Option<String>) {
        self.password = value.unwrap_or_default();
    }

    /// Clear both fields
    pub fn reset(&mut self) {
        self.loginid.clear();
        self.password.clear();
    }

    /// Fold a finished login back into the form. A rejection empties it.
    pub fn apply_outcome(&mut self, outcome: LoginOutcome) {
        if outcome == LoginOutcome::Rejected {
            self.reset();
        }
    }

    pub fn variables(&self) -> LoginVariables {
        LoginVariables {
            loginid: self.loginid.clone(),
            password: self.password.clone(),
        }
    }
}
