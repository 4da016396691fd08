use serde::{Deserialize, Serialize};

/// Variables of the login mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginVariables {
    pub loginid: String,
    pub password: String,
}

/// `data` payload of the login mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginData {
    pub login: LoginPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginPayload {
    pub result: bool,
    pub user: Option<LoginUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub access_token: Option<AccessToken>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
}

impl LoginPayload {
    /// The issued token, if the backend returned one.
    pub fn token(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.access_token.as_ref())
            .map(|access| access.token.as_str())
    }
}

/// What a submitted login resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token stored and navigation issued.
    Authenticated,
    /// Backend refused the credentials; the notice has been raised.
    Rejected,
}
