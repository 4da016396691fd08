use serde::{Deserialize, Serialize};

/// The authenticated user as reported by the session check. Only the id is
/// ever requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggedUser {
    pub id: String,
}

/// `data` payload of the session-check query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoggedUserData {
    pub logged_user: Option<LoggedUser>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_user_decodes_to_none() {
        let data: LoggedUserData = serde_json::from_value(json!({ "loggedUser": null })).unwrap();
        assert!(data.logged_user.is_none());
    }

    #[test]
    fn present_user_keeps_id() {
        let data: LoggedUserData =
            serde_json::from_value(json!({ "loggedUser": { "id": "1" } })).unwrap();
        assert_eq!(data.logged_user, Some(LoggedUser { id: "1".into() }));
    }
}
