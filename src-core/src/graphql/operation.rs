use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::documents::{LOGGED_USER_QUERY, LOGIN_MUTATION};
use super::envelope::{GraphqlRequest, GraphqlResponse};
use crate::error::Result;
use crate::models::{LoggedUserData, LoginData, LoginVariables};

/// A typed GraphQL operation: document, variables and `data` shape.
pub trait Operation {
    type Variables: Serialize;
    type Data: DeserializeOwned;

    const DOCUMENT: &'static str;
    const OPERATION_NAME: Option<&'static str>;

    /// Build the request body. Unit variables are omitted entirely.
    fn request(variables: &Self::Variables) -> Result<GraphqlRequest> {
        let variables = match serde_json::to_value(variables)? {
            Value::Null => None,
            value => Some(value),
        };

        Ok(GraphqlRequest {
            query: Self::DOCUMENT.to_string(),
            variables,
            operation_name: Self::OPERATION_NAME.map(str::to_string),
        })
    }

    /// Decode a raw response body into this operation's `data`.
    fn decode(body: Value) -> Result<Self::Data> {
        serde_json::from_value::<GraphqlResponse<Self::Data>>(body)?.into_result()
    }
}

/// Session check: `{ loggedUser { id } }`.
pub struct LoggedUserQuery;

impl Operation for LoggedUserQuery {
    type Variables = ();
    type Data = LoggedUserData;

    const DOCUMENT: &'static str = LOGGED_USER_QUERY;
    const OPERATION_NAME: Option<&'static str> = None;
}

/// Credential exchange: `mutation login(...)`.
pub struct LoginMutation;

impl Operation for LoginMutation {
    type Variables = LoginVariables;
    type Data = LoginData;

    const DOCUMENT: &'static str = LOGIN_MUTATION;
    const OPERATION_NAME: Option<&'static str> = Some("login");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use serde_json::json;

    #[test]
    fn session_query_has_no_variables() {
        let request = LoggedUserQuery::request(&()).unwrap();
        assert!(request.variables.is_none());
        assert!(request.operation_name.is_none());
        assert!(request.query.contains("loggedUser"));
    }

    #[test]
    fn login_mutation_carries_credentials() {
        let request = LoginMutation::request(&LoginVariables {
            loginid: "loginid".into(),
            password: "password".into(),
        })
        .unwrap();
        assert_eq!(
            request.variables,
            Some(json!({ "loginid": "loginid", "password": "password" }))
        );
        assert_eq!(request.label(), "login");
    }

    #[test]
    fn decode_rejects_mismatched_shape() {
        let result = LoginMutation::decode(json!({ "data": { "login": { "result": "yes" } } }));
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }
}
