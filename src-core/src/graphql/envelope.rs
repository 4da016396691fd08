use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Body POSTed to the GraphQL endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphqlRequest {
    /// Name used in logs; anonymous documents fall back to `anonymous`.
    pub fn label(&self) -> &str {
        self.operation_name.as_deref().unwrap_or("anonymous")
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GraphqlError {
    pub message: String,
}

/// Response envelope: `data`, `errors`, or both.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

impl<T> GraphqlResponse<T> {
    /// Any reported error wins over partial data.
    pub fn into_result(self) -> Result<T> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(ClientError::Graphql(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data.ok_or(ClientError::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn anonymous_request_omits_optional_fields() {
        let request = GraphqlRequest {
            query: "{ loggedUser { id } }".into(),
            variables: None,
            operation_name: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({ "query": "{ loggedUser { id } }" }));
        assert_eq!(request.label(), "anonymous");
    }

    #[test]
    fn errors_take_precedence_over_data() {
        let response: GraphqlResponse<Value> = serde_json::from_value(json!({
            "data": { "loggedUser": null },
            "errors": [{ "message": "boom" }]
        }))
        .unwrap();
        assert!(matches!(
            response.into_result(),
            Err(ClientError::Graphql(messages)) if messages == vec!["boom".to_string()]
        ));
    }

    #[test]
    fn empty_envelope_is_missing_data() {
        let response: GraphqlResponse<Value> = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(response.into_result(), Err(ClientError::MissingData)));
    }
}
