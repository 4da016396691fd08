use thiserror::Error;

/// Errors surfaced by the login flow and its capabilities.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The GraphQL response carried an `errors` array.
    #[error("graphql errors: {}", .0.join("; "))]
    Graphql(Vec<String>),

    /// The GraphQL response had neither `data` nor `errors`.
    #[error("graphql response carried no data")]
    MissingData,

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("storage failure: {0}")]
    Storage(String),

    /// Login reported success but returned no access token.
    #[error("login succeeded without an access token")]
    MissingToken,

    /// The in-memory transport had no mocked response for the request.
    #[error("no mocked response for operation `{0}`")]
    Unmatched(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
