//! GraphQL documents and the JSON envelope they travel in.

pub mod documents;
pub mod envelope;
pub mod headers;
pub mod operation;

pub use envelope::{GraphqlError, GraphqlRequest, GraphqlResponse};
pub use headers::token_header;
pub use operation::{LoggedUserQuery, LoginMutation, Operation};
