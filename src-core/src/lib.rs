//! Platform-free login flow: wire models, GraphQL operations, the capability
//! traits the browser adapters implement, and the state the login view
//! renders from.

pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod ports;
pub mod state;
pub mod testing;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use models::{CredentialForm, LoggedUser, LoginOutcome};
pub use ports::{KeyValueStore, Navigator, Notifier, Transport};
pub use state::{LoginFlow, LoginScreen, RequestState, LOADING_MESSAGE};
