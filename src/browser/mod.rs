//! Browser-backed implementations of the login-core capabilities.

pub mod alert;
pub mod navigator;
pub mod storage;
pub mod transport;

pub use alert::WindowAlert;
pub use navigator::RouterNavigator;
pub use storage::BrowserStorage;
pub use transport::GraphqlHttpTransport;
