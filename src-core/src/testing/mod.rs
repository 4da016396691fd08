//! In-memory capabilities for driving [`LoginFlow`](crate::LoginFlow)
//! without a browser.

pub mod memory_history;
pub mod memory_storage;
pub mod mock_transport;
pub mod notifier;

pub use memory_history::{HistoryAction, Location, MemoryHistory};
pub use memory_storage::MemoryStorage;
pub use mock_transport::{MockTransport, MockedResponse};
pub use notifier::RecordingNotifier;
