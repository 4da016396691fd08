pub mod login_flow;
pub mod login_screen;
pub mod request_state;

pub use login_flow::LoginFlow;
pub use login_screen::{LoginScreen, LOADING_MESSAGE};
pub use request_state::RequestState;
