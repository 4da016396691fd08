pub mod login_state;

pub use login_state::LoginState;
