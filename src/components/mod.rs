pub mod credential_field;
pub mod login;

pub use credential_field::CredentialField;
pub use login::Login;
