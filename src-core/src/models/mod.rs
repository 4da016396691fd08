pub mod credentials;
pub mod login;
pub mod user;

pub use credentials::CredentialForm;
pub use login::{AccessToken, LoginData, LoginOutcome, LoginPayload, LoginUser, LoginVariables};
pub use user::{LoggedUser, LoggedUserData};
