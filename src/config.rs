use login_core::ClientConfig;

/// Config baked in at build time: `LOGIN_UI_GRAPHQL_ENDPOINT` and
/// `LOGIN_UI_LOG_LEVEL`, each optional.
pub fn load() -> ClientConfig {
    ClientConfig::from_overrides(
        option_env!("LOGIN_UI_GRAPHQL_ENDPOINT"),
        option_env!("LOGIN_UI_LOG_LEVEL"),
    )
}
