use std::str::FromStr;

use login_core::ClientConfig;

/// Route `tracing` (through its `log` bridge) and panics to the browser
/// console.
pub fn setup_logging(config: &ClientConfig) {
    console_error_panic_hook::set_once();

    let level = log::Level::from_str(&config.log_level).unwrap_or_else(|_| {
        web_sys::console::warn_1(&format!("Unknown log level {:?}, using info", config.log_level).into());
        log::Level::Info
    });

    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Warning: Failed to setup logging: {e}").into());
        return;
    }

    tracing::info!(endpoint = %config.graphql_endpoint, "Logging initialized at {level}");
}
