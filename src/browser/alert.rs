use login_core::Notifier;

/// Blocking `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowAlert;

impl Notifier for WindowAlert {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(notice = message, "no window to alert on");
            return;
        };

        if let Err(e) = window.alert_with_message(message) {
            tracing::warn!("window.alert failed: {e:?}");
        }
    }
}
