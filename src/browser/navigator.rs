use std::rc::Rc;

use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use login_core::Navigator;

/// Navigation handle over the enclosing `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str, NavigateOptions)>,
}

impl RouterNavigator {
    /// Capture the router's navigate function. Must be called while a
    /// `<Router>` is in scope.
    pub fn from_router() -> Self {
        Self {
            navigate: Rc::new(use_navigate()),
        }
    }
}

impl Navigator for RouterNavigator {
    fn push(&self, path: &str) {
        tracing::debug!(path, "navigating");
        // Default options push a new entry rather than replacing.
        (self.navigate)(path, NavigateOptions::default());
    }
}
