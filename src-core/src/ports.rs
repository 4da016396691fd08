//! Capabilities the login flow is handed instead of reaching for globals.
//!
//! Everything takes `&self`; implementations that record state use interior
//! mutability, which is enough for the single-threaded UI.

use std::rc::Rc;

use serde_json::Value;

use crate::error::Result;
use crate::graphql::GraphqlRequest;

/// Durable client-side key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Route history the view navigates through.
pub trait Navigator {
    /// Push a new history entry for `path`.
    fn push(&self, path: &str);
}

/// Blocking user-visible notice.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Carries a GraphQL request to the backend and returns the raw JSON body.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn push(&self, path: &str) {
        (**self).push(path);
    }
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }
}

impl<T: Transport> Transport for Rc<T> {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value> {
        (**self).execute(request).await
    }
}
