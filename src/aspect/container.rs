//! App container factories.
//!
//! The container wraps the resolved root navigator into whatever the host
//! uses as its application root element.

use serde_json::{json, Value};

/// Wraps the root navigator into the application root.
pub trait AppContainerFactory<N, R>: Send + Sync {
    fn create(&self, root: N) -> R;
}

impl<N, R, F> AppContainerFactory<N, R> for F
where
    F: Fn(N) -> R + Send + Sync,
{
    fn create(&self, root: N) -> R {
        self(root)
    }
}

/// Container that nests the JSON tree under an `app` key.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonAppContainer;

impl AppContainerFactory<Value, Value> for JsonAppContainer {
    fn create(&self, root: Value) -> Value {
        json!({ "app": root })
    }
}
