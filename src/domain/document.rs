//! Upstream status document.
//!
//! Wraps the raw JSON returned by `/api/status`. No schema is enforced:
//! every lookup is a best-effort walk that yields `None` as soon as a
//! segment is missing or an intermediate value is not an object.

use serde_json::{Map, Value};

/// One parsed `/api/status` response, alive for a single scrape.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusDocument(Value);

impl StatusDocument {
    /// Wrap a parsed JSON value.
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Whether the document carries no data at all.
    ///
    /// `null`, `{}` and `[]` count as empty and report the upstream as
    /// down. Anything else is considered reachable, even when none of the
    /// known fields can be found in it.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Descend `path` one object key at a time.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.0, |node, key| node.as_object()?.get(*key))
    }

    /// Descend `path` and require an object at the end of it.
    pub fn object_at(&self, path: &[&str]) -> Option<&Map<String, Value>> {
        self.lookup(path)?.as_object()
    }

    /// Descend `path` and require a JSON number at the end of it.
    pub fn number_at(&self, path: &[&str]) -> Option<f64> {
        self.lookup(path)?.as_f64()
    }

    /// Access the raw JSON.
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for StatusDocument {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
