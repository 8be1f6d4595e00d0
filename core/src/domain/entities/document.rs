//! Schemaless resource documents (categories, products, orders).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Field that carries the document identifier on the wire
pub const ID_FIELD: &str = "_id";

/// A stored resource document: an identifier plus arbitrary JSON fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: Uuid,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Wraps client-supplied fields into a new document. A client-supplied
    /// `_id` is discarded.
    pub fn new(mut fields: Map<String, Value>) -> Self {
        fields.remove(ID_FIELD);
        Self {
            id: Uuid::new_v4(),
            fields,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Checks the document against a filter
    pub fn matches(&self, filter: &FieldFilter) -> bool {
        match filter {
            FieldFilter::All => true,
            FieldFilter::Equals { field, value } => self
                .fields
                .get(field)
                .is_some_and(|stored| values_equal(stored, value)),
        }
    }
}

/// Equality filter over one top-level field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldFilter {
    All,
    Equals { field: String, value: Value },
}

impl FieldFilter {
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        FieldFilter::Equals {
            field: field.into(),
            value: value.into(),
        }
    }
}

// Integer fields written as `3` and `3.0` compare equal.
fn values_equal(stored: &Value, wanted: &Value) -> bool {
    match (stored, wanted) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => stored == wanted,
    }
}
