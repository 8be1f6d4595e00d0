//! Startup seed files
//!
//! A seed file is a JSON array of objects, each inserted as one document.

use serde_json::{Map, Value};

use crate::InfrastructureError;

/// Reads the seed file at `path` into document field maps
pub async fn load_documents(path: &str) -> Result<Vec<Map<String, Value>>, InfrastructureError> {
    let seed_error = |message: String| InfrastructureError::Seed {
        path: path.to_string(),
        message,
    };

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| seed_error(e.to_string()))?;

    parse_documents(&raw).map_err(seed_error)
}

/// Parses a JSON array of objects
pub fn parse_documents(raw: &str) -> Result<Vec<Map<String, Value>>, String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    let Value::Array(items) = value else {
        return Err("expected a JSON array of documents".to_string());
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(fields),
            other => Err(format!("entry {index} is not an object: {other}")),
        })
        .collect()
}
