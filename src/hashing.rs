//! Hashing System - SHA-256 fingerprints for exports
//!
//! Identical inputs must yield identical documents; these hashes let a
//! caller check that without diffing whole pages.

use sha2::{Sha256, Digest};
use serde::Serialize;
use serde_json::{Value, to_string};

use crate::content::DerivedContent;
use crate::form::FormInput;

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Convert to canonical JSON (sorted keys, no whitespace)
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let v: Value = serde_json::to_value(value)?;
    to_string(&sort_value(&v))
}

fn sort_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut sorted: Vec<_> = map.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            let sorted_map: serde_json::Map<String, Value> = sorted
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_value(v)))
                .collect();
            Value::Object(sorted_map)
        }
        Value::Array(arr) => {
            Value::Array(arr.iter().map(sort_value).collect())
        }
        _ => v.clone()
    }
}

/// Hash of the exported document bytes
pub fn compute_document_hash(html: &str) -> String {
    sha256_hex(html.as_bytes())
}

/// Hash of everything an export depends on
/// job_hash = sha256(canonical_input + canonical_content + year + engine_version)
pub fn compute_job_hash(
    input: &FormInput,
    content: &DerivedContent,
    year: i32,
    engine_version: &str,
) -> Result<String, serde_json::Error> {
    let combined = format!(
        "{}:{}:{}:{}",
        canonical_json(input)?,
        canonical_json(content)?,
        year,
        engine_version
    );
    Ok(sha256_hex(combined.as_bytes()))
}
