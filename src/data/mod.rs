mod run;

pub use run::*;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::BufRead;

/// Reads a value from the JSON document in the reader.
///
/// # Errors
/// - If the reader does not contain a valid JSON document for the value.
pub fn deserialize<T: DeserializeOwned>(reader: &mut impl BufRead) -> Result<T> {
    Ok(serde_json::from_reader(reader)?)
}

/// Serializes the value to a pretty-printed JSON document.
///
/// # Errors
/// - If the value cannot be serialized.
pub fn to_string<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
