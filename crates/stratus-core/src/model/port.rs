//! Lenient port values
//!
//! Security group ports are written either as integers or as the literal
//! `any`, so they are kept as text and checked by the validator.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPort {
    Number(i64),
    Text(String),
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawPort::deserialize(deserializer)? {
        RawPort::Number(n) => n.to_string(),
        RawPort::Text(s) => s,
    })
}
