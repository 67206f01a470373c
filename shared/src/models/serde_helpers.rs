//! Serde helpers for loosely-typed form and JSON input
//!
//! Admin screens post numbers where the store keeps text and text where it
//! keeps numbers. Values are taken as given and left for the store to
//! coerce; only structurally impossible shapes (objects, arrays) fail.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Int(v) => v.to_string(),
            Self::UInt(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            // MySQL stores booleans as 1/0
            Self::Bool(v) => String::from(if v { "1" } else { "0" }),
        }
    }
}

/// Text field: a string, number or boolean, kept as its text.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

/// Amount field: like [`lenient_text`], with blank input read as absent.
///
/// Non-numeric text is kept so the store can reject it.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Integer filter value: anything that does not parse is absent.
pub fn lenient_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    Ok(lenient_text(deserializer)?.and_then(|s| s.trim().parse().ok()))
}
