//! Lenient deserializers for document and form fields

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Accept a string, an integer, or a float and keep it as text.
/// Null and absent values become `None`.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawText>::deserialize(deserializer)? {
        Some(RawText::Text(s)) => Some(s),
        Some(RawText::Int(n)) => Some(n.to_string()),
        Some(RawText::Float(x)) => Some(x.to_string()),
        None => None,
    })
}
