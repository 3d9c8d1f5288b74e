//! Import vessel documents exported from the hosted document store
//!
//! Accepted shapes:
//! - a bare array of documents
//! - `{ "vessels": [ ... ] }`
//! - `{ "vessels": { "<id>": { ... } } }` where the key is the document id

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tripcost_domain::model::VesselRecord;
use tripcost_types::{Error, Result};

/// Load vessel documents from a JSON export file
pub fn load_vessel_documents(path: &Path) -> Result<Vec<VesselRecord>> {
    let content = fs::read_to_string(path)?;
    parse_vessel_documents(&content)
}

/// Parse vessel documents from JSON export text
pub fn parse_vessel_documents(content: &str) -> Result<Vec<VesselRecord>> {
    let root: Value = serde_json::from_str(content)?;
    let collection = match root {
        Value::Object(mut obj) => obj
            .remove("vessels")
            .ok_or_else(|| Error::Import("export has no \"vessels\" collection".to_string()))?,
        other => other,
    };

    match collection {
        Value::Array(docs) => docs
            .into_iter()
            .enumerate()
            .map(|(i, doc)| into_record(doc, None, i))
            .collect(),
        Value::Object(docs) => docs
            .into_iter()
            .enumerate()
            .map(|(i, (key, doc))| into_record(doc, Some(key), i))
            .collect(),
        _ => Err(Error::Import(
            "vessels collection must be an array or an object".to_string(),
        )),
    }
}

fn into_record(doc: Value, key: Option<String>, index: usize) -> Result<VesselRecord> {
    let mut fields: Map<String, Value> = match doc {
        Value::Object(fields) => fields,
        _ => {
            return Err(Error::Import(format!(
                "vessel document #{} is not an object",
                index + 1
            )))
        }
    };
    if !fields.contains_key("id") {
        let id = key.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        fields.insert("id".to_string(), Value::String(id));
    }
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| Error::Import(format!("vessel document #{}: {}", index + 1, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array() {
        let json = r#"[{"id": "a", "name": "MV A", "doPrice": 500}]"#;
        let vessels = parse_vessel_documents(json).unwrap();
        assert_eq!(vessels.len(), 1);
        assert_eq!(vessels[0].do_price, Some(500.0));
    }

    #[test]
    fn test_keyed_collection_uses_key_as_id() {
        let json = r#"{"vessels": {"doc-42": {"vesselName": "MV Keyed", "vesselCapacity": "32000 MT"}}}"#;
        let vessels = parse_vessel_documents(json).unwrap();
        assert_eq!(vessels[0].id, "doc-42");
        assert_eq!(vessels[0].name, "MV Keyed");
        assert_eq!(vessels[0].vessel_capacity.as_deref(), Some("32000 MT"));
    }

    #[test]
    fn test_array_without_ids_gets_generated_ids() {
        let json = r#"{"vessels": [{"name": "MV One"}, {"name": "MV Two"}]}"#;
        let vessels = parse_vessel_documents(json).unwrap();
        assert_eq!(vessels.len(), 2);
        assert_ne!(vessels[0].id, vessels[1].id);
    }

    #[test]
    fn test_missing_collection() {
        assert!(matches!(
            parse_vessel_documents(r#"{"ships": []}"#),
            Err(Error::Import(_))
        ));
    }

    #[test]
    fn test_document_without_name_is_error() {
        let err = parse_vessel_documents(r#"[{"id": "x"}]"#).unwrap_err();
        assert!(err.to_string().contains("#1"));
    }
}
