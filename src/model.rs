use serde::de::Error as _;
use serde::{Deserialize, Serialize};

/// On-disk shape of the bookmark file. Unknown fields are ignored on read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Database {
    #[serde(default)]
    pub items: Vec<String>,
}

impl Database {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Parses a stored document. Only a JSON object is accepted; serde would
    /// otherwise also take the positional array form of the struct.
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(data)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("store document must be a JSON object"));
        }
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_writes_only_items() {
        let db = Database::new(vec!["/alpha".to_string(), "/beta".to_string()]);
        let json = serde_json::to_string(&db).unwrap();
        assert_eq!(json, r#"{"items":["/alpha","/beta"]}"#);
    }

    #[test]
    fn serialize_empty_keeps_items_field() {
        let json = serde_json::to_string(&Database::default()).unwrap();
        assert_eq!(json, r#"{"items":[]}"#);
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let json = r#"{
            "items": ["/tmp/a"],
            "Path": "/somewhere/config.json",
            "version": 3
        }"#;
        let db: Database = serde_json::from_str(json).unwrap();
        assert_eq!(db.items, vec!["/tmp/a"]);
    }

    #[test]
    fn deserialize_missing_items_defaults_to_empty() {
        let db: Database = serde_json::from_str("{}").unwrap();
        assert!(db.items.is_empty());
    }

    #[test]
    fn deserialize_rejects_non_string_items() {
        let result = serde_json::from_str::<Database>(r#"{"items": [1, 2]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn from_json_rejects_array_document() {
        let err = Database::from_json(r#"[["/tmp/a"]]"#).unwrap_err();
        assert!(err.to_string().contains("must be a JSON object"));
        assert!(Database::from_json(r#""/tmp/a""#).is_err());
        assert!(Database::from_json("null").is_err());
    }

    #[test]
    fn from_json_accepts_object_document() {
        let db = Database::from_json(r#"{"items": ["/tmp/a"], "other": 1}"#).unwrap();
        assert_eq!(db.items, vec!["/tmp/a"]);
    }
}
