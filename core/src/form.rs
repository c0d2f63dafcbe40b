//! Form Snapshot: the field name/value pairs read from a form at submit time.
//!
//! # Design
//! Entries are kept in document order, duplicates included, exactly as the
//! host read them. Collapsing to a JSON object happens only at serialization
//! time: a repeated name keeps the slot of its first occurrence and the value
//! of its last, which is what building an object from ordered entries does.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered field name/value pairs captured from a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    entries: Vec<(String, String)>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Repeated names are allowed.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collapse into a name → value object, last occurrence wins.
    pub fn to_object(&self) -> Map<String, Value> {
        let mut object = Map::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            object.insert(name.clone(), Value::String(value.clone()));
        }
        object
    }

    /// The JSON text sent as the request body.
    pub fn to_json(&self) -> String {
        Value::Object(self.to_object()).to_string()
    }
}

impl<N, V> FromIterator<(N, V)> for FormSnapshot
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut snapshot = FormSnapshot::new();
        for (name, value) in iter {
            snapshot.push(name, value);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_fields_as_string_object() {
        let snapshot: FormSnapshot = [("title", "A"), ("body", "B")].into_iter().collect();
        assert_eq!(snapshot.to_json(), r#"{"title":"A","body":"B"}"#);
    }

    #[test]
    fn duplicate_names_keep_last_value_in_first_position() {
        let snapshot: FormSnapshot = [("uuid", "1"), ("signature", "s"), ("uuid", "2")]
            .into_iter()
            .collect();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.to_json(), r#"{"uuid":"2","signature":"s"}"#);
    }

    #[test]
    fn empty_snapshot_is_empty_object() {
        let snapshot = FormSnapshot::new();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.to_json(), "{}");
    }

    #[test]
    fn values_are_escaped() {
        let snapshot: FormSnapshot = [("signature", "a\"b\nc")].into_iter().collect();
        let parsed: Value = serde_json::from_str(&snapshot.to_json()).unwrap();
        assert_eq!(parsed["signature"], "a\"b\nc");
    }

    #[test]
    fn deserializes_from_pair_list() {
        let snapshot: FormSnapshot =
            serde_json::from_str(r#"[["uuid","x"],["signature","y"]]"#).unwrap();
        assert_eq!(
            snapshot.entries(),
            &[
                ("uuid".to_string(), "x".to_string()),
                ("signature".to_string(), "y".to_string())
            ]
        );
    }
}
