//! Export shapes: ordered maps, UI options, type descriptors and JSON options.
//!
//! Field names and field order of these types are part of the public
//! contract for downstream consumers (UI widgets, type-definition
//! generators). Do not rename or reorder them.

use indexmap::IndexMap;
use serde::Serialize;

use crate::defaults::DEFAULT_JSON_INDENT;
use crate::error::Result;
use crate::value::Value;

/// Insertion-ordered map returned by the array exports.
///
/// Exports follow the declaration order of a host enum and serialize as a
/// JSON object in that order.
pub type OrderedMap<K, V> = IndexMap<K, V>;

// ============================================================================
// UI and generator records
// ============================================================================

/// One entry for a UI selection widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: Value<'static>,
    pub label: String,
    pub name: String,
}

/// Description of a host enum for an external type-definition generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDescriptor {
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub values: Vec<Value<'static>>,
}

// ============================================================================
// JSON options
// ============================================================================

/// Formatting controls for `to_json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    /// Emit newlines and indentation.
    pub pretty: bool,
    /// Spaces per indentation level when `pretty` is set.
    pub indent: usize,
}

impl JsonOptions {
    pub fn compact() -> Self {
        Self {
            pretty: false,
            indent: DEFAULT_JSON_INDENT,
        }
    }

    pub fn pretty() -> Self {
        Self {
            pretty: true,
            indent: DEFAULT_JSON_INDENT,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Serialize `value` according to these options.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if !self.pretty {
            return Ok(serde_json::to_string(value)?);
        }

        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer)?;
        Ok(String::from_utf8(buf)?)
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self::compact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_map_serializes_in_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("zeta", Value::Int(1));
        map.insert("alpha", Value::Int(2));
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"zeta":1,"alpha":2}"#
        );
    }

    #[test]
    fn ordered_map_integer_keys_become_strings() {
        let map: OrderedMap<Value<'static>, &str> =
            [(Value::Int(1), "ONE"), (Value::Int(2), "TWO")].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"1":"ONE","2":"TWO"}"#
        );
    }

    #[test]
    fn ordered_map_lookup() {
        let map: OrderedMap<&str, i64> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(map.get(&"b"), Some(&2));
        assert_eq!(map.get(&"c"), None);
        assert!(map.contains_key(&"a"));
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn ordered_map_hashes_value_keys() {
        let map: OrderedMap<Value<'static>, &str> =
            [(Value::Str("1"), "TEXT"), (Value::Int(1), "INT")].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&Value::Int(1)), Some(&"INT"));
        assert_eq!(map.get(&Value::Str("1")), Some(&"TEXT"));
        assert_eq!(map.get(&Value::Float(1.0)), None);
    }

    #[test]
    fn select_option_field_order() {
        let option = SelectOption {
            value: Value::Str("pending"),
            label: "Pending".to_string(),
            name: "Pending".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&option).unwrap(),
            r#"{"value":"pending","label":"Pending","name":"Pending"}"#
        );
    }

    #[test]
    fn type_descriptor_uses_type_field() {
        let descriptor = TypeDescriptor {
            type_name: "Status",
            values: vec![Value::Int(1), Value::Int(2)],
        };
        assert_eq!(
            serde_json::to_string(&descriptor).unwrap(),
            r#"{"type":"Status","values":[1,2]}"#
        );
    }

    #[test]
    fn pretty_output_respects_indent() {
        let map: OrderedMap<&str, i64> = [("a", 1)].into_iter().collect();
        let two = JsonOptions::pretty().with_indent(2).encode(&map).unwrap();
        assert_eq!(two, "{\n  \"a\": 1\n}");
        let compact = JsonOptions::default().encode(&map).unwrap();
        assert_eq!(compact, r#"{"a":1}"#);
    }
}
