//! Immutable token-to-Greek lookup table
//!
//! A `MappingTable` is built once from a flat key/value resource and never
//! mutated afterwards, so one table can back any number of converters on
//! any number of threads.

use std::io::Read;
use std::sync::Arc;

use fxhash::FxHashMap;
use lazy_static::lazy_static;
use serde_json::Value;

use super::betacode::STANDARD_MAPPINGS;
use crate::utils::error::{ConversionError, ConversionResult};
use crate::utils::files::{resource_extension, ResourceResolver, DEFAULT_EXTENSION};

lazy_static! {
    /// Shared copy of the standard beta code table
    pub static ref STANDARD_TABLE: Arc<MappingTable> = Arc::new(MappingTable::standard());
}

/// Lookup from beta code token to Greek output unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    entries: FxHashMap<String, String>,
}

impl MappingTable {
    /// Build the table shipped with the crate
    pub fn standard() -> Self {
        let entries = STANDARD_MAPPINGS
            .entries()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { entries }
    }

    /// Build a table from key/value pairs
    ///
    /// Fails if there are no pairs or any key is empty. A later duplicate
    /// key replaces an earlier one.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> ConversionResult<Self>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = FxHashMap::default();
        for (key, value) in pairs {
            let key = key.into();
            if key.is_empty() {
                return Err(ConversionError::malformed("empty key"));
            }
            entries.insert(key, value.into());
        }
        if entries.is_empty() {
            return Err(ConversionError::malformed("no entries"));
        }
        Ok(Self { entries })
    }

    /// Parse a JSON object of string-to-string pairs
    pub fn from_json(source: &str) -> ConversionResult<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_json_value(value)
    }

    /// Parse a JSON object of string-to-string pairs from a reader
    pub fn from_reader<R: Read>(reader: R) -> ConversionResult<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_json_value(value)
    }

    fn from_json_value(value: Value) -> ConversionResult<Self> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(ConversionError::malformed(format!(
                    "expected an object at the top level, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut pairs = Vec::with_capacity(object.len());
        for (key, value) in object {
            match value {
                Value::String(s) => pairs.push((key, s)),
                other => {
                    return Err(ConversionError::malformed(format!(
                        "value for '{}' is {}, expected a string",
                        key,
                        json_kind(&other)
                    )))
                }
            }
        }
        Self::from_pairs(pairs)
    }

    /// Parse a YAML mapping of string-to-string pairs
    #[cfg(feature = "data-loading")]
    pub fn from_yaml(source: &str) -> ConversionResult<Self> {
        let map: indexmap::IndexMap<String, String> =
            serde_yaml::from_str(source).map_err(|e| ConversionError::malformed(e.to_string()))?;
        Self::from_pairs(map)
    }

    /// Parse a TOML table of string-to-string pairs
    #[cfg(feature = "data-loading")]
    pub fn from_toml(source: &str) -> ConversionResult<Self> {
        let map: indexmap::IndexMap<String, String> =
            toml::from_str(source).map_err(|e| ConversionError::malformed(e.to_string()))?;
        Self::from_pairs(map)
    }

    /// Parse headerless two-column CSV (`token,greek`)
    #[cfg(feature = "data-loading")]
    pub fn from_csv(source: &str) -> ConversionResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source.as_bytes());

        let mut pairs = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| ConversionError::malformed(e.to_string()))?;
            match (record.get(0), record.get(1), record.len()) {
                (Some(key), Some(value), 2) => pairs.push((key.to_string(), value.to_string())),
                _ => {
                    return Err(ConversionError::malformed(format!(
                        "row {} has {} columns, expected 2",
                        row + 1,
                        record.len()
                    )))
                }
            }
        }
        Self::from_pairs(pairs)
    }

    /// Load a table through a resolver, choosing the parser by extension
    ///
    /// Names without an extension are read as JSON.
    pub fn load<R: ResourceResolver + ?Sized>(resolver: &R, name: &str) -> ConversionResult<Self> {
        let source = resolver.read_resource(name)?;
        let extension = resource_extension(name).unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        let table = match extension.as_str() {
            "json" => Self::from_json(&source)?,
            #[cfg(feature = "data-loading")]
            "yaml" | "yml" => Self::from_yaml(&source)?,
            #[cfg(feature = "data-loading")]
            "toml" => Self::from_toml(&source)?,
            #[cfg(feature = "data-loading")]
            "csv" => Self::from_csv(&source)?,
            other => return Err(ConversionError::unsupported_format(other)),
        };

        tracing::debug!(resource = name, entries = table.len(), "mapping table loaded");
        Ok(table)
    }

    /// Look up a token
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Look up a single-character token
    pub fn lookup_char(&self, c: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.lookup(c.encode_utf8(&mut buf))
    }

    pub fn contains_key(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::files::{MemoryResourceResolver, NoopResourceResolver};

    #[test]
    fn test_standard_table() {
        let table = MappingTable::standard();
        assert_eq!(table.len(), STANDARD_MAPPINGS.len());
        assert_eq!(table.lookup("a"), Some("α"));
        assert_eq!(table.lookup_char('w'), Some("ω"));
        assert_eq!(table.lookup("a)/|"), Some("ᾄ"));
        assert_eq!(table.lookup("?"), None);
    }

    #[test]
    fn test_from_json() {
        let table = MappingTable::from_json(r#"{"a": "α", "a/": "ά", "*": "", "*a": "Α"}"#)
            .unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.lookup("*"), Some(""));
        assert!(table.contains_key("a/"));
        assert!(!table.contains_key("b"));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = MappingTable::from_json(r#"["a", "α"]"#).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_from_json_rejects_non_string_value() {
        let err = MappingTable::from_json(r#"{"a": "α", "b": 2}"#).unwrap_err();
        assert!(matches!(err, ConversionError::MalformedTable { .. }));
        assert!(err.to_string().contains("'b'"));
    }

    #[test]
    fn test_from_json_rejects_syntax_error() {
        let err = MappingTable::from_json(r#"{"a": "α""#).unwrap_err();
        assert!(matches!(err, ConversionError::Json(_)));
    }

    #[test]
    fn test_from_json_rejects_empty() {
        assert!(MappingTable::from_json("{}").is_err());
        assert!(MappingTable::from_json(r#"{"": "x"}"#).is_err());
    }

    #[test]
    fn test_from_reader() {
        let table = MappingTable::from_reader(r#"{"b": "β"}"#.as_bytes()).unwrap();
        assert_eq!(table.lookup("b"), Some("β"));
    }

    #[test]
    fn test_load_through_resolver() {
        let mut resolver = MemoryResourceResolver::new();
        resolver.add_resource("greek.json", r#"{"g": "γ"}"#);

        let table = MappingTable::load(&resolver, "greek").unwrap();
        assert_eq!(table.lookup("g"), Some("γ"));

        let err = MappingTable::load(&resolver, "latin").unwrap_err();
        assert!(matches!(err, ConversionError::Resource(_)));

        assert!(MappingTable::load(&NoopResourceResolver, "greek").is_err());
    }

    #[test]
    fn test_load_unknown_extension() {
        let mut resolver = MemoryResourceResolver::new();
        resolver.add_resource("greek.xml", "<a/>");

        let err = MappingTable::load(&resolver, "greek.xml").unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedFormat { .. }));
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_alternate_formats() {
        let yaml = MappingTable::from_yaml("a: α\n\"a/\": ά\n").unwrap();
        assert_eq!(yaml.lookup("a/"), Some("ά"));

        let toml = MappingTable::from_toml("a = \"α\"\n\"*a\" = \"Α\"\n").unwrap();
        assert_eq!(toml.lookup("*a"), Some("Α"));

        let csv = MappingTable::from_csv("a,α\nb,β\n").unwrap();
        assert_eq!(csv.lookup("b"), Some("β"));

        assert!(MappingTable::from_csv("a,α,extra\n").is_err());
    }

    #[test]
    fn test_shared_standard_table() {
        assert_eq!(STANDARD_TABLE.lookup("q"), Some("θ"));
        assert_eq!(**STANDARD_TABLE, MappingTable::default());
    }
}
