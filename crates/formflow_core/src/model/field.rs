//! Field maps, input declarations and parsed field values.
//!
//! # Responsibility
//! - Name the raw and declared shapes exchanged between view, host and
//!   validator.
//! - Define the typed value produced by a successful parse.
//!
//! # Invariants
//! - Absent fields are missing keys, never explicit empty values.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Raw submitted fields: name to raw string.
pub type FieldMap = BTreeMap<String, String>;

/// Declared inputs: field name to validator type string (e.g. `?int`).
pub type InputDeclarations = BTreeMap<String, String>;

/// Builds an `InputDeclarations` map from `(name, type)` pairs.
pub fn inputs<const N: usize>(pairs: [(&str, &str); N]) -> InputDeclarations {
    pairs
        .into_iter()
        .map(|(name, kind)| (name.to_string(), kind.to_string()))
        .collect()
}

/// Builds a `FieldMap` from `(name, raw)` pairs.
pub fn fields<const N: usize>(pairs: [(&str, &str); N]) -> FieldMap {
    pairs
        .into_iter()
        .map(|(name, raw)| (name.to_string(), raw.to_string()))
        .collect()
}

/// Typed value stored for a field that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Float(f64),
    Int(i64),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{fields, inputs, FieldValue};

    #[test]
    fn builders_collect_pairs() {
        let declared = inputs([("name", "string"), ("age", "?int")]);
        assert_eq!(declared.get("age").map(String::as_str), Some("?int"));

        let received = fields([("calc_age", "1")]);
        assert_eq!(received.len(), 1);
    }

    #[test]
    fn accessors_match_variant() {
        assert_eq!(FieldValue::Int(30).as_int(), Some(30));
        assert_eq!(FieldValue::Int(30).as_float(), Some(30.0));
        assert_eq!(FieldValue::Int(30).as_str(), None);
        assert_eq!(FieldValue::Bool(true).as_bool(), Some(true));
        assert_eq!(FieldValue::Text("x".into()).as_str(), Some("x"));
    }

    #[test]
    fn display_renders_plain_value() {
        assert_eq!(FieldValue::Int(-20).to_string(), "-20");
        assert_eq!(FieldValue::Float(5.555).to_string(), "5.555");
        assert_eq!(FieldValue::Bool(false).to_string(), "false");
        assert_eq!(FieldValue::Text("cixo".into()).to_string(), "cixo");
    }
}
