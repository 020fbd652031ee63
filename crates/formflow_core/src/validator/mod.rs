//! Field type validation and parsing.
//!
//! # Responsibility
//! - Turn a declared type string (`int`, `?email`, ...) into a `Validator`.
//! - Decide whether one optional raw value satisfies the type and convert it.
//!
//! # Invariants
//! - Type and requiredness are fixed at construction.
//! - An absent value is valid iff the validator is optional.
//! - `parse` is only meaningful after `validate` returned `true`.

pub mod kind;
mod rules;

pub use kind::{supported_kind_strings, FieldKind, OPTIONAL_MARKER};

use crate::error::{EngineError, EngineResult, ErrorCase};
use crate::model::field::FieldValue;
use std::fmt::{Display, Formatter};

/// Checker/parser for one declared field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    kind: FieldKind,
    required: bool,
}

impl Validator {
    /// Builds a validator from a declared type string.
    ///
    /// Surrounding whitespace is ignored; a leading `?` marks the field as
    /// optional.
    ///
    /// # Errors
    /// - `UnknownType` when the base name is not one of
    ///   `supported_kind_strings()`.
    pub fn new(declared: &str) -> EngineResult<Self> {
        let trimmed = declared.trim();
        let (name, required) = match trimmed.strip_prefix(OPTIONAL_MARKER) {
            Some(rest) => (rest, false),
            None => (trimmed, true),
        };
        let kind = FieldKind::from_name(name)
            .ok_or_else(|| EngineError::with_context(ErrorCase::UnknownType, trimmed))?;
        Ok(Self { kind, required })
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Declared type name with the optional marker restored.
    pub fn type_name(&self) -> String {
        self.to_string()
    }

    pub fn validate(&self, raw: Option<&str>) -> bool {
        let Some(raw) = raw else {
            return !self.required;
        };

        match self.kind {
            FieldKind::Custom | FieldKind::String => true,
            FieldKind::Bool => rules::is_bool(raw),
            FieldKind::Numeric => rules::is_numeric(raw),
            FieldKind::Int => rules::is_int(raw),
            FieldKind::NoEmpty => rules::is_noempty(raw),
            FieldKind::Email => rules::is_email(raw),
            FieldKind::Phone => rules::is_phone(raw),
            FieldKind::Url => rules::is_url(raw),
            FieldKind::Domain => rules::is_domain(raw),
            FieldKind::Ip => rules::is_ip(raw),
        }
    }

    /// Converts a raw value; absent stays absent.
    ///
    /// Input that did not pass `validate` is not rejected: unparseable
    /// `numeric`/`int` values become zero.
    pub fn parse(&self, raw: Option<&str>) -> Option<FieldValue> {
        let raw = raw?;
        let value = match self.kind {
            FieldKind::Custom | FieldKind::String | FieldKind::NoEmpty => rules::text(raw),
            FieldKind::Bool => rules::parse_bool(raw),
            FieldKind::Numeric => rules::parse_numeric(raw),
            FieldKind::Int => rules::parse_int(raw),
            FieldKind::Email
            | FieldKind::Phone
            | FieldKind::Url
            | FieldKind::Domain
            | FieldKind::Ip => rules::trimmed_text(raw),
        };
        Some(value)
    }
}

impl Display for Validator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.required {
            write!(f, "{OPTIONAL_MARKER}")?;
        }
        f.write_str(self.kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldKind, Validator};
    use crate::error::ErrorCase;
    use crate::model::field::FieldValue;

    #[test]
    fn optional_marker_is_stripped_after_trim() {
        let validator = Validator::new("  ?email ").expect("optional email");
        assert_eq!(validator.kind(), FieldKind::Email);
        assert!(!validator.is_required());
        assert_eq!(validator.type_name(), "?email");
    }

    #[test]
    fn unknown_type_reports_declared_string() {
        let err = Validator::new("?color").expect_err("unknown type must fail");
        assert_eq!(err.case(), ErrorCase::UnknownType);
        assert_eq!(err.context(), Some("?color"));

        let err = Validator::new("").expect_err("empty type must fail");
        assert_eq!(err.case(), ErrorCase::UnknownType);
    }

    #[test]
    fn parse_trims_address_types_only() {
        let phone = Validator::new("phone").expect("phone");
        assert_eq!(
            phone.parse(Some(" 123456789 ")),
            Some(FieldValue::Text("123456789".into()))
        );
        let custom = Validator::new("custom").expect("custom");
        assert_eq!(
            custom.parse(Some(" raw ")),
            Some(FieldValue::Text(" raw ".into()))
        );
    }

    #[test]
    fn parse_of_unvalidated_number_yields_zero() {
        let int = Validator::new("int").expect("int");
        assert!(!int.validate(Some("thirty")));
        assert_eq!(int.parse(Some("thirty")), Some(FieldValue::Int(0)));
        let numeric = Validator::new("numeric").expect("numeric");
        assert_eq!(numeric.parse(Some("xd")), Some(FieldValue::Float(0.0)));
    }

    #[test]
    fn noempty_rejects_empty_string_only() {
        let validator = Validator::new("noempty").expect("noempty");
        assert!(!validator.validate(Some("")));
        assert!(validator.validate(Some("0")));
        assert!(Validator::new("string").expect("string").validate(Some("")));
    }
}
