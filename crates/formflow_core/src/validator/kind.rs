//! Closed set of declared field types.

/// Declared type string for pass-through values.
pub const KIND_CUSTOM: &str = "custom";
/// Declared type string for `true|false|1|0`.
pub const KIND_BOOL: &str = "bool";
/// Declared type string for any numeric value.
pub const KIND_NUMERIC: &str = "numeric";
/// Declared type string for whole numbers.
pub const KIND_INT: &str = "int";
/// Declared type string for free text.
pub const KIND_STRING: &str = "string";
/// Declared type string for non-empty text.
pub const KIND_NOEMPTY: &str = "noempty";
/// Declared type string for e-mail addresses.
pub const KIND_EMAIL: &str = "email";
/// Declared type string for phone numbers.
pub const KIND_PHONE: &str = "phone";
/// Declared type string for absolute URLs.
pub const KIND_URL: &str = "url";
/// Declared type string for domain names.
pub const KIND_DOMAIN: &str = "domain";
/// Declared type string for IPv4/IPv6 addresses.
pub const KIND_IP: &str = "ip";

/// Prefix marking a declared field as optional.
pub const OPTIONAL_MARKER: char = '?';

const SUPPORTED_KIND_STRINGS: &[&str] = &[
    KIND_CUSTOM,
    KIND_BOOL,
    KIND_NUMERIC,
    KIND_INT,
    KIND_STRING,
    KIND_NOEMPTY,
    KIND_EMAIL,
    KIND_PHONE,
    KIND_URL,
    KIND_DOMAIN,
    KIND_IP,
];

/// Returns every recognized base type name.
pub fn supported_kind_strings() -> &'static [&'static str] {
    SUPPORTED_KIND_STRINGS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Custom,
    Bool,
    Numeric,
    Int,
    String,
    NoEmpty,
    Email,
    Phone,
    Url,
    Domain,
    Ip,
}

impl FieldKind {
    /// Parses an exact, marker-free base type name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            KIND_CUSTOM => Some(Self::Custom),
            KIND_BOOL => Some(Self::Bool),
            KIND_NUMERIC => Some(Self::Numeric),
            KIND_INT => Some(Self::Int),
            KIND_STRING => Some(Self::String),
            KIND_NOEMPTY => Some(Self::NoEmpty),
            KIND_EMAIL => Some(Self::Email),
            KIND_PHONE => Some(Self::Phone),
            KIND_URL => Some(Self::Url),
            KIND_DOMAIN => Some(Self::Domain),
            KIND_IP => Some(Self::Ip),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Custom => KIND_CUSTOM,
            Self::Bool => KIND_BOOL,
            Self::Numeric => KIND_NUMERIC,
            Self::Int => KIND_INT,
            Self::String => KIND_STRING,
            Self::NoEmpty => KIND_NOEMPTY,
            Self::Email => KIND_EMAIL,
            Self::Phone => KIND_PHONE,
            Self::Url => KIND_URL,
            Self::Domain => KIND_DOMAIN,
            Self::Ip => KIND_IP,
        }
    }
}
