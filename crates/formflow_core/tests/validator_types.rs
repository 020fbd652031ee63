use formflow_core::validator::supported_kind_strings;
use formflow_core::{ErrorCase, FieldKind, FieldValue, Validator};

fn validator(declared: &str) -> Validator {
    Validator::new(declared).expect("declared type should be supported")
}

#[test]
fn absent_value_is_valid_only_for_optional_types() {
    for name in supported_kind_strings() {
        let required = validator(name);
        assert!(required.is_required());
        assert!(!required.validate(None), "required `{name}` must reject absent");

        let optional = validator(&format!("?{name}"));
        assert!(!optional.is_required());
        assert!(optional.validate(None), "optional `{name}` must accept absent");
        assert_eq!(optional.parse(None), None);
    }
}

#[test]
fn int_round_trips_integer_strings() {
    let int = validator("int");
    for (raw, expected) in [("10", 10), ("-20", -20), ("0", 0), ("+7", 7)] {
        assert!(int.validate(Some(raw)), "`{raw}` should validate as int");
        assert_eq!(int.parse(Some(raw)), Some(FieldValue::Int(expected)));
    }
}

#[test]
fn int_rejects_fractions_and_text() {
    let int = validator("int");
    assert!(!int.validate(Some("2.55")));
    assert!(!int.validate(Some("uwu")));
    assert!(!int.validate(Some("")));
}

#[test]
fn numeric_parses_to_float() {
    let numeric = validator("numeric");
    assert_eq!(numeric.parse(Some("-10")), Some(FieldValue::Float(-10.0)));
    assert_eq!(numeric.parse(Some("5.555")), Some(FieldValue::Float(5.555)));
    assert!(numeric.validate(Some("1.1")));
    assert!(!numeric.validate(Some("xd")));
}

#[test]
fn phone_accepts_local_and_international_lengths() {
    let phone = validator("phone");
    assert!(phone.validate(Some("123456789")));
    assert!(phone.validate(Some("+48123456789")));
    assert!(phone.validate(Some("+1123456789")));
    assert!(phone.validate(Some("+100123456789")));
    assert!(!phone.validate(Some("+123456789")));
    assert!(!phone.validate(Some("23456789")));
    assert!(!phone.validate(Some("+1001234567890")));
}

#[test]
fn bool_is_case_insensitive() {
    let boolean = validator("bool");
    assert_eq!(boolean.parse(Some("TRUE")), Some(FieldValue::Bool(true)));
    assert_eq!(boolean.parse(Some("false")), Some(FieldValue::Bool(false)));
    assert_eq!(boolean.parse(Some("1")), Some(FieldValue::Bool(true)));
    assert_eq!(boolean.parse(Some("0")), Some(FieldValue::Bool(false)));
    assert!(!boolean.validate(Some("xd")));
    assert!(!boolean.validate(Some("yes")));
}

#[test]
fn optional_email_still_checks_present_values() {
    let email = validator("?email");
    assert_eq!(email.kind(), FieldKind::Email);
    assert!(email.validate(Some("cixo@laptop.com")));
    assert!(!email.validate(Some("")));
    assert!(email.validate(None));
    assert_eq!(
        email.parse(Some(" cixo@laptop.com ")),
        Some(FieldValue::Text("cixo@laptop.com".to_string()))
    );
}

#[test]
fn address_types_check_shape() {
    assert!(validator("url").validate(Some("https://example.com/form")));
    assert!(!validator("url").validate(Some("not a url")));
    assert!(validator("domain").validate(Some("mail.example.com")));
    assert!(!validator("domain").validate(Some("bad..example")));
    assert!(validator("ip").validate(Some("10.0.0.1")));
    assert!(!validator("ip").validate(Some("10.0.0")));
}

#[test]
fn custom_and_string_pass_everything_through() {
    for declared in ["custom", "string"] {
        let pass_through = validator(declared);
        assert!(pass_through.validate(Some("")));
        assert_eq!(
            pass_through.parse(Some("  keep spacing ")),
            Some(FieldValue::Text("  keep spacing ".to_string()))
        );
    }
}

#[test]
fn unknown_types_fail_construction() {
    for declared in ["integer", "?", "??int", "Int"] {
        let err = Validator::new(declared).expect_err("unknown type must be rejected");
        assert_eq!(err.case(), ErrorCase::UnknownType, "declared `{declared}`");
    }
}

#[test]
fn type_name_restores_optional_marker() {
    assert_eq!(validator(" int ").type_name(), "int");
    assert_eq!(validator("?phone").type_name(), "?phone");
}
