//! Strict conversions report every failure

use dynconv::{
    bool_value, float_value, int_value, string_value, uint_value, Callable, ConvertError,
    ParseError, Target, Value,
};

#[test]
fn test_absent_is_reported_for_every_target() {
    let null = Value::Null;
    assert_eq!(bool_value(&null), Err(ConvertError::Absent));
    assert_eq!(int_value(&null), Err(ConvertError::Absent));
    assert_eq!(uint_value(&null), Err(ConvertError::Absent));
    assert_eq!(float_value(&null), Err(ConvertError::Absent));
    assert_eq!(string_value(&null), Err(ConvertError::Absent));
}

#[test]
fn test_unsupported_type_names_the_kind() {
    let f = Value::Func(Callable::new("cb", |_| Value::Null));

    assert_eq!(
        int_value(&f),
        Err(ConvertError::UnsupportedType {
            target: Target::Int,
            found: "func",
        })
    );
    assert_eq!(
        string_value(&Value::Float32(1.0)),
        Err(ConvertError::UnsupportedType {
            target: Target::String,
            found: "float32",
        })
    );
    assert_eq!(
        bool_value(&Value::Uint8(1)),
        Err(ConvertError::UnsupportedType {
            target: Target::Bool,
            found: "uint8",
        })
    );
}

#[test]
fn test_integer_text_grammar() {
    assert_eq!(int_value(&Value::from("123")), Ok(123));
    assert_eq!(int_value(&Value::from("-123")), Ok(-123));

    let err = int_value(&Value::from("-123.45")).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Parse {
            target: Target::Int,
            source: ParseError::Int(_),
            ..
        }
    ));
    assert!(int_value(&Value::from("abc")).is_err());
}

#[test]
fn test_negative_signed_into_unsigned_is_not_an_error() {
    assert_eq!(uint_value(&Value::Int64(-1)), Ok(u64::MAX));
    assert_eq!(uint_value(&Value::Int8(-2)), Ok(u64::MAX - 1));
}

#[test]
fn test_float32_is_not_reparsed() {
    let out = float_value(&Value::Float32(123.45)).unwrap();
    assert_eq!(out, f64::from(123.45f32));
    assert_ne!(out, 123.45);
}

#[test]
fn test_error_messages() {
    let err = int_value(&Value::from("1.5")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot parse \"1.5\" as int: invalid digit found in string"
    );

    let err = bool_value(&Value::from("true")).unwrap_err();
    assert_eq!(err.to_string(), "unexpected type of bool value, got string");
}
