//! Fallback conversions swallow every failure uniformly

use dynconv::{
    bool_default, float_default, int_default, string_default, to_bool, to_float, to_int,
    to_string, to_uint, uint_default, Value,
};

fn failing_inputs() -> Vec<Value> {
    vec![
        Value::Null,
        Value::Array(vec![]),
        Value::from("not a number"),
    ]
}

#[test]
fn test_defaults_are_returned_unchanged() {
    for v in failing_inputs() {
        assert_eq!(int_default(&v, -42), -42, "{:?}", v);
        assert_eq!(uint_default(&v, 42), 42, "{:?}", v);
        assert_eq!(float_default(&v, 4.2), 4.2, "{:?}", v);
    }
    for v in [Value::Null, Value::Int64(1), Value::Bytes(vec![])] {
        assert!(bool_default(&v, true), "{:?}", v);
        assert_eq!(string_default(&v, "fallback".to_string()), "fallback");
    }
}

#[test]
fn test_zero_values() {
    for v in failing_inputs() {
        assert_eq!(to_int(&v), 0);
        assert_eq!(to_uint(&v), 0);
        assert_eq!(to_float(&v), 0.0);
        assert!(!to_bool(&v));
        assert_eq!(to_string(&v), if v.is_string() { "not a number" } else { "" });
    }
}

#[test]
fn test_successful_conversions_ignore_default() {
    assert_eq!(int_default(&Value::Float64(-9.99), 1), -9);
    assert_eq!(uint_default(&Value::Bool(true), 5), 1);
    assert_eq!(float_default(&Value::Uint16(3), 0.5), 3.0);
    assert!(!bool_default(&Value::Bool(false), true));
    assert_eq!(string_default(&Value::from(""), "x".to_string()), "");
}
