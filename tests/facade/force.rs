//! Force conversions are total

use dynconv::{bool_force, string_force, Callable, Value};
use std::collections::{BTreeMap, HashMap, VecDeque};

#[test]
fn test_bool_force_truthiness() {
    assert!(!bool_force(&Value::Null));
    assert!(!bool_force(&Value::Int32(0)));
    assert!(!bool_force(&Value::Uint64(0)));
    assert!(!bool_force(&Value::Float32(0.0)));
    assert!(!bool_force(&Value::from("")));
    assert!(!bool_force(&Value::Array(vec![])));
    assert!(!bool_force(&Value::Object(BTreeMap::new())));
    assert!(!bool_force(&Value::Queue(VecDeque::new())));

    assert!(bool_force(&Value::Int32(-7)));
    assert!(bool_force(&Value::from("0")));
    assert!(bool_force(&Value::Array(vec![Value::Bool(false)])));
    assert!(bool_force(&Value::Func(Callable::new("f", |_| Value::Null))));
}

#[test]
fn test_string_force_rendering() {
    assert_eq!(string_force(&Value::Null), "");
    assert_eq!(string_force(&Value::from("abc")), "abc");
    assert_eq!(string_force(&Value::Float64(0.5)), "0.5");
    assert_eq!(string_force(&Value::Int8(-1)), "-1");
    assert_eq!(
        string_force(&Value::Array(vec![Value::Int64(1), Value::Array(vec![])])),
        "[1 []]"
    );

    let mut map = HashMap::new();
    map.insert("z".to_string(), Value::Bool(true));
    map.insert("a".to_string(), Value::Null);
    assert_eq!(string_force(&Value::from(map)), "map[a:<nil> z:true]");
}

#[test]
fn test_string_force_repeatable() {
    let v = Value::Object(BTreeMap::from([
        ("k".to_string(), Value::Float32(0.1)),
        ("j".to_string(), Value::Bytes(vec![0, 1])),
    ]));
    let first = string_force(&v);
    for _ in 0..3 {
        assert_eq!(string_force(&v), first);
    }
    assert_eq!(first, "map[j:[0 1] k:0.1]");
}
