use caster::{is_nil_error, wrap, Caster, ErrorKind, Value};
use rstest::rstest;

#[rstest]
#[case(Value::from(127), Some(127))]
#[case(Value::from(128), None)]
#[case(Value::from(-128), Some(-128))]
#[case(Value::from(-129), None)]
#[case(Value::from(200), None)]
#[case(Value::from("42"), Some(42))]
#[case(Value::from(42.0), Some(42))]
#[case(Value::from(4.2), None)]
#[case(Value::from(true), None)]
fn i8_bounds(#[case] input: Value, #[case] expected: Option<i8>) {
    assert_eq!(wrap(&input).i8().ok(), expected);
}

#[rstest]
#[case(i16::MAX as i128, i16::MIN as i128)]
#[case(i32::MAX as i128, i32::MIN as i128)]
#[case(i64::MAX as i128, i64::MIN as i128)]
fn signed_bounds(#[case] max: i128, #[case] min: i128) {
    let ok = |v: i128| {
        let val = Value::from(v.to_string());
        let caster = wrap(&val);
        match max {
            m if m == i16::MAX as i128 => caster.i16().is_ok(),
            m if m == i32::MAX as i128 => caster.i32().is_ok(),
            _ => caster.i64().is_ok(),
        }
    };
    assert!(ok(max));
    assert!(ok(min));
    assert!(!ok(max + 1));
    assert!(!ok(min - 1));
}

#[rstest]
#[case(u8::MAX as u128)]
#[case(u16::MAX as u128)]
#[case(u32::MAX as u128)]
#[case(u64::MAX as u128)]
fn unsigned_bounds(#[case] max: u128) {
    let ok = |v: u128| {
        let val = Value::from(v.to_string());
        let caster = wrap(&val);
        match max {
            m if m == u8::MAX as u128 => caster.u8().is_ok(),
            m if m == u16::MAX as u128 => caster.u16().is_ok(),
            m if m == u32::MAX as u128 => caster.u32().is_ok(),
            _ => caster.u64().is_ok(),
        }
    };
    assert!(ok(0));
    assert!(ok(max));
    assert!(!ok(max + 1));
    assert!(!ok(u128::MAX));
}

#[rstest]
#[case("-1")]
#[case("-0")]
#[case("+1")]
#[case("1.0")]
#[case("0x10")]
#[case("")]
fn unsigned_rejects(#[case] input: &str) {
    let val = Value::from(input);
    let caster = wrap(&val);
    assert!(caster.u8().is_err());
    assert!(caster.u64().is_err());
    assert!(caster.usize().is_err());
}

#[test]
fn platform_sized() {
    let val = Value::from(i64::MAX);
    assert_eq!(wrap(&val).isize().ok(), isize::try_from(i64::MAX).ok());
    assert_eq!(wrap(&Value::from(-3)).isize(), Ok(-3));
    assert_eq!(wrap(&Value::from(-3)).usize_safe(1), 1);
    assert_eq!(wrap(&Value::from("12")).usize(), Ok(12));
}

#[rstest]
#[case("true", Some(true))]
#[case("false", Some(false))]
#[case("TRUE", Some(true))]
#[case("False", Some(false))]
#[case("1", None)]
#[case("0", None)]
#[case("yes", None)]
#[case("no", None)]
fn bool_spellings(#[case] input: &str, #[case] expected: Option<bool>) {
    assert_eq!(wrap(&Value::from(input)).bool().ok(), expected);
}

#[test]
fn bool_from_native() {
    assert_eq!(wrap(&Value::from(true)).bool(), Ok(true));
    assert_eq!(wrap(&Value::from(1)).bool_safe(false), false);
}

#[rstest]
#[case("1.5", Some(1.5))]
#[case("-2", Some(-2.0))]
#[case("1e10", Some(1e10))]
#[case("Inf", Some(f64::INFINITY))]
#[case("-infinity", Some(f64::NEG_INFINITY))]
#[case("1e400", None)]
#[case("1,5", None)]
#[case("", None)]
fn f64_parse(#[case] input: &str, #[case] expected: Option<f64>) {
    assert_eq!(wrap(&Value::from(input)).f64().ok(), expected);
}

#[test]
fn f32_range() {
    assert_eq!(wrap(&Value::from("3.5")).f32(), Ok(3.5));
    assert!(wrap(&Value::from(1e39)).f32().is_err());
    assert_eq!(wrap(&Value::from(1e39)).f64(), Ok(1e39));
    assert_eq!(wrap(&Value::from("NaN")).f32_safe(0.0).is_nan(), true);
}

#[test]
fn string_requires_string_shape() {
    assert_eq!(
        wrap(&Value::from(42)).string().unwrap_err().kind(),
        ErrorKind::ConversionFailure
    );
    assert_eq!(wrap(&Value::from("42")).string(), Ok("42".to_string()));
    assert_eq!(wrap(&Value::from(true)).string_safe("x".into()), "x");
    assert!(wrap(&Value::from(vec!["a"])).string().is_err());
}

#[test]
fn nil_everywhere() {
    let val = Value::Null;
    let caster = wrap(&val);
    let errors = [
        caster.bool().unwrap_err(),
        caster.i8().unwrap_err(),
        caster.i16().unwrap_err(),
        caster.i32().unwrap_err(),
        caster.i64().unwrap_err(),
        caster.isize().unwrap_err(),
        caster.u8().unwrap_err(),
        caster.u16().unwrap_err(),
        caster.u32().unwrap_err(),
        caster.u64().unwrap_err(),
        caster.usize().unwrap_err(),
        caster.f32().unwrap_err(),
        caster.f64().unwrap_err(),
        caster.string().unwrap_err(),
        caster.value().unwrap_err(),
    ];
    for err in &errors {
        assert_eq!(err.kind(), ErrorKind::NilValue);
        assert!(is_nil_error(err));
    }
}

#[test]
fn conversion_failure_is_not_nil() {
    let val = Value::from("abc");
    let err = wrap(&val).i32().unwrap_err();
    assert!(!is_nil_error(&err));
    assert_eq!(err.target(), Some("i32"));
    assert_eq!(err.to_string(), "conversion_failure: failed to cast \"abc\" as i32");
}

#[test]
fn end_to_end_int8() {
    assert_eq!(wrap(&Value::from(42)).i8(), Ok(42));
    assert!(wrap(&Value::from(200)).i8().is_err());
    assert_eq!(wrap(&Value::from(200)).i8_safe(-1), -1);
}

#[rstest]
#[case(Value::from(vec!["1", "x", "3"]), vec![1, 3])]
#[case(Value::from(vec![Value::from(1), Value::Null, Value::from(2.0)]), vec![1, 2])]
#[case(Value::from(vec![Value::from(300), Value::from(-1), Value::from("9")]), vec![9])]
fn slices(#[case] input: Value, #[case] expected: Vec<u8>) {
    assert_eq!(wrap(&input).u8_slice(vec![]), expected);
}

#[rstest]
#[case(Value::Seq(vec![]))]
#[case(Value::from(vec!["a", "b"]))]
#[case(Value::from("1"))]
#[case(Value::Null)]
fn slice_fallback(#[case] input: Value) {
    assert_eq!(wrap(&input).i32_slice(vec![-1]), vec![-1]);
}

#[test]
fn typed_slices() {
    let val = Value::from(vec![Value::from("true"), Value::from("nah"), Value::from(false)]);
    assert_eq!(wrap(&val).bool_slice(vec![]), vec![true, false]);

    let val = Value::from(vec![Value::from("a"), Value::from(1), Value::from("b")]);
    assert_eq!(wrap(&val).string_slice(vec![]), vec!["a".to_string(), "b".to_string()]);

    let val = Value::from(vec!["0.5", "x", "-inf"]);
    assert_eq!(wrap(&val).f64_slice(vec![]), vec![0.5, f64::NEG_INFINITY]);
    assert_eq!(wrap(&val).f32_slice(vec![]), vec![0.5, f32::NEG_INFINITY]);

    let val = Value::from(vec![i64::MIN, 0, i64::MAX]);
    assert_eq!(wrap(&val).i64_slice(vec![]), vec![i64::MIN, 0, i64::MAX]);
    assert_eq!(wrap(&val).i16_slice(vec![]), vec![0]);
    assert_eq!(wrap(&val).i8_slice(vec![]), vec![0]);
    assert_eq!(wrap(&val).u16_slice(vec![]), vec![0]);
    assert_eq!(wrap(&val).u32_slice(vec![]), vec![0]);
    assert_eq!(wrap(&val).u64_slice(vec![]), vec![0, i64::MAX as u64]);
}

#[test]
fn raw_passthrough() {
    let val = Value::from(vec![1, 2]);
    let caster = Caster::new(&val);
    assert!(std::ptr::eq(caster.raw(), &val));
    assert_eq!(caster.value(), Ok(&val));
    assert_eq!(Caster::from_option(None).raw(), &Value::Null);
}

#[test]
fn generic_getters() {
    let val = Value::from("17");
    let caster = wrap(&val);
    assert_eq!(caster.get::<u32>(), Ok(17));
    assert_eq!(caster.get_safe::<bool>(true), true);
    assert_eq!(caster.get_slice::<u32>(vec![1]), vec![1]);
}
