use rstest::rstest;

use super::*;

#[test]
fn display_uses_type_appropriate_text() {
	assert_eq!(FieldValue::Int(-17).to_string(), "-17");
	assert_eq!(FieldValue::Uint(18_446_744_073_709_551_615).to_string(), "18446744073709551615");
	assert_eq!(FieldValue::Bool(true).to_string(), "true");
	assert_eq!(FieldValue::Bool(false).to_string(), "false");
	assert_eq!(FieldValue::Text("alice".into()).to_string(), "alice");
}

#[test]
fn default_is_integer_zero() {
	assert_eq!(FieldValue::default(), FieldValue::Int(0));
}

#[test]
fn field_type_follows_variant() {
	assert_eq!(FieldValue::from(3i64).field_type(), FieldType::Int);
	assert_eq!(FieldValue::from(3u64).field_type(), FieldType::Uint);
	assert_eq!(FieldValue::from(true).field_type(), FieldType::Bool);
	assert_eq!(FieldValue::from("x").field_type(), FieldType::Text);
	assert!(FieldValue::Int(1).matches_type(FieldType::Int));
	assert!(!FieldValue::Int(1).matches_type(FieldType::Uint));
	assert_eq!(FieldValue::Bool(false).type_name(), "bool");
}

#[test]
fn accessors_reject_other_kinds() {
	let v = FieldValue::Text("hello".into());
	assert_eq!(v.as_str(), Some("hello"));
	assert_eq!(v.as_int(), None);
	assert_eq!(v.as_uint(), None);
	assert_eq!(v.as_bool(), None);
}

#[test]
fn field_kind_round_trips_through_value() {
	assert_eq!(<i64 as FieldKind>::TYPE, FieldType::Int);
	assert_eq!(<String as FieldKind>::TYPE, FieldType::Text);
	assert_eq!(i64::from_value(7i64.to_value()), Some(7));
	assert_eq!(u64::from_value(FieldValue::Int(7)), None);
	assert_eq!(String::from_value("abc".to_string().to_value()), Some("abc".to_string()));
	assert_eq!(bool::from_value(FieldValue::Bool(true)), Some(true));
}

#[test]
fn tagged_alternatives_follow_declaration_order() {
	assert_eq!(FieldValue::ALTERNATIVES, &["Int", "Uint", "Bool", "Text"]);
	assert_eq!(FieldValue::Bool(true).tag(), 2);
	assert_eq!(FieldValue::Text(String::new()).alternative(), "Text");
}

#[rstest]
#[case("true", true)]
#[case("YES", true)]
#[case("on", true)]
#[case("1", true)]
#[case("false", false)]
#[case("No", false)]
#[case("off", false)]
#[case("0", false)]
fn parses_boolean_spellings(#[case] input: &str, #[case] expected: bool) {
	assert_eq!(FieldValue::parse(input, FieldType::Bool), Ok(FieldValue::Bool(expected)));
}

#[rstest]
#[case("555", FieldType::Int, FieldValue::Int(555))]
#[case(" -3 ", FieldType::Int, FieldValue::Int(-3))]
#[case("42", FieldType::Uint, FieldValue::Uint(42))]
#[case("hello world", FieldType::Text, FieldValue::Text("hello world".into()))]
fn parses_by_declared_type(
	#[case] input: &str,
	#[case] ty: FieldType,
	#[case] expected: FieldValue,
) {
	assert_eq!(FieldValue::parse(input, ty), Ok(expected));
}

#[rstest]
#[case("maybe", FieldType::Bool)]
#[case("12abc", FieldType::Int)]
#[case("-1", FieldType::Uint)]
fn rejects_malformed_input(#[case] input: &str, #[case] ty: FieldType) {
	let err = FieldValue::parse(input, ty).unwrap_err();
	assert_eq!(err.ty, ty);
	assert_eq!(err.input, input);
	assert!(err.to_string().starts_with(&format!("invalid {ty} value")));
}
