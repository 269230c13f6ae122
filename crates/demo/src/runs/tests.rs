use polyslot::{RegistryError, UnresolvedPolicy};
use pretty_assertions::assert_eq;

use super::*;

fn capture(run: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
	let mut out = Vec::new();
	run(&mut out).unwrap();
	String::from_utf8(out).unwrap()
}

fn report() -> RegistryConfig {
	RegistryConfig::with_policy(UnresolvedPolicy::Report)
}

#[test]
fn poc_walks_both_records() {
	let out = capture(|out| poc(RegistryConfig::default(), out));
	assert_eq!(out, "1\n4\nResult 1: 2\nResult 2: 3\n555\n");
}

#[test]
fn variants_reach_handlers_and_fallback() {
	let out = capture(|out| variants(out));
	assert_eq!(
		out,
		"int 42\ndouble 3.14\nstring Hello\nAStruct 500\nBStruct true\nunknown type\n"
	);
}

#[test]
fn tables_report_fields_then_rows() {
	let out = capture(|out| tables(RegistryConfig::default(), None, out));
	assert_eq!(
		out,
		"Field count for tableIndex 0: 2\n\
		 Field count for tableIndex 1: 4\n\
		 Total element count for tableIndex 0: 3\n\
		 Total element count for tableIndex 1: 2\n"
	);
}

#[test]
fn tables_count_after_drop() {
	let out = capture(|out| tables(RegistryConfig::default(), Some(1), out));
	assert!(out.ends_with(
		"Total element count for tableIndex 0: 2\nTotal element count for tableIndex 1: 2\n"
	));

	let out = capture(|out| tables(RegistryConfig::default(), Some(40), out));
	assert!(out.contains("Total element count for tableIndex 0: 3\n"));
}

#[test]
fn describe_lists_demo_slots() {
	let out = capture(|out| describe(RegistryConfig::default(), out));
	assert_eq!(
		out,
		"[0] R (x: int, y: int)\n\
		 [1] S (a: int, b: int, c: int)\n\
		 [2] table (code: text, scope: uint) rows=3\n\
		 [3] table (code: text, scope: uint) rows=2\n"
	);
}

#[test]
fn get_and_print_format_values() {
	assert_eq!(capture(|out| get(RegistryConfig::default(), 0, 1, out)), "2 (int)\n");
	assert_eq!(capture(|out| get(RegistryConfig::default(), 3, 0, out)), "transfers (text)\n");
	assert_eq!(capture(|out| print(RegistryConfig::default(), 2, 1, out)), "0\n");
	assert_eq!(capture(|out| get(RegistryConfig::default(), 9, 0, out)), "0 (int)\n");
}

#[test]
fn set_parses_by_declared_type() {
	assert_eq!(capture(|out| set(RegistryConfig::default(), 1, 2, "555", out)), "555\n");
	assert_eq!(capture(|out| set(RegistryConfig::default(), 2, 1, "7", out)), "7\n");
	assert_eq!(capture(|out| set(RegistryConfig::default(), 2, 0, "ledger", out)), "ledger\n");
}

#[test]
fn set_rejects_bad_input() {
	let mut out = Vec::new();
	let err = set(RegistryConfig::default(), 0, 0, "abc", &mut out).unwrap_err();
	assert!(err.to_string().contains("invalid int value"));

	let err = set(RegistryConfig::default(), 2, 1, "-3", &mut out).unwrap_err();
	assert!(err.to_string().contains("invalid uint value"));

	let err = set(RegistryConfig::default(), 0, 5, "1", &mut out).unwrap_err();
	let field = err.downcast_ref::<RegistryError>().and_then(RegistryError::as_field);
	assert!(matches!(field, Some(polyslot::FieldError::OutOfRange { index: 5, .. })));
	assert!(out.is_empty());
}

#[test]
fn unresolved_object_follows_policy() {
	assert_eq!(capture(|out| set(RegistryConfig::default(), 9, 0, "x", out)), "");

	let mut out = Vec::new();
	let err = get(report(), 9, 0, &mut out).unwrap_err();
	assert!(matches!(
		err.downcast_ref::<RegistryError>(),
		Some(RegistryError::UnresolvedIndex { index: 9, slots: 4 })
	));
	assert!(print(report(), 4, 0, &mut out).is_err());
	let err = set(report(), 9, 0, "7", &mut out).unwrap_err();
	assert!(matches!(
		err.downcast_ref::<RegistryError>(),
		Some(RegistryError::UnresolvedIndex { index: 9, slots: 4 })
	));
	assert!(out.is_empty());
}
