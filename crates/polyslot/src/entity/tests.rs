use super::*;

struct Account {
	owner: String,
	balance: u64,
	frozen: bool,
}

impl Entity for Account {
	const NAME: &'static str = "Account";
	const FIELDS: &'static [FieldDescriptor<Self>] = &[
		FieldDescriptor::new(
			0,
			"owner",
			FieldType::Text,
			|a| FieldValue::Text(a.owner.clone()),
			|a, v| {
				if let FieldValue::Text(v) = v {
					a.owner = v;
				}
			},
		),
		FieldDescriptor::new(
			1,
			"balance",
			FieldType::Uint,
			|a| FieldValue::Uint(a.balance),
			|a, v| {
				if let FieldValue::Uint(v) = v {
					a.balance = v;
				}
			},
		),
		FieldDescriptor::new(
			2,
			"frozen",
			FieldType::Bool,
			|a| FieldValue::Bool(a.frozen),
			|a, v| {
				if let FieldValue::Bool(v) = v {
					a.frozen = v;
				}
			},
		),
	];
}

fn account() -> Account {
	Account { owner: "alice".into(), balance: 100, frozen: false }
}

#[test]
fn field_count_is_declared_count() {
	assert_eq!(Account::field_count(), 3);
	assert!(is_contiguous(Account::FIELDS));
}

#[test]
fn get_reads_current_value() {
	let a = account();
	assert_eq!(a.get_field(0), Ok(FieldValue::Text("alice".into())));
	assert_eq!(a.get_field(1), Ok(FieldValue::Uint(100)));
	assert_eq!(a.get_field(2), Ok(FieldValue::Bool(false)));
}

#[test]
fn set_writes_through() {
	let mut a = account();
	a.set_field(1, FieldValue::Uint(250)).unwrap();
	a.set_field(2, FieldValue::Bool(true)).unwrap();
	assert_eq!(a.balance, 250);
	assert!(a.frozen);
	assert_eq!(a.owner, "alice");
}

#[test]
fn out_of_range_index_is_reported() {
	let mut a = account();
	let expected = FieldError::OutOfRange { entity: "Account", index: 3, count: 3 };
	assert_eq!(a.get_field(3), Err(expected.clone()));
	assert_eq!(a.set_field(3, FieldValue::Int(1)), Err(expected));
}

#[test]
fn mismatched_kind_is_rejected_without_writing() {
	let mut a = account();
	let err = a.set_field(1, FieldValue::Int(5)).unwrap_err();
	assert_eq!(
		err,
		FieldError::TypeMismatch {
			entity: "Account",
			field: "balance",
			expected: FieldType::Uint,
			got: FieldType::Int,
		}
	);
	assert_eq!(a.balance, 100);
	assert_eq!(err.to_string(), "type mismatch for Account.balance: expected uint, got int");
}

#[test]
fn lookup_by_name() {
	let field = Account::field_by_name("frozen").unwrap();
	assert_eq!(field.index, 2);
	assert_eq!(field.ty, FieldType::Bool);
	assert!(Account::field_by_name("missing").is_none());
}

#[test]
fn record_has_no_rows() {
	assert_eq!(account().row_count(), None);
}

#[test]
fn gaps_are_detected() {
	let fields: [FieldDescriptor<Account>; 2] = [Account::FIELDS[0], Account::FIELDS[2]];
	assert!(!is_contiguous(&fields));
	assert!(is_contiguous::<Account>(&[]));
}
