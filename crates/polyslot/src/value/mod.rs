//! Field values: the closed set of kinds an entity field may hold.

mod parse;

use std::fmt;

pub use parse::{parse_bool, parse_int, parse_uint};

use crate::Tagged;

/// The current value of an entity field, boxed as one of the supported kinds.
#[derive(Debug, Clone, PartialEq, Eq, Tagged)]
pub enum FieldValue {
	/// Signed integer value.
	Int(i64),
	/// Unsigned integer value.
	Uint(u64),
	/// Boolean value (true/false).
	Bool(bool),
	/// Text value.
	Text(String),
}

impl Default for FieldValue {
	fn default() -> Self {
		FieldValue::Int(0)
	}
}

impl FieldValue {
	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			FieldValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the unsigned value if this is a `Uint` variant.
	pub fn as_uint(&self) -> Option<u64> {
		match self {
			FieldValue::Uint(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			FieldValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the text if this is a `Text` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			FieldValue::Text(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the kind of this value.
	pub fn field_type(&self) -> FieldType {
		match self {
			FieldValue::Int(_) => FieldType::Int,
			FieldValue::Uint(_) => FieldType::Uint,
			FieldValue::Bool(_) => FieldType::Bool,
			FieldValue::Text(_) => FieldType::Text,
		}
	}

	/// Returns true if this value matches the given type.
	pub fn matches_type(&self, ty: FieldType) -> bool {
		self.field_type() == ty
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		self.field_type().name()
	}

	/// Parses text into a value of the given kind.
	pub fn parse(input: &str, ty: FieldType) -> Result<FieldValue, ParseValueError> {
		let invalid = |reason| ParseValueError { ty, input: input.to_string(), reason };
		match ty {
			FieldType::Int => parse_int(input).map(FieldValue::Int).map_err(invalid),
			FieldType::Uint => parse_uint(input).map(FieldValue::Uint).map_err(invalid),
			FieldType::Bool => parse_bool(input).map(FieldValue::Bool).map_err(invalid),
			FieldType::Text => Ok(FieldValue::Text(input.to_string())),
		}
	}
}

/// Writes the value in its type-appropriate textual form.
struct Render<'a, 'b> {
	f: &'a mut fmt::Formatter<'b>,
}

impl FieldValueVisitor for Render<'_, '_> {
	type Output = fmt::Result;

	fn fallback(&mut self, alternative: &'static str) -> fmt::Result {
		write!(self.f, "<{alternative}>")
	}

	fn visit_int(&mut self, value: &i64) -> fmt::Result {
		write!(self.f, "{value}")
	}

	fn visit_uint(&mut self, value: &u64) -> fmt::Result {
		write!(self.f, "{value}")
	}

	fn visit_bool(&mut self, value: &bool) -> fmt::Result {
		self.f.write_str(if *value { "true" } else { "false" })
	}

	fn visit_text(&mut self, value: &String) -> fmt::Result {
		self.f.write_str(value)
	}
}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.dispatch(&mut Render { f })
	}
}

impl From<i64> for FieldValue {
	fn from(v: i64) -> Self {
		FieldValue::Int(v)
	}
}

impl From<u64> for FieldValue {
	fn from(v: u64) -> Self {
		FieldValue::Uint(v)
	}
}

impl From<bool> for FieldValue {
	fn from(v: bool) -> Self {
		FieldValue::Bool(v)
	}
}

impl From<String> for FieldValue {
	fn from(v: String) -> Self {
		FieldValue::Text(v)
	}
}

impl From<&str> for FieldValue {
	fn from(v: &str) -> Self {
		FieldValue::Text(v.to_string())
	}
}

/// The declared type of an entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
	/// Signed integer type.
	Int,
	/// Unsigned integer type.
	Uint,
	/// Boolean type.
	Bool,
	/// Text type.
	Text,
}

impl FieldType {
	/// Returns the lowercase name used in messages and descriptions.
	pub const fn name(self) -> &'static str {
		match self {
			FieldType::Int => "int",
			FieldType::Uint => "uint",
			FieldType::Bool => "bool",
			FieldType::Text => "text",
		}
	}
}

impl fmt::Display for FieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Text that could not be parsed as a value of the requested kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {ty} value {input:?}: {reason}")]
pub struct ParseValueError {
	pub ty: FieldType,
	pub input: String,
	pub reason: String,
}

// Seal the FieldKind trait to prevent external implementations.
mod sealed {
	pub trait Sealed {}
	impl Sealed for i64 {}
	impl Sealed for u64 {}
	impl Sealed for bool {}
	impl Sealed for String {}
}

/// Rust types that may back an entity field.
///
/// The set is closed: deriving `Entity` for a struct with a field of any other
/// type fails to compile.
///
/// ```compile_fail
/// use polyslot::Entity;
///
/// #[derive(Entity)]
/// struct Reading {
///     celsius: f64,
/// }
/// ```
///
/// Skipped fields may hold anything:
///
/// ```
/// use polyslot::Entity;
///
/// #[derive(Entity)]
/// struct Reading {
///     sensor: String,
///     #[field(skip)]
///     celsius: f64,
/// }
///
/// assert_eq!(Reading::field_count(), 1);
/// let _ = Reading { sensor: "t1".into(), celsius: 20.5 }.celsius;
/// ```
pub trait FieldKind: sealed::Sealed + Sized {
	/// The [`FieldType`] corresponding to this Rust type.
	const TYPE: FieldType;

	/// Boxes a copy of the field's current value.
	fn to_value(&self) -> FieldValue;

	/// Extracts the value, returning `None` if the kind doesn't match.
	fn from_value(value: FieldValue) -> Option<Self>;
}

impl FieldKind for i64 {
	const TYPE: FieldType = FieldType::Int;

	fn to_value(&self) -> FieldValue {
		FieldValue::Int(*self)
	}

	fn from_value(value: FieldValue) -> Option<Self> {
		value.as_int()
	}
}

impl FieldKind for u64 {
	const TYPE: FieldType = FieldType::Uint;

	fn to_value(&self) -> FieldValue {
		FieldValue::Uint(*self)
	}

	fn from_value(value: FieldValue) -> Option<Self> {
		value.as_uint()
	}
}

impl FieldKind for bool {
	const TYPE: FieldType = FieldType::Bool;

	fn to_value(&self) -> FieldValue {
		FieldValue::Bool(*self)
	}

	fn from_value(value: FieldValue) -> Option<Self> {
		value.as_bool()
	}
}

impl FieldKind for String {
	const TYPE: FieldType = FieldType::Text;

	fn to_value(&self) -> FieldValue {
		FieldValue::Text(self.clone())
	}

	fn from_value(value: FieldValue) -> Option<Self> {
		match value {
			FieldValue::Text(v) => Some(v),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests;
