//! Entity descriptors.
//!
//! An [`Entity`] is a participating type whose fields are addressable by a
//! stable zero-based index. The descriptor is a static slice of
//! [`FieldDescriptor`]s assembled once per type, usually by
//! `#[derive(Entity)]`:
//!
//! ```
//! use polyslot::{Entity, FieldValue};
//!
//! #[derive(Entity)]
//! struct Point {
//!     x: i64,
//!     y: i64,
//! }
//!
//! let mut p = Point { x: 1, y: 2 };
//! assert_eq!(Point::field_count(), 2);
//! assert_eq!(p.get_field(1), Ok(FieldValue::Int(2)));
//! p.set_field(0, FieldValue::Int(9)).unwrap();
//! assert_eq!(p.x, 9);
//! ```
//!
//! Container entities (records holding rows) also report a row count, which
//! is computed on every call and never cached.

use std::fmt;

use crate::error::FieldError;
use crate::value::{FieldType, FieldValue};

/// Reads a field's current value.
pub type FieldGetter<E> = fn(&E) -> FieldValue;

/// Writes a value already checked against the field's declared type.
pub type FieldSetter<E> = fn(&mut E, FieldValue);

/// Describes one field of entity type `E`.
pub struct FieldDescriptor<E> {
	/// Position of the field within its entity.
	pub index: usize,
	pub name: &'static str,
	pub ty: FieldType,
	pub get: FieldGetter<E>,
	pub set: FieldSetter<E>,
}

impl<E> FieldDescriptor<E> {
	pub const fn new(
		index: usize,
		name: &'static str,
		ty: FieldType,
		get: FieldGetter<E>,
		set: FieldSetter<E>,
	) -> Self {
		Self { index, name, ty, get, set }
	}
}

impl<E> Clone for FieldDescriptor<E> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<E> Copy for FieldDescriptor<E> {}

impl<E> fmt::Debug for FieldDescriptor<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldDescriptor")
			.field("index", &self.index)
			.field("name", &self.name)
			.field("ty", &self.ty)
			.finish()
	}
}

/// Returns true if every descriptor's index equals its position.
///
/// Evaluated at compile time when an entity is placed in a registry.
pub const fn is_contiguous<E>(fields: &[FieldDescriptor<E>]) -> bool {
	let mut i = 0;
	while i < fields.len() {
		if fields[i].index != i {
			return false;
		}
		i += 1;
	}
	true
}

/// A participating type with a fixed, ordered field list.
///
/// The trait is the entity's descriptor: `NAME` and `FIELDS` are assembled
/// once at compile time, and the provided methods perform range and type
/// checks on top of them.
pub trait Entity: Sized + 'static {
	/// Name used in diagnostics and descriptions.
	const NAME: &'static str;

	/// Field descriptors, index `i` at position `i`.
	const FIELDS: &'static [FieldDescriptor<Self>];

	/// Number of live rows, for entities that contain records.
	///
	/// Implementations count by traversal; `None` means the entity has no
	/// row concept.
	fn row_count(&self) -> Option<usize> {
		None
	}

	/// Number of declared fields (not rows).
	fn field_count() -> usize {
		Self::FIELDS.len()
	}

	/// Returns the descriptor for `index`.
	fn field(index: usize) -> Result<&'static FieldDescriptor<Self>, FieldError> {
		Self::FIELDS.get(index).ok_or(FieldError::OutOfRange {
			entity: Self::NAME,
			index,
			count: Self::FIELDS.len(),
		})
	}

	/// Returns the descriptor named `name`.
	fn field_by_name(name: &str) -> Option<&'static FieldDescriptor<Self>> {
		Self::FIELDS.iter().find(|field| field.name == name)
	}

	/// Reads the current value of field `index`.
	fn get_field(&self, index: usize) -> Result<FieldValue, FieldError> {
		let field = Self::field(index)?;
		Ok((field.get)(self))
	}

	/// Writes `value` through to field `index`.
	fn set_field(&mut self, index: usize, value: FieldValue) -> Result<(), FieldError> {
		let field = Self::field(index)?;
		if !value.matches_type(field.ty) {
			return Err(FieldError::TypeMismatch {
				entity: Self::NAME,
				field: field.name,
				expected: field.ty,
				got: value.field_type(),
			});
		}
		(field.set)(self, value);
		Ok(())
	}
}

#[cfg(test)]
mod tests;
