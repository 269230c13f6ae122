//! Error types for entity access and registry resolution.

use crate::value::FieldType;

/// Field-level access errors, reported by an entity's descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	/// Field index outside `[0, field_count)`.
	#[error("field index {index} out of range for {entity} ({count} fields)")]
	OutOfRange {
		entity: &'static str,
		index: usize,
		count: usize,
	},
	/// Value kind disagrees with the field's declared type.
	#[error("type mismatch for {entity}.{field}: expected {expected}, got {got}")]
	TypeMismatch {
		entity: &'static str,
		field: &'static str,
		expected: FieldType,
		got: FieldType,
	},
}

/// Errors returned by [`IndexedRegistry`](crate::IndexedRegistry) operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
	/// Object index matching no slot, under
	/// [`UnresolvedPolicy::Report`](crate::UnresolvedPolicy::Report).
	#[error("object index {index} matches no slot ({slots} slots)")]
	UnresolvedIndex { index: usize, slots: usize },

	#[error(transparent)]
	Field(#[from] FieldError),

	#[error("failed to write field: {0}")]
	Io(#[from] std::io::Error),
}

impl RegistryError {
	/// Returns the field-level error, if this is one.
	pub fn as_field(&self) -> Option<&FieldError> {
		match self {
			RegistryError::Field(err) => Some(err),
			_ => None,
		}
	}
}
