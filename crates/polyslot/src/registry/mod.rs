//! Heterogeneous indexed registry.
//!
//! [`IndexedRegistry`] is a view over N live objects of N distinct entity
//! types, addressed by runtime integers: "field `f` of object `i`".
//!
//! Descriptors must be indexed `0..field_count` in order. A registry over an
//! entity whose descriptor has gaps or reordered indices does not build:
//!
//! ```compile_fail
//! use polyslot::{Entity, FieldDescriptor, FieldType, FieldValue, IndexedRegistry};
//!
//! struct P { x: i64 }
//!
//! impl Entity for P {
//!     const NAME: &'static str = "P";
//!     const FIELDS: &'static [FieldDescriptor<Self>] = &[FieldDescriptor::new(
//!         1,
//!         "x",
//!         FieldType::Int,
//!         |p| FieldValue::Int(p.x),
//!         |p, value| if let FieldValue::Int(x) = value { p.x = x },
//!     )];
//! }
//!
//! let mut p = P { x: 1 };
//! let _registry = IndexedRegistry::new((&mut p,));
//! ```
//!
//! The same descriptor indexed from 0 is accepted:
//!
//! ```
//! use polyslot::{Entity, FieldDescriptor, FieldType, FieldValue, IndexedRegistry};
//!
//! struct P { x: i64 }
//!
//! impl Entity for P {
//!     const NAME: &'static str = "P";
//!     const FIELDS: &'static [FieldDescriptor<Self>] = &[FieldDescriptor::new(
//!         0,
//!         "x",
//!         FieldType::Int,
//!         |p| FieldValue::Int(p.x),
//!         |p, value| if let FieldValue::Int(x) = value { p.x = x },
//!     )];
//! }
//!
//! let mut p = P { x: 1 };
//! let registry = IndexedRegistry::new((&mut p,));
//! assert_eq!(registry.get_field(0, 0).unwrap(), FieldValue::Int(1));
//! ```
//!
//! A registry cannot outlive the objects it borrows:
//!
//! ```compile_fail
//! use polyslot::{Entity, IndexedRegistry};
//!
//! #[derive(Entity)]
//! struct P { x: i64 }
//!
//! let registry = {
//!     let mut p = P { x: 1 };
//!     IndexedRegistry::new((&mut p,))
//! };
//! registry.field_count(0).unwrap();
//! ```

mod slots;

use std::fmt;
use std::io;

pub use slots::{SlotList, SlotVisitor, SlotVisitorMut};

use crate::config::{RegistryConfig, UnresolvedPolicy};
use crate::entity::Entity;
use crate::error::{FieldError, RegistryError};
use crate::value::{FieldType, FieldValue};

/// A non-owning, fixed-size view over entities of distinct types.
///
/// Assembled from a tuple of exclusive references:
///
/// ```
/// use polyslot::{Entity, FieldValue, IndexedRegistry};
///
/// #[derive(Entity)]
/// struct R { x: i64, y: i64 }
///
/// #[derive(Entity)]
/// struct S { a: i64, b: i64, c: i64 }
///
/// let mut r = R { x: 1, y: 2 };
/// let mut s = S { a: 3, b: 4, c: 5 };
/// let mut registry = IndexedRegistry::new((&mut r, &mut s));
///
/// assert_eq!(registry.field_count(1).unwrap(), 3);
/// registry.set_field(1, 2, 555i64).unwrap();
/// assert_eq!(registry.get_field(1, 2).unwrap(), FieldValue::Int(555));
/// drop(registry);
/// assert_eq!(s.c, 555);
/// ```
///
/// # Borrowing
///
/// The registry holds `&'a mut` borrows and never owns the objects. The
/// borrow checker rejects a registry that outlives any referenced object, and
/// rejects every other access to a referenced object, concurrent mutation
/// included, while the registry is alive. The registry adds no locking; it is
/// `Send` or `Sync` exactly when its entity types are.
///
/// # Unresolved indices
///
/// An object index matching no slot is handled by the configured
/// [`UnresolvedPolicy`], identically for every operation.
pub struct IndexedRegistry<S> {
	slots: S,
	config: RegistryConfig,
}

impl<S: SlotList> IndexedRegistry<S> {
	/// Assembles a registry with the default (silent) policy.
	pub fn new(slots: S) -> Self {
		Self::with_config(slots, RegistryConfig::default())
	}

	/// Assembles a registry with an explicit config.
	///
	/// Fails to compile if any slot's descriptor is not indexed
	/// `0..field_count` in order.
	pub fn with_config(slots: S, config: RegistryConfig) -> Self {
		const {
			assert!(
				S::CONTIGUOUS,
				"entity field descriptors must be indexed 0..field_count in declaration order"
			)
		};
		tracing::debug!(slots = S::LEN, policy = ?config.unresolved, "assembled indexed registry");
		Self { slots, config }
	}

	/// Number of slots.
	pub const fn len(&self) -> usize {
		S::LEN
	}

	pub const fn is_empty(&self) -> bool {
		S::LEN == 0
	}

	pub fn config(&self) -> RegistryConfig {
		self.config
	}

	/// Releases the borrowed slots.
	pub fn into_slots(self) -> S {
		self.slots
	}

	/// Declared field count of object `object`.
	pub fn field_count(&self, object: usize) -> Result<usize, RegistryError> {
		Ok(self.resolve("field_count", object, FieldCount)?.unwrap_or(0))
	}

	/// Live row count of object `object`; 0 for entities without rows.
	pub fn row_count(&self, object: usize) -> Result<usize, RegistryError> {
		Ok(self.resolve("row_count", object, RowCount)?.unwrap_or(0))
	}

	/// Current value of field `field` of object `object`.
	pub fn get_field(&self, object: usize, field: usize) -> Result<FieldValue, RegistryError> {
		match self.resolve("get_field", object, GetField(field))? {
			Some(value) => Ok(value?),
			None => Ok(FieldValue::default()),
		}
	}

	/// Writes `value` to field `field` of object `object`.
	pub fn set_field(
		&mut self,
		object: usize,
		field: usize,
		value: impl Into<FieldValue>,
	) -> Result<(), RegistryError> {
		let set = SetField { field, value: value.into() };
		match self.resolve_mut("set_field", object, set)? {
			Some(result) => Ok(result?),
			None => Ok(()),
		}
	}

	/// Writes the current value of field `field` of object `object` to `out`
	/// as text, followed by a newline.
	pub fn print_field<W: io::Write>(
		&self,
		object: usize,
		field: usize,
		out: &mut W,
	) -> Result<(), RegistryError> {
		if let Some(value) = self.resolve("print_field", object, GetField(field))? {
			writeln!(out, "{}", value?)?;
		}
		Ok(())
	}

	/// Entity name of object `object`; `None` for an absorbed unresolved index.
	pub fn entity_name(&self, object: usize) -> Result<Option<&'static str>, RegistryError> {
		self.resolve("entity_name", object, EntityName)
	}

	/// Declared type of field `field` of object `object`, without reading it.
	///
	/// `None` for an absorbed unresolved index.
	pub fn field_type(
		&self,
		object: usize,
		field: usize,
	) -> Result<Option<FieldType>, RegistryError> {
		match self.resolve("field_type", object, DeclaredType(field))? {
			Some(ty) => Ok(Some(ty?)),
			None => Ok(None),
		}
	}

	/// Summaries of every slot, in slot order.
	pub fn describe(&self) -> Vec<SlotSummary> {
		(0..S::LEN).filter_map(|index| self.slots.visit(index, Describe)).collect()
	}

	fn resolve<V: SlotVisitor>(
		&self,
		op: &'static str,
		object: usize,
		visitor: V,
	) -> Result<Option<V::Output>, RegistryError> {
		match self.slots.visit(object, Traced { op, inner: visitor }) {
			Some(output) => Ok(Some(output)),
			None => self.unresolved(op, object).map(|()| None),
		}
	}

	fn resolve_mut<V: SlotVisitorMut>(
		&mut self,
		op: &'static str,
		object: usize,
		visitor: V,
	) -> Result<Option<V::Output>, RegistryError> {
		match self.slots.visit_mut(object, Traced { op, inner: visitor }) {
			Some(output) => Ok(Some(output)),
			None => self.unresolved(op, object).map(|()| None),
		}
	}

	fn unresolved(&self, op: &'static str, object: usize) -> Result<(), RegistryError> {
		match self.config.unresolved {
			UnresolvedPolicy::Silent => {
				tracing::debug!(op, object, slots = S::LEN, "unresolved object index absorbed");
				Ok(())
			}
			UnresolvedPolicy::Report => Err(RegistryError::UnresolvedIndex {
				index: object,
				slots: S::LEN,
			}),
		}
	}
}

impl<S: SlotList> fmt::Debug for IndexedRegistry<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("IndexedRegistry")
			.field("slots", &self.describe())
			.field("config", &self.config)
			.finish()
	}
}

/// One field as listed by [`IndexedRegistry::describe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSummary {
	pub index: usize,
	pub name: &'static str,
	pub ty: FieldType,
}

/// One slot as listed by [`IndexedRegistry::describe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSummary {
	pub index: usize,
	pub entity: &'static str,
	pub fields: Vec<FieldSummary>,
	/// Live row count, for container entities.
	pub rows: Option<usize>,
}

impl fmt::Display for SlotSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {} (", self.index, self.entity)?;
		for (i, field) in self.fields.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}: {}", field.name, field.ty)?;
		}
		f.write_str(")")?;
		if let Some(rows) = self.rows {
			write!(f, " rows={rows}")?;
		}
		Ok(())
	}
}

/// Logs the resolved slot before running the wrapped operation.
struct Traced<V> {
	op: &'static str,
	inner: V,
}

impl<V: SlotVisitor> SlotVisitor for Traced<V> {
	type Output = V::Output;

	fn visit<E: Entity>(self, position: usize, entity: &E) -> V::Output {
		tracing::trace!(op = self.op, object = position, entity = E::NAME, "resolved slot");
		self.inner.visit(position, entity)
	}
}

impl<V: SlotVisitorMut> SlotVisitorMut for Traced<V> {
	type Output = V::Output;

	fn visit<E: Entity>(self, position: usize, entity: &mut E) -> V::Output {
		tracing::trace!(op = self.op, object = position, entity = E::NAME, "resolved slot");
		self.inner.visit(position, entity)
	}
}

struct FieldCount;

impl SlotVisitor for FieldCount {
	type Output = usize;

	fn visit<E: Entity>(self, _position: usize, _entity: &E) -> usize {
		E::field_count()
	}
}

struct RowCount;

impl SlotVisitor for RowCount {
	type Output = usize;

	fn visit<E: Entity>(self, _position: usize, entity: &E) -> usize {
		entity.row_count().unwrap_or(0)
	}
}

struct GetField(usize);

impl SlotVisitor for GetField {
	type Output = Result<FieldValue, FieldError>;

	fn visit<E: Entity>(self, _position: usize, entity: &E) -> Self::Output {
		entity.get_field(self.0)
	}
}

struct SetField {
	field: usize,
	value: FieldValue,
}

impl SlotVisitorMut for SetField {
	type Output = Result<(), FieldError>;

	fn visit<E: Entity>(self, _position: usize, entity: &mut E) -> Self::Output {
		entity.set_field(self.field, self.value)
	}
}

struct EntityName;

impl SlotVisitor for EntityName {
	type Output = &'static str;

	fn visit<E: Entity>(self, _position: usize, _entity: &E) -> &'static str {
		E::NAME
	}
}

struct DeclaredType(usize);

impl SlotVisitor for DeclaredType {
	type Output = Result<FieldType, FieldError>;

	fn visit<E: Entity>(self, _position: usize, _entity: &E) -> Self::Output {
		E::field(self.0).map(|field| field.ty)
	}
}

struct Describe;

impl SlotVisitor for Describe {
	type Output = SlotSummary;

	fn visit<E: Entity>(self, position: usize, entity: &E) -> SlotSummary {
		SlotSummary {
			index: position,
			entity: E::NAME,
			fields: E::FIELDS
				.iter()
				.map(|field| FieldSummary { index: field.index, name: field.name, ty: field.ty })
				.collect(),
			rows: entity.row_count(),
		}
	}
}
