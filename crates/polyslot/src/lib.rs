//! Polymorphic, index-addressable behavior over closed sets of types, without
//! virtual dispatch.
//!
//! Two facilities share one idiom: a runtime discriminator is resolved against
//! a fixed list of compile-time types by an unrolled `match`, and the matching
//! branch runs code monomorphized for that type.
//!
//! - [`tagged`] - closed-set visitors over tagged values (`#[derive(Tagged)]`)
//! - [`registry`] - [`IndexedRegistry`], a view over entities of distinct
//!   types addressed by object and field index
//!
//! Supporting modules:
//!
//! - [`entity`] - [`Entity`] descriptors (`#[derive(Entity)]`)
//! - [`value`] - [`FieldValue`], the closed set of field value kinds
//! - [`config`] - [`RegistryConfig`] and its TOML loader
//! - [`error`] - error types

// Lets derive output name `::polyslot` from inside this crate.
extern crate self as polyslot;

pub mod config;
pub mod entity;
pub mod error;
pub mod registry;
pub mod tagged;
pub mod value;

pub use config::{ConfigError, RegistryConfig, UnresolvedPolicy};
pub use entity::{Entity, FieldDescriptor, FieldGetter, FieldSetter};
pub use error::{FieldError, RegistryError};
pub use polyslot_macros::{Entity, Tagged};
pub use registry::{
	FieldSummary, IndexedRegistry, SlotList, SlotSummary, SlotVisitor, SlotVisitorMut,
};
pub use tagged::Tagged;
pub use value::{FieldKind, FieldType, FieldValue, FieldValueVisitor, ParseValueError};
