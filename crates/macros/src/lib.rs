//! Procedural macros for polyslot.
//!
//! Provides derive macros:
//! * `#[derive(Entity)]` - static field descriptors for a struct
//! * `#[derive(Tagged)]` - closed-set visitor trait and dispatch for an enum

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod case;
/// Entity derive macro implementation.
mod entity;
/// Tagged derive macro implementation.
mod tagged;

/// Derives `polyslot::Entity` for a struct.
///
/// Every field not marked `#[field(skip)]` becomes a descriptor, indexed in
/// declaration order starting at 0.
///
/// ```ignore
/// #[derive(Entity)]
/// #[entity(name = "users", rows = scan_rows)]
/// pub struct UsersTable {
///     pub code: String,
///     #[field(rename = "scope")]
///     pub scope_id: u64,
///     #[field(skip)]
///     rows: BTreeMap<u64, User>,
/// }
/// ```
///
/// # Attributes
///
/// - `#[entity(name = "...")]` - Optional: entity name (default: type name)
/// - `#[entity(rows = method)]` - Optional: `fn(&self) -> usize` row counter
/// - `#[field(skip)]` - Field is not addressable
/// - `#[field(rename = "...")]` - Field name in descriptors
///
/// # Supported Field Types
///
/// * `i64` → `FieldType::Int`
/// * `u64` → `FieldType::Uint`
/// * `bool` → `FieldType::Bool`
/// * `String` → `FieldType::Text`
///
/// Any other addressable field type fails to compile.
#[proc_macro_derive(Entity, attributes(entity, field))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	entity::derive_entity(&input).into()
}

/// Derives `polyslot::Tagged` and a closed-set visitor for an enum.
///
/// Generates:
/// * `Tagged` impl (`ALTERNATIVES`, `tag`)
/// * `<Enum>Visitor` trait with a required `fallback` and one defaulted
///   `visit_<variant>` method per alternative
/// * inherent `dispatch` method running exactly one visitor method
///
/// ```ignore
/// #[derive(Tagged)]
/// #[tagged(visitor = ShapeHandler)]
/// pub enum Shape {
///     Circle(f64),
///     Square(Square),
///     Empty,
/// }
/// ```
///
/// Alternatives carry one unnamed field or none.
#[proc_macro_derive(Tagged, attributes(tagged))]
pub fn derive_tagged(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	tagged::derive_tagged(&input).into()
}
