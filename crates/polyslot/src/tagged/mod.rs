//! Closed-set visitors over tagged values.
//!
//! A tagged value is an enum whose variants each carry at most one unnamed
//! field. `#[derive(Tagged)]` implements [`Tagged`] for it and generates a
//! visitor trait (`<Enum>Visitor` unless renamed with
//! `#[tagged(visitor = Name)]`) with:
//!
//! * one `visit_<variant>` method per alternative, defaulting to `fallback`
//! * exactly one required `fallback` method, which receives the alternative's
//!   name
//!
//! plus an inherent `dispatch` method that invokes exactly one of them.
//! Overriding a method for an alternative outside the closed set is a compile
//! error, so a visitor cannot reference an unknown alternative.
//!
//! ```
//! use polyslot::Tagged;
//!
//! #[derive(Tagged)]
//! enum Sample {
//!     Int(i64),
//!     Text(String),
//!     Empty,
//! }
//!
//! struct Describe;
//!
//! impl SampleVisitor for Describe {
//!     type Output = String;
//!
//!     fn fallback(&mut self, _alternative: &'static str) -> String {
//!         "unknown type".to_string()
//!     }
//!
//!     fn visit_int(&mut self, value: &i64) -> String {
//!         format!("int {value}")
//!     }
//! }
//!
//! assert_eq!(Sample::Int(42).dispatch(&mut Describe), "int 42");
//! assert_eq!(Sample::Text("x".into()).dispatch(&mut Describe), "unknown type");
//! assert_eq!(Sample::Empty.alternative(), "Empty");
//! ```
//!
//! A handler for an alternative outside the set does not compile:
//!
//! ```compile_fail
//! use polyslot::Tagged;
//!
//! #[derive(Tagged)]
//! enum One {
//!     A(i64),
//! }
//!
//! struct Handler;
//!
//! impl OneVisitor for Handler {
//!     type Output = ();
//!
//!     fn fallback(&mut self, _alternative: &'static str) {}
//!
//!     fn visit_b(&mut self, _value: &i64) {}
//! }
//! ```
//!
//! Neither do two alternatives whose handler names collide:
//!
//! ```compile_fail
//! use polyslot::Tagged;
//!
//! #[derive(Tagged)]
//! enum Endpoint {
//!     HTTPServer(i64),
//!     HttpServer(u64),
//! }
//! ```

/// A value holding exactly one of a statically enumerated set of alternatives.
pub trait Tagged {
	/// Alternative names in declaration order.
	const ALTERNATIVES: &'static [&'static str];

	/// Index of the active alternative in [`Self::ALTERNATIVES`].
	fn tag(&self) -> usize;

	/// Name of the active alternative.
	fn alternative(&self) -> &'static str {
		Self::ALTERNATIVES[self.tag()]
	}
}

#[cfg(test)]
mod tests;
