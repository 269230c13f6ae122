//! Scripted runs behind each subcommand.
//!
//! Every run builds its own objects, borrows them into a registry with the
//! caller's config and writes its report to `out`.

use std::io::Write;

use anyhow::{Context, Result};
use polyslot::{FieldValue, IndexedRegistry, RegistryConfig};

use crate::model::{AStruct, BStruct, CStruct, R, S, Sample, SampleHandler, Transfer, User};
use crate::table::Table;

/// Two-record field walk: print, get, set, print again.
pub fn poc(config: RegistryConfig, out: &mut impl Write) -> Result<()> {
	let mut r = R { x: 1, y: 2 };
	let mut s = S { a: 3, b: 4, c: 5 };
	let mut registry = IndexedRegistry::with_config((&mut r, &mut s), config);

	registry.print_field(0, 0, out)?;
	registry.print_field(1, 1, out)?;
	writeln!(out, "Result 1: {}", registry.get_field(0, 1)?)?;
	writeln!(out, "Result 2: {}", registry.get_field(1, 0)?)?;
	registry.set_field(1, 2, 555i64)?;
	registry.print_field(1, 2, out)?;
	Ok(())
}

/// Writes one line per alternative; `CStruct` has no handler.
struct Printer<'w, W> {
	out: &'w mut W,
}

impl<W: Write> SampleHandler for Printer<'_, W> {
	type Output = std::io::Result<()>;

	fn fallback(&mut self, alternative: &'static str) -> Self::Output {
		tracing::debug!(alternative, "no handler, using fallback");
		writeln!(self.out, "unknown type")
	}

	fn visit_int(&mut self, value: &i64) -> Self::Output {
		writeln!(self.out, "int {value}")
	}

	fn visit_double(&mut self, value: &f64) -> Self::Output {
		writeln!(self.out, "double {value}")
	}

	fn visit_text(&mut self, value: &String) -> Self::Output {
		writeln!(self.out, "string {value}")
	}

	fn visit_a_struct(&mut self, value: &AStruct) -> Self::Output {
		writeln!(self.out, "AStruct {}", value.i)
	}

	fn visit_b_struct(&mut self, value: &BStruct) -> Self::Output {
		writeln!(self.out, "BStruct {}", value.b)
	}
}

/// Dispatches each sample alternative to its handler.
#[allow(clippy::approx_constant)]
pub fn variants(out: &mut impl Write) -> Result<()> {
	let samples = [
		Sample::Int(42),
		Sample::Double(3.14),
		Sample::Text("Hello".to_string()),
		Sample::AStruct(AStruct { i: 500 }),
		Sample::BStruct(BStruct { b: true }),
		Sample::CStruct(CStruct),
	];
	let mut printer = Printer { out };
	for sample in &samples {
		sample.dispatch(&mut printer)?;
	}
	Ok(())
}

/// Seeded users and transfers tables.
pub fn ledger() -> (Table<User>, Table<Transfer>) {
	let mut users = Table::new("users", 0);
	for (username, balance) in [("alice", 100), ("bob", 50), ("carol", 25)] {
		let key = users.available_primary_key();
		users.emplace(key, User { username: username.to_string(), balance });
	}

	let mut transfers = Table::new("transfers", 0);
	for (sender, receiver, amount) in [("alice", "bob", 10), ("bob", "carol", 5)] {
		let id = transfers.available_primary_key();
		transfers.emplace(
			id,
			Transfer { id, sender: sender.to_string(), receiver: receiver.to_string(), amount },
		);
	}
	(users, transfers)
}

/// Row-schema field counts, then live row counts per table.
///
/// `drop_user` erases that user row first, showing counts are taken live.
pub fn tables(config: RegistryConfig, drop_user: Option<u64>, out: &mut impl Write) -> Result<()> {
	let mut user = User::default();
	let mut transfer = Transfer::default();
	let schemas = IndexedRegistry::with_config((&mut user, &mut transfer), config);
	for index in 0..schemas.len() {
		writeln!(out, "Field count for tableIndex {index}: {}", schemas.field_count(index)?)?;
	}

	let (mut users, mut transfers) = ledger();
	if let Some(key) = drop_user
		&& users.erase(key).is_none()
	{
		tracing::warn!(key, "no user row to drop");
	}
	let tables = IndexedRegistry::with_config((&mut users, &mut transfers), config);
	for index in 0..tables.len() {
		writeln!(out, "Total element count for tableIndex {index}: {}", tables.row_count(index)?)?;
	}
	Ok(())
}

/// Objects behind `describe`, `get`, `set` and `print`.
#[derive(Debug)]
pub struct Demo {
	r: R,
	s: S,
	users: Table<User>,
	transfers: Table<Transfer>,
}

type DemoSlots<'a> = (&'a mut R, &'a mut S, &'a mut Table<User>, &'a mut Table<Transfer>);

impl Demo {
	pub fn new() -> Self {
		let (users, transfers) = ledger();
		Self { r: R { x: 1, y: 2 }, s: S { a: 3, b: 4, c: 5 }, users, transfers }
	}

	pub fn registry(&mut self, config: RegistryConfig) -> IndexedRegistry<DemoSlots<'_>> {
		IndexedRegistry::with_config(
			(&mut self.r, &mut self.s, &mut self.users, &mut self.transfers),
			config,
		)
	}
}

impl Default for Demo {
	fn default() -> Self {
		Self::new()
	}
}

/// Lists every slot of the demo registry.
pub fn describe(config: RegistryConfig, out: &mut impl Write) -> Result<()> {
	let mut demo = Demo::new();
	for summary in demo.registry(config).describe() {
		writeln!(out, "{summary}")?;
	}
	Ok(())
}

/// Writes a field value along with its kind.
pub fn get(
	config: RegistryConfig,
	object: usize,
	field: usize,
	out: &mut impl Write,
) -> Result<()> {
	let mut demo = Demo::new();
	let value = demo
		.registry(config)
		.get_field(object, field)
		.with_context(|| format!("reading field {field} of object {object}"))?;
	writeln!(out, "{value} ({})", value.type_name())?;
	Ok(())
}

/// Prints a field as text.
pub fn print(
	config: RegistryConfig,
	object: usize,
	field: usize,
	out: &mut impl Write,
) -> Result<()> {
	let mut demo = Demo::new();
	demo.registry(config)
		.print_field(object, field, out)
		.with_context(|| format!("printing field {field} of object {object}"))?;
	Ok(())
}

/// Parses `raw` as the field's declared kind, writes it, then prints the field.
///
/// Text that names no known field is passed through unparsed so the
/// registry decides how to reject it.
pub fn set(
	config: RegistryConfig,
	object: usize,
	field: usize,
	raw: &str,
	out: &mut impl Write,
) -> Result<()> {
	let mut demo = Demo::new();
	let mut registry = demo.registry(config);
	let value = match registry.field_type(object, field) {
		Ok(Some(ty)) => FieldValue::parse(raw, ty)?,
		_ => FieldValue::Text(raw.to_string()),
	};
	registry
		.set_field(object, field, value)
		.with_context(|| format!("writing field {field} of object {object}"))?;
	registry.print_field(object, field, out)?;
	Ok(())
}

#[cfg(test)]
mod tests;
