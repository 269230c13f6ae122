//! In-memory row container standing in for contract table storage.

use std::collections::BTreeMap;

use polyslot::Entity;

/// Rows keyed by primary key, with the table's own scalar fields.
#[derive(Debug, Entity)]
#[entity(name = "table", rows = scan_rows)]
pub struct Table<R: 'static> {
	pub code: String,
	pub scope: u64,
	#[field(skip)]
	rows: BTreeMap<u64, R>,
}

impl<R: 'static> Table<R> {
	pub fn new(code: impl Into<String>, scope: u64) -> Self {
		Self { code: code.into(), scope, rows: BTreeMap::new() }
	}

	/// Inserts a row, returning false if `key` is taken.
	pub fn emplace(&mut self, key: u64, row: R) -> bool {
		if self.rows.contains_key(&key) {
			return false;
		}
		self.rows.insert(key, row);
		true
	}

	pub fn erase(&mut self, key: u64) -> Option<R> {
		self.rows.remove(&key)
	}

	/// Next unused key after the current highest one.
	pub fn available_primary_key(&self) -> u64 {
		self.rows.keys().next_back().map_or(0, |key| key + 1)
	}

	/// Counts rows by walking the table.
	fn scan_rows(&self) -> usize {
		let mut count = 0;
		for _ in self.rows.values() {
			count += 1;
		}
		count
	}
}
