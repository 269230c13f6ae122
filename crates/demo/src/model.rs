//! Entities and tagged values the runs operate on.

use polyslot::{Entity, Tagged};

#[derive(Debug, Clone, Default, PartialEq, Entity)]
pub struct R {
	pub x: i64,
	pub y: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
pub struct S {
	pub a: i64,
	pub b: i64,
	pub c: i64,
}

/// Row of the users table.
#[derive(Debug, Clone, Default, PartialEq, Entity)]
#[entity(name = "user")]
pub struct User {
	pub username: String,
	pub balance: u64,
}

/// Row of the transfers table.
#[derive(Debug, Clone, Default, PartialEq, Entity)]
#[entity(name = "transfer")]
pub struct Transfer {
	pub id: u64,
	pub sender: String,
	pub receiver: String,
	pub amount: u64,
}

#[derive(Debug)]
pub struct AStruct {
	pub i: i64,
}

#[derive(Debug)]
pub struct BStruct {
	pub b: bool,
}

#[derive(Debug)]
pub struct CStruct;

/// Alternatives walked by the `variants` run.
#[derive(Debug, Tagged)]
#[tagged(visitor = SampleHandler)]
pub enum Sample {
	Int(i64),
	Double(f64),
	Text(String),
	AStruct(AStruct),
	BStruct(BStruct),
	CStruct(CStruct),
}
