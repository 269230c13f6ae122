//! Text parsing for field values.
//!
//! Shared by callers that accept values from a command line or a config file
//! and need them in the kind a field declares.

/// Parse a boolean value from common string representations.
pub fn parse_bool(value: &str) -> Result<bool, String> {
	match value.to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" => Ok(false),
		_ => Err(format!("expected true/false, yes/no, on/off, 1/0, got '{value}'")),
	}
}

/// Parse a signed integer value.
pub fn parse_int(value: &str) -> Result<i64, String> {
	value
		.trim()
		.parse::<i64>()
		.map_err(|err| format!("not a signed integer ({err})"))
}

/// Parse an unsigned integer value.
pub fn parse_uint(value: &str) -> Result<u64, String> {
	value
		.trim()
		.parse::<u64>()
		.map_err(|err| format!("not an unsigned integer ({err})"))
}
