//! Identifier case conversion.

/// Converts a PascalCase variant name to snake_case.
///
/// Acronym runs stay together: `HTTPServer` becomes `http_server`.
pub(crate) fn to_snake_case(s: &str) -> String {
	let chars: Vec<char> = s.chars().collect();
	let mut result = String::with_capacity(s.len() + 4);
	for (i, &c) in chars.iter().enumerate() {
		if c.is_uppercase() && i > 0 {
			let prev = chars[i - 1];
			let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
			if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower) {
				result.push('_');
			}
		}
		result.extend(c.to_lowercase());
	}
	result
}
