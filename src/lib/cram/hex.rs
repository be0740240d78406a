use std::sync::LazyLock;

use regex::Regex;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s,]+").unwrap());
static BYTE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^(?:(?:0x|\\x)?[0-9a-f]{2})+$").unwrap());
static BYTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(?:0x|\\x)?([0-9a-f]{2})").unwrap());

/// Parses a hex byte string such as `"00 22 0x44,\x66"` or `"00224466"`.
pub(crate) fn parse_hex_bytes(s: &str) -> Result<Vec<u8>, String> {
	let mut bytes = Vec::new();

	for token in SEPARATORS.split(s.trim()).filter(|t| !t.is_empty()) {
		if !BYTE_RUN.is_match(token) {
			return Err(format!("\"{token}\" is not a hexadecimal byte sequence"));
		}

		for cap in BYTE.captures_iter(token) {
			let b = u8::from_str_radix(&cap[1], 16).map_err(|e| e.to_string())?;
			bytes.push(b);
		}
	}

	Ok(bytes)
}
