use crate::cram::dump::{PaletteCatalog, PaletteDump};

/// Reference CRAM snapshots, each labeled with the address it was captured at.
#[rustfmt::skip]
const REFERENCE_DUMPS: [(&str, [u8; 32]); 9] = [
	(
		"[7b2c4] YELLOW SHADES",
		[
			0x00, 0x00, 0x00, 0x22, 0x00, 0x44, 0x00, 0x66, 0x00, 0x88, 0x00, 0xAA, 0x00, 0x00, 0x00, 0x00,
			0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
		],
	),
	(
		"[7b2e4] RED SHADES",
		[
			0x00, 0x00, 0x00, 0x02, 0x00, 0x02, 0x00, 0x04, 0x00, 0x06, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00,
			0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
		],
	),
	(
		"[7b304] BEIGE SHADES",
		[
			0x00, 0x00, 0x02, 0x44, 0x04, 0x66, 0x06, 0x88, 0x08, 0xAA, 0x0A, 0xCC, 0x00, 0x00, 0x00, 0x00,
			0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
		],
	),
	(
		"[7b324] GREEN SHADES",
		[
			0x00, 0x00, 0x00, 0x20, 0x00, 0x40, 0x00, 0x60, 0x00, 0x80, 0x00, 0xA0, 0x00, 0x00, 0x00, 0x00,
			0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
		],
	),
	(
		"[7b344] RAINBOW 0",
		[
			0x00, 0x00, 0x0E, 0x86, 0x02, 0x42, 0x02, 0x62, 0x04, 0x64, 0x0E, 0x0E, 0x06, 0x88, 0x02, 0x4C,
			0x02, 0x0E, 0x00, 0xCE, 0x00, 0xC0, 0x04, 0x00, 0x0E, 0x00, 0x00, 0x24, 0x02, 0x46, 0x0E, 0xEE,
		],
	),
	(
		"[7b364] RAINBOW 1",
		[
			0x0C, 0x86, 0x00, 0x00, 0x00, 0x02, 0x00, 0x22, 0x00, 0x24, 0x00, 0x46, 0x02, 0x68, 0x04, 0x8A,
			0x06, 0xAC, 0x08, 0xCE, 0x0E, 0xA2, 0x02, 0x22, 0x04, 0x44, 0x06, 0x66, 0x0E, 0x80, 0x02, 0x86,
		],
	),
	(
		"[7b384] RAINBOW 2",
		[
			0x0C, 0x86, 0x0A, 0x42, 0x0A, 0x64, 0x0C, 0xA8, 0x0C, 0xAA, 0x0E, 0xCA, 0x0E, 0xCC, 0x0E, 0xEE,
			0x02, 0x22, 0x04, 0x8A, 0x0C, 0x84, 0x0C, 0xE6, 0x00, 0x28, 0x00, 0x26, 0x00, 0x24, 0x00, 0x00,
		],
	),
	(
		"[7b3a4] RAINBOW 3",
		[
			0x00, 0x00, 0x00, 0x00, 0x04, 0x46, 0x06, 0x68, 0x06, 0x8A, 0x06, 0xAC, 0x02, 0x24, 0x06, 0x44,
			0x08, 0x86, 0x0C, 0xA8, 0x0E, 0xCA, 0x0C, 0xEC, 0x00, 0xAE, 0x00, 0x6C, 0x02, 0xCE, 0x0E, 0xEE,
		],
	),
	(
		"[7b3c4] WHITE AND RED SHADES",
		[
			0x00, 0x00, 0x00, 0x00, 0x04, 0x44, 0x06, 0x66, 0x08, 0x88, 0x0A, 0xAA, 0x0C, 0xCC, 0x0E, 0xEE,
			0x00, 0x04, 0x00, 0x06, 0x00, 0x08, 0x00, 0x0A, 0x00, 0x0C, 0x02, 0x2C, 0x04, 0x4C, 0x08, 0x8E,
		],
	),
];

/// The built-in catalog of nine 16-color dumps.
pub fn reference_catalog() -> PaletteCatalog {
	REFERENCE_DUMPS.iter()
		.map(|(label, raw)| PaletteDump::new(*label, raw.as_slice()))
		.collect()
}
