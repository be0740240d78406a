use std::fmt::{Display, Formatter};

use byteorder::{BigEndian, ByteOrder};

use crate::cram::BYTES_PER_COLOR;
use crate::cram::dump::CramError;

// CRAM shades are 3 bits stored doubled, so the brightest legal nibble is 0xE
const MAX_SHADE: u16 = 0xE;

// Not clamped: 0xF scales to 273.
pub fn scale_nibble(nibble: u8) -> u16 {
	let n = (nibble & 0xF) as u16;
	(n * 255 + MAX_SHADE / 2) / MAX_SHADE
}

fn narrow(v: u16) -> u8 {
	u8::try_from(v).unwrap_or(u8::MAX)
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
	pub const WHITE: Color = Color { r: 0xFF, g: 0xFF, b: 0xFF };

	/// Channels that scale past 255 saturate.
	pub fn from_nibbles(red: u8, green: u8, blue: u8) -> Self {
		Self {
			r: narrow(scale_nibble(red)),
			g: narrow(scale_nibble(green)),
			b: narrow(scale_nibble(blue)),
		}
	}

	pub fn to_rgb(self) -> [u8; 3] {
		[self.r, self.g, self.b]
	}
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		write!(f, "#{:06X}", rgb)
	}
}

/// One CRAM entry as the VDP stores it: a big-endian word laid out as `----BBBB GGGGRRRR`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CramWord(pub u16);

impl CramWord {
	pub fn blue(self) -> u8 {
		((self.0 >> 8) & 0xF) as u8
	}

	pub fn green(self) -> u8 {
		((self.0 >> 4) & 0xF) as u8
	}

	pub fn red(self) -> u8 {
		(self.0 & 0xF) as u8
	}
}

impl From<CramWord> for Color {
	fn from(w: CramWord) -> Self {
		Color::from_nibbles(w.red(), w.green(), w.blue())
	}
}

impl Display for CramWord {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:04X}", self.0)
	}
}

/// `raw` must hold exactly `color_count` two-byte entries.
pub fn decode_words(raw: &[u8], color_count: usize) -> Result<Vec<CramWord>, CramError> {
	let expected = color_count * BYTES_PER_COLOR;
	if raw.len() != expected {
		return Err(CramError::InvalidLength { expected, actual: raw.len() });
	}

	Ok(raw.chunks_exact(BYTES_PER_COLOR)
		.map(|c| CramWord(BigEndian::read_u16(c)))
		.collect())
}

pub fn decode(raw: &[u8], color_count: usize) -> Result<Vec<Color>, CramError> {
	Ok(decode_words(raw, color_count)?
		.into_iter()
		.map(Color::from)
		.collect())
}
