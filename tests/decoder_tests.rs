use cramview_rs::cram::color::{decode, decode_words, scale_nibble, Color, CramWord};
use cramview_rs::cram::COLORS_PER_DUMP;

const YELLOW_SHADES: [u8; 32] = [
	0x00, 0x00, 0x00, 0x22, 0x00, 0x44, 0x00, 0x66, 0x00, 0x88, 0x00, 0xAA, 0x00, 0x00, 0x00, 0x00,
	0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[test]
fn decode_yields_one_color_per_entry() {
	for n in [0, 1, 4, COLORS_PER_DUMP, 64] {
		let raw = vec![0x0A_u8; 2 * n];
		assert_eq!(decode(&raw, n).unwrap().len(), n);
	}
}

#[test]
fn decode_low_shades() {
	let colors = decode(&YELLOW_SHADES, COLORS_PER_DUMP).unwrap();

	assert_eq!(colors[0], Color::BLACK);
	assert_eq!(colors[1], Color { r: 36, g: 36, b: 0 });
	assert_eq!(colors[2], Color { r: 73, g: 73, b: 0 });
	assert_eq!(colors[5], Color { r: 182, g: 182, b: 0 });
	assert!(colors[6..].iter().all(|c| *c == Color::BLACK));
}

#[test]
fn decode_channel_placement() {
	// blue from the low nibble of the first byte, green/red from the second byte
	let colors = decode(&[0x0E, 0x00, 0x00, 0xE0, 0x00, 0x0E, 0xFE, 0xEE], 4).unwrap();

	assert_eq!(colors[0], Color { r: 0, g: 0, b: 255 });
	assert_eq!(colors[1], Color { r: 0, g: 255, b: 0 });
	assert_eq!(colors[2], Color { r: 255, g: 0, b: 0 });
	// the reserved high nibble of the first byte is ignored
	assert_eq!(colors[3], Color::WHITE);
}

#[test]
fn decode_is_deterministic() {
	let a = decode(&YELLOW_SHADES, COLORS_PER_DUMP).unwrap();
	let b = decode(&YELLOW_SHADES, COLORS_PER_DUMP).unwrap();
	assert_eq!(a, b);
}

#[test]
fn words_are_big_endian() {
	let words = decode_words(&[0x0E, 0x86, 0x02, 0x42], 2).unwrap();
	assert_eq!(words, vec![CramWord(0x0E86), CramWord(0x0242)]);
	assert_eq!(Color::from(words[0]).to_string(), "#6D92FF");
}

#[test]
#[should_panic(expected = "InvalidLength { expected: 32, actual: 31 }")]
fn decode_rejects_short_dump() {
	decode(&YELLOW_SHADES[..31], COLORS_PER_DUMP).unwrap();
}

#[test]
#[should_panic(expected = "InvalidLength { expected: 32, actual: 34 }")]
fn decode_rejects_long_dump() {
	let mut raw = YELLOW_SHADES.to_vec();
	raw.extend([0x00, 0x00]);
	decode(&raw, COLORS_PER_DUMP).unwrap();
}

#[test]
fn scale_is_monotonic() {
	let scaled = (0..=0xF).map(scale_nibble).collect::<Vec<u16>>();

	assert_eq!(scaled[0], 0);
	assert_eq!(scaled[0xE], 255);
	assert!(scaled.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn shades_of_the_hardware_ladder() {
	let even = [0x0, 0x2, 0x4, 0x6, 0x8, 0xA, 0xC, 0xE].map(scale_nibble);
	assert_eq!(even, [0, 36, 73, 109, 146, 182, 219, 255]);
}

#[test]
fn nibble_above_max_shade_overshoots() {
	// 0xF is never written by real hardware; its scaled value is left unclamped
	assert_eq!(scale_nibble(0xF), 273);

	// and saturates once narrowed to an 8-bit channel
	let colors = decode(&[0x0F, 0xFF], 1).unwrap();
	assert_eq!(colors[0], Color::WHITE);
}
