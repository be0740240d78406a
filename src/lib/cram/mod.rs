pub mod color;
pub(crate) mod cram_bin;
pub(crate) mod cram_json;
pub mod dump;
pub(crate) mod hex;
pub mod reference;

/// Colors per palette line in CRAM.
pub const COLORS_PER_DUMP: usize = 16;
pub const BYTES_PER_COLOR: usize = 2;
