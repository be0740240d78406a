use anyhow::Result;
use colored::Colorize;

use crate::commands::InfoArgs;
use crate::common::load_catalog;
use cramview_rs::cram::color::Color;

fn swatch(color: Color) -> String {
	"  ".on_truecolor(color.r, color.g, color.b).to_string()
}

pub(crate) fn cram_info(args: &InfoArgs) -> Result<()> {
	let catalog = load_catalog(&args.source)?;
	let colors_per_dump = args.source.colors_per_dump;

	for (index, dump) in catalog.iter().enumerate() {
		println!("[{index}] {}", dump.label.bold());

		let words = match dump.words(colors_per_dump) {
			Ok(words) => words,
			Err(e) => {
				println!("  {}", e.to_string().red());
				continue;
			}
		};

		for (color_idx, word) in words.into_iter().enumerate() {
			let color = Color::from(word);
			// entry 0 of every palette line is the transparent/backdrop slot
			let note = if color_idx == 0 { " (backdrop)" } else { "" };
			println!("  {color_idx:>2}: {} {word} {color}{note}", swatch(color));
		}
	}

	Ok(())
}
