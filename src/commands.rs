use clap::Args;
use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use crate::common::parse_hex_color;
use cramview_rs::cram::color::Color;
use cramview_rs::cram::COLORS_PER_DUMP;
use cramview_rs::grid::renderer::MAX_FONT_SCALE;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Renders VDP color RAM dumps as labeled swatch grids")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true)]
	pub debug: bool,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct SourceArgs {
	#[arg(short, long, group = "source", help = "A JSON catalog of labeled dumps.")]
	pub catalog: Option<PathBuf>,
	#[arg(short = 'b', long, group = "source", help = "A raw CRAM dump, split into consecutive palettes.")]
	pub cram: Option<PathBuf>,

	#[arg(short = 'n', long = "colors", help = "Colors per palette.", default_value_t = COLORS_PER_DUMP)]
	pub colors_per_dump: usize,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct StyleArgs {
	#[arg(long, help = "Swatch edge length in pixels.", default_value_t = 32)]
	pub tile_size: u32,
	#[arg(long, help = "Integer zoom of the label font.", default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=MAX_FONT_SCALE as i64))]
	pub font_scale: u32,
	#[arg(long, help = "Swatch outline color. Format RRGGBB.", value_parser = parse_hex_color, default_value = "FFFFFF")]
	pub outline: Color,
	#[arg(long, help = "Canvas background color. Format RRGGBB.", value_parser = parse_hex_color, default_value = "000000")]
	pub background: Color,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct RenderArgs {
	#[command(flatten)]
	pub source: SourceArgs,
	#[command(flatten)]
	pub style: StyleArgs,

	#[arg(help = "The output PNG file.")]
	pub output: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct BatchArgs {
	#[arg(help = "The directory containing .bin dumps.")]
	pub dir: PathBuf,

	#[arg(short = 'n', long = "colors", help = "Colors per palette.", default_value_t = COLORS_PER_DUMP)]
	pub colors_per_dump: usize,
	#[command(flatten)]
	pub style: StyleArgs,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct InfoArgs {
	#[command(flatten)]
	pub source: SourceArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Renders a catalog of dumps to a PNG file")]
	Render(RenderArgs),

	#[command(about = "Renders every .bin dump in a directory to a PNG next to it")]
	Batch(BatchArgs),

	#[command(about = "Prints the decoded colors of a catalog")]
	Info(InfoArgs),
}
