use anyhow::{Context, Result};

use crate::commands::BatchArgs;
use crate::common::render_config;
use cramview_rs::batch::render_directory;
use cramview_rs::grid::renderer::GridRenderer;

pub(crate) fn cram_batch(args: &BatchArgs) -> Result<()> {
	let renderer = GridRenderer::new(render_config(&args.style, args.colors_per_dump));

	let report = render_directory(&args.dir, &renderer)
		.with_context(|| format!("Couldn't scan {}", args.dir.display()))?;

	if report.rendered.is_empty() && report.failed.is_empty() {
		eprintln!("NOTE: {} contains no .bin files", args.dir.display());
	}

	println!("{} rendered, {} failed", report.rendered.len(), report.failed.len());
	if !report.is_success() {
		anyhow::bail!("{} of {} dumps could not be rendered", report.failed.len(), report.rendered.len() + report.failed.len());
	}

	Ok(())
}
