use anyhow::{Context, Result};
use log::info;

use crate::commands::RenderArgs;
use crate::common::{load_catalog, render_config};
use cramview_rs::grid::renderer::GridRenderer;

pub(crate) fn cram_render(args: &RenderArgs) -> Result<()> {
	let catalog = load_catalog(&args.source)?;
	let renderer = GridRenderer::new(render_config(&args.style, args.source.colors_per_dump));

	let canvas = renderer.render(&catalog)?;
	info!("rendered {} dumps into a {}x{} canvas", catalog.len(), canvas.width(), canvas.height());

	canvas.save_png(&args.output)
		.with_context(|| format!("Couldn't write {}", args.output.display()))?;

	Ok(())
}
