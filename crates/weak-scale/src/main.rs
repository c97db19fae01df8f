// File: crates/weak-scale/src/main.rs
// Summary: Stacks the weak-scaling breakdown and shows it in a window or writes it to the given file.

mod data;
#[cfg(feature = "window")]
mod window;

use anyhow::{Context, Result};
use stackplot_core::{Figure, Output, RenderOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let default_level = "info";
    let _ = tracing_subscriber::fmt()
        // Fall back to `default_level` if RUST_LOG is unset or invalid
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let comparison = data::weak_scale();
    let (figure, report) = data::build_figure(&comparison).context("failed to stack datasets")?;
    tracing::info!(
        reference = ?report.reference.bottom,
        current = ?report.current.bottom,
        "stacked iteration breakdown"
    );

    let opts = RenderOptions::default();
    match Output::from_arg(std::env::args().nth(1)) {
        Output::File(path) => {
            let format = figure
                .render_to_file(&opts, &path)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            println!("Wrote {} ({format:?})", path.display());
            Ok(())
        }
        Output::Display => show(figure, opts),
    }
}

#[cfg(feature = "window")]
fn show(figure: Figure, opts: RenderOptions) -> Result<()> {
    window::show(figure, opts, "Weak scaling: Nimbus vs PhysBAM")
}

#[cfg(not(feature = "window"))]
fn show(_figure: Figure, _opts: RenderOptions) -> Result<()> {
    anyhow::bail!("built without the `window` feature; pass an output path such as figs/weak_scale.pdf")
}
