//! Color conversion command.

use super::{format_values, make_color, parse_kind, parse_space, parse_values};
use crate::ConvertArgs;
use anyhow::{Context, Result, bail};
use huepath_convert::{ColorConverter, ConverterOptions};
use huepath_core::Color;
use tracing::{debug, info, trace};

pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    trace!(kind = %args.kind, to = %args.to, "convert::run");

    let from = parse_kind(&args.kind)?;
    let to = parse_kind(&args.to)?;
    let pcs = parse_kind(&args.pcs)?;
    if !pcs.is_pcs_type() {
        bail!("Profile connection space must be XYZ or Lab, got {pcs}");
    }

    let values = parse_values(&args.values)?;
    let source = make_color(from, &values, parse_space(args.space.as_deref(), from, pcs)?)?;
    let target = Color::zeroed(to, parse_space(args.to_space.as_deref(), to, pcs)?)
        .context("Failed to create target color")?;

    info!(from = %source.space(), to = %target.space(), "Converting {from} -> {to}");

    let options = ConverterOptions::with_adaptation(args.adaptation.as_str());
    let mut converter = ColorConverter::with_options(source, target, &options)
        .with_context(|| format!("No conversion from {from} to {to}"))?;
    debug!(
        stages = converter.stage_count(),
        kernels = converter.kernel_count(),
        "Conversion resolved"
    );

    if verbose {
        println!(
            "{} {} ({}) -> {} ({})",
            from,
            format_values(converter.source().values()),
            converter.source().space(),
            to,
            converter.target().space()
        );
        println!(
            "  {} stage(s), {} kernel(s)",
            converter.stage_count(),
            converter.kernel_count()
        );
    }

    let result = converter.convert()?;
    println!("{} {}", to, format_values(result.values()));
    if !result.in_bounds() {
        println!("  (out of gamut)");
    }
    Ok(())
}
