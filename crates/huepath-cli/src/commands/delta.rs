//! Color difference command.

use super::{make_color, parse_kind, parse_values, parse_white};
use crate::DeltaArgs;
use anyhow::{Context, Result, bail};
use huepath_core::{Color, Colorspace};
use huepath_diff::{
    Cie76, Cie94, Cie94Profile, Ciede2000, Cmc, CmcParams, ColorDifference, Din99,
};
use tracing::{debug, trace};

pub fn run(args: DeltaArgs, verbose: bool) -> Result<()> {
    trace!(formula = %args.formula, kind = %args.kind, "delta::run");

    let kind = parse_kind(&args.kind)?;
    let white = parse_white(&args.white)?;
    let first = make_color(kind, &parse_values(&args.first)?, Colorspace::Cie(white))?;
    let second = make_color(kind, &parse_values(&args.second)?, Colorspace::Cie(white))?;

    let mut calc = calculator(&args, &first, &second)?;
    let (de, dc, dh) = (calc.delta_e(), calc.delta_c(), calc.delta_h());
    calc.dispose();
    debug!(de, dc, dh, "Difference computed");

    if verbose {
        println!("{} {} vs {} ({kind})", args.formula, args.first, args.second);
    }
    println!("dE = {de:.6}");
    println!("dC = {dc:.6}");
    println!("dH = {dh:.6}");
    Ok(())
}

fn calculator(
    args: &DeltaArgs,
    first: &Color,
    second: &Color,
) -> Result<Box<dyn ColorDifference>> {
    let calc: Box<dyn ColorDifference> = match args.formula.to_ascii_lowercase().as_str() {
        "cie76" | "76" => Box::new(Cie76::new(first, second)?),
        "cie94" | "94" => Box::new(Cie94::with_profile(
            first,
            second,
            parse_application(&args.application)?,
        )?),
        "ciede2000" | "de2000" | "2000" => Box::new(Ciede2000::new(first, second)?),
        "cmc" => Box::new(Cmc::with_params(first, second, parse_ratio(&args.ratio)?)?),
        "din99" => Box::new(Din99::new(first, second)?),
        other => bail!("Unknown formula: {other} (cie76, cie94, ciede2000, cmc, din99)"),
    };
    Ok(calc)
}

fn parse_application(name: &str) -> Result<Cie94Profile> {
    match name.to_ascii_lowercase().replace('_', "-").as_str() {
        "graphic-arts" | "graphics" => Ok(Cie94Profile::GraphicArts),
        "textiles" => Ok(Cie94Profile::Textiles),
        other => bail!("Unknown CIE94 application: {other}"),
    }
}

/// `l:c`, e.g. `2:1`.
fn parse_ratio(ratio: &str) -> Result<CmcParams> {
    let (l, c) = ratio
        .split_once(':')
        .with_context(|| format!("CMC ratio must be l:c, got {ratio}"))?;
    let l: f64 = l.trim().parse().context("Invalid CMC lightness weight")?;
    let c: f64 = c.trim().parse().context("Invalid CMC chroma weight")?;
    Ok(CmcParams::new(l, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ratio() {
        assert_eq!(parse_ratio("2:1").unwrap(), CmcParams::ACCEPTABILITY);
        assert!(parse_ratio("2").is_err());
    }

    #[test]
    fn test_parse_application() {
        assert_eq!(parse_application("Textiles").unwrap(), Cie94Profile::Textiles);
        assert_eq!(parse_application("graphic_arts").unwrap(), Cie94Profile::GraphicArts);
    }
}
