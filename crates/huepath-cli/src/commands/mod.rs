//! CLI command implementations

pub mod convert;
pub mod delta;
pub mod list;

use anyhow::{Context, Result, bail};
use huepath_core::{
    Color, ColorType, Colorspace, Family, GraySpace, Preset, RgbSpace, TransferCurve, Whitepoint,
};
use std::sync::Arc;

/// Parses a color type, ignoring case, dashes and underscores (`lch-ab`).
pub fn parse_kind(name: &str) -> Result<ColorType> {
    let key: String = name.chars().filter(|c| !matches!(c, '-' | '_')).collect();
    Ok(key.parse::<ColorType>()?)
}

/// Parses `1,2.5,-3` into channel values.
pub fn parse_values(list: &str) -> Result<Vec<f64>> {
    list.split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid channel value: {v:?}"))
        })
        .collect()
}

pub fn parse_white(name: &str) -> Result<Whitepoint> {
    Whitepoint::by_name(name).with_context(|| format!("Unknown white point: {name}"))
}

/// Resolves a space argument for `kind`.
///
/// With no argument, CIE types get D65, RGB-family types sRGB and gray the
/// default gray space. `icc:<path>` loads a profile connecting through `pcs`.
pub fn parse_space(arg: Option<&str>, kind: ColorType, pcs: ColorType) -> Result<Colorspace> {
    if let Some(path) = arg.and_then(|s| s.strip_prefix("icc:")) {
        return load_icc(path, pcs);
    }

    let space = match (kind.family(), arg) {
        (Family::Cie | Family::Din99, None) => Colorspace::Cie(Whitepoint::D65),
        (Family::Cie | Family::Din99, Some(white)) => Colorspace::Cie(parse_white(white)?),
        (Family::Rgb, None) => Colorspace::Rgb(Arc::new(RgbSpace::srgb())),
        (Family::Rgb, Some(name)) => {
            let preset: Preset = name.parse()?;
            Colorspace::Rgb(Arc::new(RgbSpace::preset(preset)))
        }
        (Family::Gray, None) => Colorspace::Gray(GraySpace::default()),
        (Family::Gray, Some(name)) => {
            let white = match name.split_once(':') {
                Some(("gray", white)) => parse_white(white)?,
                None if name == "gray" => Whitepoint::D65,
                _ => bail!("Gray spaces are written gray or gray:<white>, got {name}"),
            };
            Colorspace::Gray(GraySpace::new(white, TransferCurve::Srgb))
        }
    };
    Ok(space)
}

#[cfg(feature = "lcms")]
fn load_icc(path: &str, pcs: ColorType) -> Result<Colorspace> {
    let profile = huepath_icc::LcmsProfile::from_file(std::path::Path::new(path), pcs)
        .with_context(|| format!("Failed to load ICC profile: {path}"))?;
    Ok(Colorspace::Device(Arc::new(profile)))
}

#[cfg(not(feature = "lcms"))]
fn load_icc(path: &str, _pcs: ColorType) -> Result<Colorspace> {
    bail!("ICC support is disabled in this build: {path}")
}

pub fn make_color(kind: ColorType, values: &[f64], space: Colorspace) -> Result<Color> {
    Color::new(kind, values, space)
        .with_context(|| format!("Invalid {kind} color {}", format_values(values)))
}

/// `[a, b, c]` with six decimals.
pub fn format_values(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.6}")).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("lch-ab").unwrap(), ColorType::LchAb);
        assert_eq!(parse_kind("LCH99d").unwrap(), ColorType::Lch99d);
        assert!(parse_kind("oklab").is_err());
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("50, -2.5,0").unwrap(), vec![50.0, -2.5, 0.0]);
        assert!(parse_values("1,x").is_err());
    }

    #[test]
    fn test_parse_space() {
        let lab = ColorType::Lab;
        let space = parse_space(Some("d50"), lab, lab).unwrap();
        assert_eq!(space.reference_white(), Whitepoint::D50);

        let rgb = parse_space(Some("prophoto"), ColorType::Hsv, lab).unwrap();
        assert_eq!(rgb.reference_white(), Whitepoint::D50);

        let gray = parse_space(Some("gray:d50"), ColorType::Gray, lab).unwrap();
        assert_eq!(gray.reference_white(), Whitepoint::D50);
        assert!(parse_space(Some("grey"), ColorType::Gray, lab).is_err());
    }
}
