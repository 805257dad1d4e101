//! Transform compiler.
//!
//! Turns unbound [`ConversionStep`]s into bound [`Kernel`]s and fuses them
//! into a [`Program`]: a flat list evaluated by one loop over a 4-slot
//! register.
//!
//! # Fusion
//!
//! [`Program::push`] is a peephole pass:
//!
//! - adjacent matrices are pre-multiplied into one, and the product is
//!   dropped when it is the identity
//! - a kernel followed by its inverse with identical bound parameters
//!   cancels out
//!
//! Because the pass works on the program tail, cancellations cascade:
//! `decode, M, M⁻¹, encode` compiles to nothing.

use crate::path::ConversionStep;
use crate::{ConvertError, ConvertResult, ops};
use huepath_core::{Colorspace, DeviceProfile, Din99Params, MAX_CHANNELS, TransferCurve};
use huepath_math::{ChromaticAdaptationMethod, Mat3};
use std::sync::Arc;
use tracing::trace;

const IDENTITY_EPS: f64 = 1e-12;

/// A conversion step bound to concrete colorspace data.
#[derive(Debug, Clone)]
pub(crate) enum Kernel {
    /// Transfer curve decode of the three RGB channels.
    Decode(TransferCurve),
    /// Transfer curve encode of the three RGB channels.
    Encode(TransferCurve),
    /// 3x3 matrix on the first three channels.
    Matrix(Mat3),
    HsvToRgb,
    RgbToHsv,
    HslToRgb,
    RgbToHsl,
    /// `1 - v` per channel: CMY ↔ RGB.
    Complement,
    CmykToCmy,
    CmyToCmyk,
    /// Gray → XYZ along the white: `XYZ = to_linear(g) · white`.
    GrayToXyz { curve: TransferCurve, white: [f64; 3] },
    /// XYZ → gray from `Y / white_y`.
    XyzToGray { curve: TransferCurve, white_y: f64 },
    XyzToYxy { white: [f64; 3] },
    YxyToXyz,
    XyzToLab { white: [f64; 3] },
    LabToXyz { white: [f64; 3] },
    XyzToLuv { white: [f64; 3] },
    LuvToXyz { white: [f64; 3] },
    RectToCyl,
    CylToRect,
    XyzToDin99 { params: Din99Params, white: [f64; 3] },
    Din99ToXyz { params: Din99Params, white: [f64; 3] },
    /// Profile evaluation, device values → PCS.
    DeviceToPcs(Arc<dyn DeviceProfile>),
    /// Profile evaluation, PCS → device values.
    PcsToDevice(Arc<dyn DeviceProfile>),
}

/// Is `b` the exact inverse of `a`, so that `a` then `b` is the identity?
fn cancels(a: &Kernel, b: &Kernel) -> bool {
    use Kernel::*;
    match (a, b) {
        (Decode(c1), Encode(c2)) | (Encode(c1), Decode(c2)) => c1 == c2,
        (HsvToRgb, RgbToHsv)
        | (RgbToHsv, HsvToRgb)
        | (HslToRgb, RgbToHsl)
        | (RgbToHsl, HslToRgb)
        | (Complement, Complement)
        | (CmyToCmyk, CmykToCmy)
        | (CmykToCmy, CmyToCmyk)
        | (RectToCyl, CylToRect)
        | (CylToRect, RectToCyl)
        | (XyzToYxy { .. }, YxyToXyz)
        | (YxyToXyz, XyzToYxy { .. }) => true,
        (XyzToLab { white: w1 }, LabToXyz { white: w2 })
        | (LabToXyz { white: w1 }, XyzToLab { white: w2 })
        | (XyzToLuv { white: w1 }, LuvToXyz { white: w2 })
        | (LuvToXyz { white: w1 }, XyzToLuv { white: w2 }) => w1 == w2,
        // XYZ → gray loses chromaticity, so only gray → XYZ → gray cancels.
        (GrayToXyz { curve: c1, white }, XyzToGray { curve: c2, white_y }) => {
            c1 == c2 && white[1] == *white_y
        }
        (
            XyzToDin99 {
                params: p1,
                white: w1,
            },
            Din99ToXyz {
                params: p2,
                white: w2,
            },
        )
        | (
            Din99ToXyz {
                params: p1,
                white: w1,
            },
            XyzToDin99 {
                params: p2,
                white: w2,
            },
        ) => p1 == p2 && w1 == w2,
        (DeviceToPcs(p), PcsToDevice(q)) | (PcsToDevice(p), DeviceToPcs(q)) => Arc::ptr_eq(p, q),
        _ => false,
    }
}

/// Fused kernel list.
#[derive(Debug, Clone, Default)]
pub(crate) struct Program {
    kernels: Vec<Kernel>,
}

impl Program {
    /// Appends a kernel, fusing it with the program tail where possible.
    pub fn push(&mut self, kernel: Kernel) {
        if let (Some(Kernel::Matrix(prev)), Kernel::Matrix(next)) = (self.kernels.last(), &kernel) {
            let merged = next.mul_mat(prev);
            self.kernels.pop();
            if !merged.is_identity(IDENTITY_EPS) {
                self.kernels.push(Kernel::Matrix(merged));
            }
            return;
        }
        if self.kernels.last().is_some_and(|last| cancels(last, &kernel)) {
            self.kernels.pop();
            return;
        }
        self.kernels.push(kernel);
    }

    /// Appends every kernel of a stage.
    pub fn extend(&mut self, kernels: impl IntoIterator<Item = Kernel>) {
        for kernel in kernels {
            self.push(kernel);
        }
    }

    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    /// Runs every kernel over `reg`. `scratch` receives profile output.
    pub fn run(&self, reg: &mut [f64; MAX_CHANNELS], scratch: &mut [f64; MAX_CHANNELS]) {
        for kernel in &self.kernels {
            let v = [reg[0], reg[1], reg[2]];
            match kernel {
                Kernel::Decode(curve) => set3(reg, v.map(|x| curve.to_linear(x))),
                Kernel::Encode(curve) => set3(reg, v.map(|x| curve.to_non_linear(x))),
                Kernel::Matrix(m) => m.transform_in_place(&mut reg[..3]),
                Kernel::HsvToRgb => set3(reg, ops::hsv_to_rgb(v)),
                Kernel::RgbToHsv => set3(reg, ops::rgb_to_hsv(v)),
                Kernel::HslToRgb => set3(reg, ops::hsl_to_rgb(v)),
                Kernel::RgbToHsl => set3(reg, ops::rgb_to_hsl(v)),
                Kernel::Complement => set3(reg, ops::complement(v)),
                Kernel::CmykToCmy => {
                    let cmy = ops::cmyk_to_cmy(*reg);
                    *reg = [cmy[0], cmy[1], cmy[2], 0.0];
                }
                Kernel::CmyToCmyk => *reg = ops::cmy_to_cmyk(v),
                Kernel::GrayToXyz { curve, white } => {
                    let y = curve.to_linear(reg[0]);
                    *reg = [y * white[0], y * white[1], y * white[2], 0.0];
                }
                Kernel::XyzToGray { curve, white_y } => {
                    *reg = [curve.to_non_linear(reg[1] / white_y), 0.0, 0.0, 0.0];
                }
                Kernel::XyzToYxy { white } => set3(reg, ops::xyz_to_yxy(v, *white)),
                Kernel::YxyToXyz => set3(reg, ops::yxy_to_xyz(v)),
                Kernel::XyzToLab { white } => set3(reg, ops::xyz_to_lab(v, *white)),
                Kernel::LabToXyz { white } => set3(reg, ops::lab_to_xyz(v, *white)),
                Kernel::XyzToLuv { white } => set3(reg, ops::xyz_to_luv(v, *white)),
                Kernel::LuvToXyz { white } => set3(reg, ops::luv_to_xyz(v, *white)),
                Kernel::RectToCyl => set3(reg, ops::rect_to_cyl(v)),
                Kernel::CylToRect => set3(reg, ops::cyl_to_rect(v)),
                Kernel::XyzToDin99 { params, white } => {
                    set3(reg, ops::xyz_to_din99(v, *white, params))
                }
                Kernel::Din99ToXyz { params, white } => {
                    set3(reg, ops::din99_to_xyz(v, *white, params))
                }
                Kernel::DeviceToPcs(profile) => {
                    *scratch = [0.0; MAX_CHANNELS];
                    profile.to_pcs(&reg[..], &mut scratch[..]);
                    *reg = *scratch;
                }
                Kernel::PcsToDevice(profile) => {
                    *scratch = [0.0; MAX_CHANNELS];
                    profile.from_pcs(&reg[..], &mut scratch[..]);
                    *reg = *scratch;
                }
            }
        }
    }
}

#[inline]
fn set3(reg: &mut [f64; MAX_CHANNELS], v: [f64; 3]) {
    reg[..3].copy_from_slice(&v);
}

/// Binds one step to a colorspace. `None` when the space cannot carry it.
///
/// `Adapt` never binds here; see [`compile_chain`].
fn bind(step: ConversionStep, space: &Colorspace) -> Option<Kernel> {
    use ConversionStep as S;

    if let Colorspace::Rgb(rgb) = space {
        let kernel = match step {
            S::RgbToLinear => Kernel::Decode(rgb.transfer()),
            S::LinearToRgb => Kernel::Encode(rgb.transfer()),
            S::LinearRgbToXyz => Kernel::Matrix(*rgb.to_xyz_matrix()),
            S::XyzToLinearRgb => Kernel::Matrix(*rgb.from_xyz_matrix()),
            S::HsvToRgb => Kernel::HsvToRgb,
            S::RgbToHsv => Kernel::RgbToHsv,
            S::HslToRgb => Kernel::HslToRgb,
            S::RgbToHsl => Kernel::RgbToHsl,
            S::CmyToRgb | S::RgbToCmy => Kernel::Complement,
            S::CmykToCmy => Kernel::CmykToCmy,
            S::CmyToCmyk => Kernel::CmyToCmyk,
            _ => return bind_cie(step, space),
        };
        return Some(kernel);
    }

    if let Colorspace::Gray(gray) = space {
        match step {
            S::GrayToXyz => {
                return Some(Kernel::GrayToXyz {
                    curve: gray.transfer,
                    white: gray.white.xyz(),
                });
            }
            S::XyzToGray => {
                return Some(Kernel::XyzToGray {
                    curve: gray.transfer,
                    white_y: gray.white.y(),
                });
            }
            _ => {}
        }
    }

    bind_cie(step, space)
}

/// CIE and DIN99 steps bind to the reference white of any colorspace.
fn bind_cie(step: ConversionStep, space: &Colorspace) -> Option<Kernel> {
    use ConversionStep as S;
    let white = space.reference_white().xyz();
    Some(match step {
        S::XyzToYxy => Kernel::XyzToYxy { white },
        S::YxyToXyz => Kernel::YxyToXyz,
        S::XyzToLab => Kernel::XyzToLab { white },
        S::LabToXyz => Kernel::LabToXyz { white },
        S::XyzToLuv => Kernel::XyzToLuv { white },
        S::LuvToXyz => Kernel::LuvToXyz { white },
        S::LabToLchAb | S::LuvToLchUv => Kernel::RectToCyl,
        S::LchAbToLab | S::LchUvToLuv => Kernel::CylToRect,
        S::XyzToLch99(v) => Kernel::XyzToDin99 {
            params: v.params(),
            white,
        },
        S::Lch99ToXyz(v) => Kernel::Din99ToXyz {
            params: v.params(),
            white,
        },
        _ => return None,
    })
}

/// Compiles a plain chain: one registry path between two plain colorspaces.
///
/// Steps before the first `Adapt` bind to `src`, steps after it to `dst`.
/// A path without `Adapt` switches to `dst` at the first step `src` cannot
/// carry. `Adapt` becomes the `method` matrix between the two reference
/// whites and vanishes when they are equal.
pub(crate) fn compile_chain(
    steps: &[ConversionStep],
    src: &Colorspace,
    dst: &Colorspace,
    method: &ChromaticAdaptationMethod,
) -> ConvertResult<Vec<Kernel>> {
    let pivot = steps
        .iter()
        .position(|s| *s == ConversionStep::Adapt)
        .or_else(|| steps.iter().position(|s| bind(*s, src).is_none()))
        .unwrap_or(steps.len());

    let mut kernels = Vec::with_capacity(steps.len());
    for (i, step) in steps.iter().enumerate() {
        if *step == ConversionStep::Adapt {
            // Later Adapt steps already sit in the target white.
            if i == pivot {
                let (sw, dw) = (src.reference_white(), dst.reference_white());
                if sw != dw {
                    trace!("adapting {} -> {} with {}", src, dst, method.name());
                    kernels.push(Kernel::Matrix(method.calculate_matrix(sw.xyz(), dw.xyz())));
                }
            }
            continue;
        }
        let space = if i < pivot { src } else { dst };
        let kernel = bind(*step, space).ok_or_else(|| {
            ConvertError::Configuration(format!("step {step} cannot bind to colorspace {space}"))
        })?;
        kernels.push(kernel);
    }
    Ok(kernels)
}

/// The profile-mediated stage between a profile's data type and its PCS.
pub(crate) fn profile_stage(profile: &Arc<dyn DeviceProfile>, to_pcs: bool) -> Kernel {
    if to_pcs {
        Kernel::DeviceToPcs(Arc::clone(profile))
    } else {
        Kernel::PcsToDevice(Arc::clone(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConversionPath;
    use approx::assert_abs_diff_eq;
    use huepath_core::{ColorType, GraySpace, RgbSpace, Whitepoint};
    use huepath_math::BRADFORD;

    fn run(program: &Program, input: &[f64]) -> [f64; MAX_CHANNELS] {
        let mut reg = [0.0; MAX_CHANNELS];
        reg[..input.len()].copy_from_slice(input);
        program.run(&mut reg, &mut [0.0; MAX_CHANNELS]);
        reg
    }

    fn compile(from: ColorType, to: ColorType, src: &Colorspace, dst: &Colorspace) -> Program {
        let path = ConversionPath::via_xyz(from, to);
        let mut program = Program::default();
        program.extend(compile_chain(path.steps(), src, dst, &BRADFORD).unwrap());
        program
    }

    #[test]
    fn test_same_space_rgb_compiles_to_nothing() {
        let srgb = Colorspace::from(RgbSpace::srgb());
        let program = compile(ColorType::Rgb, ColorType::Rgb, &srgb, &srgb);
        assert_eq!(program.len(), 0);
    }

    #[test]
    fn test_lab_to_lch_cancels_xyz_detour() {
        let d65 = Colorspace::Cie(Whitepoint::D65);
        let program = compile(ColorType::Lab, ColorType::LchAb, &d65, &d65);
        assert_eq!(program.len(), 1);
        let lch = run(&program, &[50.0, 0.0, 10.0]);
        assert_abs_diff_eq!(lch[1], 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lch[2], 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_adapt_dropped_for_equal_whites() {
        let d65 = Colorspace::Cie(Whitepoint::D65);
        let d50 = Colorspace::Cie(Whitepoint::D50);
        assert_eq!(compile(ColorType::Xyz, ColorType::Xyz, &d65, &d65).len(), 0);
        assert_eq!(compile(ColorType::Xyz, ColorType::Xyz, &d65, &d50).len(), 1);
    }

    #[test]
    fn test_rgb_matrices_fuse_across_adaptation() {
        let srgb = Colorspace::from(RgbSpace::srgb());
        let d50 = Colorspace::Cie(Whitepoint::D50);
        // decode, M_rgb, M_adapt, lab
        let program = compile(ColorType::Rgb, ColorType::Lab, &srgb, &d50);
        assert_eq!(program.len(), 3);
        let lab = run(&program, &[1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(lab[0], 100.0, epsilon = 1e-6);
        assert_abs_diff_eq!(lab[1], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(lab[2], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_gray_roundtrip_cancels() {
        let gray = Colorspace::Gray(GraySpace::default());
        let program = compile(ColorType::Gray, ColorType::Gray, &gray, &gray);
        assert_eq!(program.len(), 0);
    }

    #[test]
    fn test_xyz_gray_xyz_does_not_cancel() {
        let mut program = Program::default();
        let curve = TransferCurve::Linear;
        program.push(Kernel::XyzToGray {
            curve,
            white_y: 1.0,
        });
        program.push(Kernel::GrayToXyz {
            curve,
            white: Whitepoint::D65.xyz(),
        });
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn test_unbindable_step_is_configuration_error() {
        let d65 = Colorspace::Cie(Whitepoint::D65);
        let steps = [ConversionStep::Adapt, ConversionStep::XyzToLinearRgb];
        let err = compile_chain(&steps, &d65, &d65, &BRADFORD).unwrap_err();
        assert!(matches!(err, ConvertError::Configuration(_)));
    }

    #[test]
    fn test_path_without_adapt_switches_space() {
        let d65 = Colorspace::Cie(Whitepoint::D65);
        let srgb = Colorspace::from(RgbSpace::srgb());
        let steps = [
            ConversionStep::LabToXyz,
            ConversionStep::XyzToLinearRgb,
            ConversionStep::LinearToRgb,
        ];
        let kernels = compile_chain(&steps, &d65, &srgb, &BRADFORD).unwrap();
        assert_eq!(kernels.len(), 3);
        let mut program = Program::default();
        program.extend(kernels);
        let rgb = run(&program, &[100.0, 0.0, 0.0]);
        for c in &rgb[..3] {
            assert_abs_diff_eq!(*c, 1.0, epsilon = 1e-4);
        }
    }
}
