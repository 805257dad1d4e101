//! Matrix/shaper profiles.
//!
//! The classic ICC display profile: per-channel tone curves followed by a
//! matrix into PCS XYZ (D50). RGB profiles carry a 3x3 device matrix, gray
//! profiles a 3x1 column along the PCS white. Both go through the general
//! `rows × inner` multiply of the numeric kernel.

use crate::{IccError, IccResult};
use huepath_core::{
    ColorType, DeviceProfile, GraySpace, ProfileClass, RgbSpace, TransferCurve, Whitepoint,
};
use huepath_math::{BRADFORD, Mat3, kernel};

/// Row-major `rows × cols` matrix.
#[derive(Debug, Clone, PartialEq)]
struct DeviceMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl DeviceMatrix {
    fn from_mat3(m: &Mat3) -> Self {
        Self {
            rows: 3,
            cols: 3,
            data: m.m.iter().flatten().copied().collect(),
        }
    }

    fn column(v: [f64; 3]) -> Self {
        Self {
            rows: 3,
            cols: 1,
            data: v.to_vec(),
        }
    }

    fn row(v: [f64; 3]) -> Self {
        Self {
            rows: 1,
            cols: 3,
            data: v.to_vec(),
        }
    }

    fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    #[inline]
    fn apply(&self, input: &[f64], output: &mut [f64]) {
        kernel::mul_general(
            &self.data,
            &input[..self.cols],
            &mut output[..self.rows],
            self.rows,
            self.cols,
            1,
        );
    }
}

/// A matrix/shaper profile with an XYZ (D50) connection space.
///
/// # Example
///
/// ```rust
/// use huepath_core::DeviceProfile;
/// use huepath_icc::MatrixShaperProfile;
///
/// let srgb = MatrixShaperProfile::srgb();
/// let mut xyz = [0.0; 3];
/// srgb.to_pcs(&[1.0, 1.0, 1.0], &mut xyz);
/// // Device white lands on the PCS white
/// assert!((xyz[0] - 0.96422).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixShaperProfile {
    description: String,
    class: ProfileClass,
    data: ColorType,
    transfer: TransferCurve,
    to_pcs: DeviceMatrix,
    from_pcs: DeviceMatrix,
}

impl MatrixShaperProfile {
    /// Builds a display profile from an RGB space.
    ///
    /// The space's primary matrix is chromatically adapted (Bradford) from
    /// its own white to the D50 PCS white.
    ///
    /// # Errors
    ///
    /// [`IccError::Singular`] if the primaries produce a non-invertible matrix.
    pub fn from_rgb_space(space: &RgbSpace) -> IccResult<Self> {
        let profile = Self::build_rgb(space);
        if !(profile.to_pcs.is_finite() && profile.from_pcs.is_finite()) {
            return Err(IccError::Singular(profile.description));
        }
        Ok(profile)
    }

    fn build_rgb(space: &RgbSpace) -> Self {
        let chad = BRADFORD.calculate_matrix(space.white().xyz(), Whitepoint::D50.xyz());
        let to_pcs = chad.mul_mat(space.to_xyz_matrix());
        Self {
            description: space.name().to_string(),
            class: ProfileClass::Display,
            data: ColorType::Rgb,
            transfer: space.transfer(),
            to_pcs: DeviceMatrix::from_mat3(&to_pcs),
            from_pcs: DeviceMatrix::from_mat3(&to_pcs.inverse()),
        }
    }

    /// Builds a gray profile. Gray maps onto the D50 axis: `XYZ = lin(g) · W`.
    pub fn gray(space: GraySpace) -> Self {
        let w = Whitepoint::D50.xyz();
        Self {
            description: format!("Gray ({})", space.transfer),
            class: ProfileClass::Display,
            data: ColorType::Gray,
            transfer: space.transfer,
            to_pcs: DeviceMatrix::column(w),
            from_pcs: DeviceMatrix::row([0.0, 1.0, 0.0]),
        }
    }

    /// sRGB display profile.
    pub fn srgb() -> Self {
        Self::build_rgb(&RgbSpace::srgb())
    }

    /// Adobe RGB (1998) display profile.
    pub fn adobe_rgb() -> Self {
        Self::build_rgb(&RgbSpace::adobe_rgb())
    }

    /// Overrides the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Overrides the profile class.
    pub fn with_class(mut self, class: ProfileClass) -> Self {
        self.class = class;
        self
    }

    /// Device → PCS matrix (`3 × channels`, row-major).
    pub fn device_matrix(&self) -> &[f64] {
        &self.to_pcs.data
    }
}

impl DeviceProfile for MatrixShaperProfile {
    fn description(&self) -> &str {
        &self.description
    }

    fn class(&self) -> ProfileClass {
        self.class
    }

    fn data_colorspace(&self) -> ColorType {
        self.data
    }

    fn pcs(&self) -> ColorType {
        ColorType::Xyz
    }

    fn to_pcs(&self, input: &[f64], output: &mut [f64]) {
        let n = self.to_pcs.cols;
        let mut linear = [0.0; 3];
        for (dst, src) in linear.iter_mut().zip(&input[..n]) {
            *dst = self.transfer.to_linear(*src);
        }
        self.to_pcs.apply(&linear, output);
    }

    fn from_pcs(&self, input: &[f64], output: &mut [f64]) {
        let n = self.from_pcs.rows;
        let mut linear = [0.0; 3];
        self.from_pcs.apply(input, &mut linear);
        for (dst, src) in output[..n].iter_mut().zip(&linear) {
            *dst = self.transfer.to_non_linear(*src);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use huepath_core::{Primaries, Preset};

    #[test]
    fn test_white_maps_to_pcs_white() {
        for preset in [Preset::Srgb, Preset::AdobeRgb, Preset::ProPhotoRgb, Preset::CieRgb] {
            let profile = MatrixShaperProfile::from_rgb_space(&RgbSpace::preset(preset)).unwrap();
            let mut xyz = [0.0; 3];
            profile.to_pcs(&[1.0, 1.0, 1.0], &mut xyz);
            let d50 = Whitepoint::D50.xyz();
            for i in 0..3 {
                assert_abs_diff_eq!(xyz[i], d50[i], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_rgb_roundtrip() {
        let profile = MatrixShaperProfile::adobe_rgb();
        let rgb = [0.2, 0.55, 0.9];
        let mut xyz = [0.0; 3];
        let mut back = [0.0; 3];
        profile.to_pcs(&rgb, &mut xyz);
        profile.from_pcs(&xyz, &mut back);
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gray_uses_column_matrix() {
        let profile = MatrixShaperProfile::gray(GraySpace::new(Whitepoint::D65, TransferCurve::Gamma(2.0)));
        assert_eq!(profile.data_colorspace(), ColorType::Gray);
        assert_eq!(profile.device_matrix().len(), 3);

        let mut xyz = [0.0; 3];
        profile.to_pcs(&[0.5], &mut xyz);
        assert_abs_diff_eq!(xyz[1], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(xyz[0], 0.25 * 0.96422, epsilon = 1e-12);

        let mut gray = [0.0];
        profile.from_pcs(&xyz, &mut gray);
        assert_abs_diff_eq!(gray[0], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_singular_primaries_rejected() {
        let flat = RgbSpace::new(
            "flat",
            Primaries {
                r: (0.3, 0.3),
                g: (0.3, 0.3),
                b: (0.15, 0.06),
            },
            Whitepoint::D65,
            TransferCurve::Linear,
        );
        assert!(matches!(
            MatrixShaperProfile::from_rgb_space(&flat),
            Err(IccError::Singular(_))
        ));
    }
}
