//! Little CMS backed profiles.
//!
//! Wraps an ICC profile loaded by lcms2 together with the two transforms
//! between its RGB data and the chosen connection space. Only 3-channel RGB
//! data profiles are accepted.

use crate::{IccError, IccResult};
use huepath_core::{ColorType, DeviceProfile, ProfileClass};
use lcms2::{
    CIExyY, ColorSpaceSignature, GlobalContext, InfoType, Intent, Locale, PixelFormat,
    Profile, ProfileClassSignature, Transform,
};
use std::path::Path;

type Transform3 = Transform<[f64; 3], [f64; 3]>;

/// An ICC profile evaluated by Little CMS.
///
/// # Example
///
/// ```rust,no_run
/// use huepath_core::ColorType;
/// use huepath_icc::LcmsProfile;
/// use std::path::Path;
///
/// let monitor = LcmsProfile::from_file(Path::new("monitor.icc"), ColorType::Lab).unwrap();
/// ```
pub struct LcmsProfile {
    description: String,
    class: ProfileClass,
    pcs: ColorType,
    to_pcs: Transform3,
    from_pcs: Transform3,
}

impl LcmsProfile {
    /// Loads a profile from an ICC file, connecting through `pcs`.
    pub fn from_file(path: &Path, pcs: ColorType) -> IccResult<Self> {
        let inner = Profile::new_file(path)
            .map_err(|e| IccError::LoadFailed(format!("{}: {}", path.display(), e)))?;
        Self::wrap(inner, pcs)
    }

    /// Loads a profile from raw ICC data.
    pub fn from_icc(data: &[u8], pcs: ColorType) -> IccResult<Self> {
        let inner = Profile::new_icc(data).map_err(|e| IccError::LoadFailed(e.to_string()))?;
        Self::wrap(inner, pcs)
    }

    /// The built-in lcms sRGB profile.
    pub fn srgb(pcs: ColorType) -> IccResult<Self> {
        Self::wrap(Profile::new_srgb(), pcs)
    }

    fn wrap(inner: Profile, pcs: ColorType) -> IccResult<Self> {
        if !matches!(inner.color_space(), ColorSpaceSignature::RgbData) {
            return Err(IccError::Unsupported {
                role: "data",
                actual: format!("{:?}", inner.color_space()),
            });
        }

        let class = match inner.device_class() {
            ProfileClassSignature::InputClass => ProfileClass::Input,
            ProfileClassSignature::DisplayClass => ProfileClass::Display,
            ProfileClassSignature::OutputClass => ProfileClass::Output,
            ProfileClassSignature::AbstractClass => ProfileClass::Abstract,
            ProfileClassSignature::LinkClass => {
                return Err(IccError::Unsupported {
                    role: "class",
                    actual: ProfileClass::DeviceLink.to_string(),
                });
            }
            _ => ProfileClass::ColorSpace,
        };

        let (pcs_profile, pcs_format) = match pcs {
            ColorType::Xyz => (Profile::new_xyz(), PixelFormat::XYZ_DBL),
            ColorType::Lab => {
                let lab = Profile::new_lab4_context(GlobalContext::new(), &CIExyY::d50())
                    .map_err(|e| IccError::CreateFailed(e.to_string()))?;
                (lab, PixelFormat::Lab_DBL)
            }
            other => return Err(IccError::NotPcs(other)),
        };

        let intent = Intent::RelativeColorimetric;
        let to_pcs = Transform::new(&inner, PixelFormat::RGB_DBL, &pcs_profile, pcs_format, intent)
            .map_err(|e| IccError::CreateFailed(e.to_string()))?;
        let from_pcs = Transform::new(&pcs_profile, pcs_format, &inner, PixelFormat::RGB_DBL, intent)
            .map_err(|e| IccError::CreateFailed(e.to_string()))?;

        let description = inner
            .info(InfoType::Description, Locale::none())
            .unwrap_or_default();

        Ok(Self {
            description,
            class,
            pcs,
            to_pcs,
            from_pcs,
        })
    }
}

#[inline]
fn run(transform: &Transform3, input: &[f64], output: &mut [f64]) {
    let src = [[input[0], input[1], input[2]]];
    let mut dst = [[0.0; 3]];
    transform.transform_pixels(&src, &mut dst);
    output[..3].copy_from_slice(&dst[0]);
}

impl DeviceProfile for LcmsProfile {
    fn description(&self) -> &str {
        &self.description
    }

    fn class(&self) -> ProfileClass {
        self.class
    }

    fn data_colorspace(&self) -> ColorType {
        ColorType::Rgb
    }

    fn pcs(&self) -> ColorType {
        self.pcs
    }

    fn to_pcs(&self, input: &[f64], output: &mut [f64]) {
        run(&self.to_pcs, input, output);
    }

    fn from_pcs(&self, input: &[f64], output: &mut [f64]) {
        run(&self.from_pcs, input, output);
    }
}

impl std::fmt::Debug for LcmsProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LcmsProfile")
            .field("description", &self.description)
            .field("class", &self.class)
            .field("pcs", &self.pcs)
            .finish_non_exhaustive()
    }
}
