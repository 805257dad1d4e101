//! Abstract Lab → Lab profiles.

use huepath_core::{ColorType, DeviceProfile, ProfileClass};

/// An abstract profile scaling lightness and chroma in Lab (D50).
///
/// Data colorspace and PCS are both Lab. `to_pcs` applies the adjustment,
/// `from_pcs` undoes it.
#[derive(Debug, Clone, PartialEq)]
pub struct LabAbstractProfile {
    description: String,
    lightness: f64,
    chroma: f64,
}

impl LabAbstractProfile {
    /// Creates an abstract profile with the given scale factors.
    pub fn new(lightness: f64, chroma: f64) -> Self {
        Self {
            description: format!("Lab abstract (L x{lightness}, C x{chroma})"),
            lightness,
            chroma,
        }
    }

    /// The identity adjustment.
    pub fn identity() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl DeviceProfile for LabAbstractProfile {
    fn description(&self) -> &str {
        &self.description
    }

    fn class(&self) -> ProfileClass {
        ProfileClass::Abstract
    }

    fn data_colorspace(&self) -> ColorType {
        ColorType::Lab
    }

    fn pcs(&self) -> ColorType {
        ColorType::Lab
    }

    fn to_pcs(&self, input: &[f64], output: &mut [f64]) {
        output[0] = input[0] * self.lightness;
        output[1] = input[1] * self.chroma;
        output[2] = input[2] * self.chroma;
    }

    fn from_pcs(&self, input: &[f64], output: &mut [f64]) {
        output[0] = input[0] / self.lightness;
        output[1] = input[1] / self.chroma;
        output[2] = input[2] / self.chroma;
    }
}
