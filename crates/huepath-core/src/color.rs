//! Color values.

use crate::{
    ColorType, Colorspace, CoreError, CoreResult, DeviceProfile, ProfileClass, RgbSpace,
    Whitepoint,
};
use std::sync::Arc;

/// Largest channel count of any [`ColorType`].
pub const MAX_CHANNELS: usize = 4;

/// A color: a type, its channel values and the colorspace they refer to.
///
/// The channel array has a fixed length; only the first
/// [`ColorType::channels`] entries are meaningful.
///
/// # Example
///
/// ```rust
/// use huepath_core::{Color, ColorType, Colorspace, Whitepoint};
///
/// let lab = Color::new(ColorType::Lab, &[50.0, 10.0, -10.0], Colorspace::Cie(Whitepoint::D65))?;
/// assert_eq!(lab.values(), &[50.0, 10.0, -10.0]);
///
/// // Wrong channel count
/// assert!(Color::new(ColorType::Lab, &[50.0, 10.0], Colorspace::Cie(Whitepoint::D65)).is_err());
/// # Ok::<(), huepath_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    kind: ColorType,
    values: [f64; MAX_CHANNELS],
    space: Colorspace,
}

impl Color {
    /// Creates a color, validating channel count and colorspace.
    ///
    /// # Errors
    ///
    /// - [`CoreError::ChannelCount`] when `values` has the wrong length
    /// - [`CoreError::ColorspaceMismatch`] when the type's family does not
    ///   fit a plain colorspace
    /// - [`CoreError::ProfileRole`] when the type is neither the profile's
    ///   data colorspace nor its PCS
    /// - [`CoreError::DeviceLink`] for device link profiles
    pub fn new(kind: ColorType, values: &[f64], space: Colorspace) -> CoreResult<Self> {
        check_channels(kind, values)?;
        match &space {
            Colorspace::Device(profile) => check_profile(kind, profile.as_ref())?,
            plain if !plain.carries_family(kind) => {
                return Err(CoreError::ColorspaceMismatch {
                    kind,
                    space: plain.to_string(),
                });
            }
            _ => {}
        }

        let mut buf = [0.0; MAX_CHANNELS];
        buf[..values.len()].copy_from_slice(values);
        Ok(Self {
            kind,
            values: buf,
            space,
        })
    }

    /// Creates a color with every channel at zero.
    pub fn zeroed(kind: ColorType, space: Colorspace) -> CoreResult<Self> {
        Self::new(kind, &[0.0; MAX_CHANNELS][..kind.channels()], space)
    }

    fn cie(kind: ColorType, v: [f64; 3], white: Whitepoint) -> Self {
        Self {
            kind,
            values: [v[0], v[1], v[2], 0.0],
            space: Colorspace::Cie(white),
        }
    }

    /// XYZ color.
    pub fn xyz(x: f64, y: f64, z: f64, white: Whitepoint) -> Self {
        Self::cie(ColorType::Xyz, [x, y, z], white)
    }

    /// Lab color.
    pub fn lab(l: f64, a: f64, b: f64, white: Whitepoint) -> Self {
        Self::cie(ColorType::Lab, [l, a, b], white)
    }

    /// Luv color.
    pub fn luv(l: f64, u: f64, v: f64, white: Whitepoint) -> Self {
        Self::cie(ColorType::Luv, [l, u, v], white)
    }

    /// LCHab color, hue in degrees.
    pub fn lch_ab(l: f64, c: f64, h: f64, white: Whitepoint) -> Self {
        Self::cie(ColorType::LchAb, [l, c, h], white)
    }

    /// LCHuv color, hue in degrees.
    pub fn lch_uv(l: f64, c: f64, h: f64, white: Whitepoint) -> Self {
        Self::cie(ColorType::LchUv, [l, c, h], white)
    }

    /// Encoded RGB color.
    pub fn rgb(r: f64, g: f64, b: f64, space: Arc<RgbSpace>) -> Self {
        Self {
            kind: ColorType::Rgb,
            values: [r, g, b, 0.0],
            space: Colorspace::Rgb(space),
        }
    }

    /// Color type.
    #[inline]
    pub fn kind(&self) -> ColorType {
        self.kind
    }

    /// Channel values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values[..self.kind.channels()]
    }

    /// Mutable channel values.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [f64] {
        let n = self.kind.channels();
        &mut self.values[..n]
    }

    /// Replaces the channel values.
    pub fn set_values(&mut self, values: &[f64]) -> CoreResult<()> {
        check_channels(self.kind, values)?;
        self.values_mut().copy_from_slice(values);
        Ok(())
    }

    /// Colorspace.
    #[inline]
    pub fn space(&self) -> &Colorspace {
        &self.space
    }

    /// Reference white of the colorspace.
    #[inline]
    pub fn reference_white(&self) -> Whitepoint {
        self.space.reference_white()
    }

    /// The anchoring profile, if any.
    pub fn profile(&self) -> Option<&Arc<dyn DeviceProfile>> {
        self.space.profile()
    }

    /// True when the color is tied to a device profile.
    pub fn is_profile_associated(&self) -> bool {
        self.profile().is_some()
    }

    /// True when every channel lies within the type's nominal bounds.
    pub fn in_bounds(&self) -> bool {
        self.values()
            .iter()
            .zip(self.kind.bounds())
            .all(|(v, (lo, hi))| (*lo..=*hi).contains(v))
    }
}

fn check_channels(kind: ColorType, values: &[f64]) -> CoreResult<()> {
    if values.len() != kind.channels() {
        return Err(CoreError::ChannelCount {
            kind,
            expected: kind.channels(),
            actual: values.len(),
        });
    }
    Ok(())
}

fn check_profile(kind: ColorType, profile: &dyn DeviceProfile) -> CoreResult<()> {
    if profile.class() == ProfileClass::DeviceLink {
        return Err(CoreError::DeviceLink(profile.description().to_string()));
    }
    if kind != profile.data_colorspace() && kind != profile.pcs() {
        return Err(CoreError::ProfileRole {
            kind,
            data: profile.data_colorspace(),
            pcs: profile.pcs(),
            profile: profile.description().to_string(),
        });
    }
    Ok(())
}
