//! Reference whites.
//!
//! A [`Whitepoint`] carries both its tristimulus values (normalized to
//! `Y = 1`) and its CIE 1931 xy chromaticity. Whitepoints are plain values:
//! two whitepoints are the same white when their numbers are equal.
//!
//! The standard illuminants use the ASTM E308 tristimulus tables for the
//! 2° observer.

/// A reference white.
///
/// # Example
///
/// ```rust
/// use huepath_core::Whitepoint;
///
/// let d65 = Whitepoint::D65;
/// assert_eq!(d65.y(), 1.0);
/// assert!((d65.cx() - 0.3127).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Whitepoint {
    xyz: [f64; 3],
    xy: (f64, f64),
}

impl Whitepoint {
    /// Illuminant A (tungsten, ~2856K).
    pub const A: Self = Self::from_xyz(1.09850, 1.0, 0.35585);
    /// Illuminant B (direct sunlight, obsolete).
    pub const B: Self = Self::from_xyz(0.99072, 1.0, 0.85223);
    /// Illuminant C (average daylight, NTSC).
    pub const C: Self = Self::from_xyz(0.98074, 1.0, 1.18232);
    /// Illuminant D50 (horizon light, ICC PCS white).
    pub const D50: Self = Self::from_xyz(0.96422, 1.0, 0.82521);
    /// Illuminant D55 (mid-morning daylight).
    pub const D55: Self = Self::from_xyz(0.95682, 1.0, 0.92149);
    /// Illuminant D65 (noon daylight, sRGB/Adobe RGB white).
    pub const D65: Self = Self::from_xyz(0.95047, 1.0, 1.08883);
    /// Illuminant D75 (north sky daylight).
    pub const D75: Self = Self::from_xyz(0.94972, 1.0, 1.22638);
    /// Equal-energy illuminant E.
    pub const E: Self = Self::from_xyz(1.0, 1.0, 1.0);
    /// Fluorescent F2 (cool white).
    pub const F2: Self = Self::from_xyz(0.99186, 1.0, 0.67393);
    /// Fluorescent F7 (broadband daylight).
    pub const F7: Self = Self::from_xyz(0.95041, 1.0, 1.08747);
    /// Fluorescent F11 (narrow band white).
    pub const F11: Self = Self::from_xyz(1.00962, 1.0, 0.64350);

    /// Creates a whitepoint from tristimulus values.
    pub const fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        let sum = x + y + z;
        Self {
            xyz: [x, y, z],
            xy: (x / sum, y / sum),
        }
    }

    /// Creates a whitepoint from xy chromaticity, with `Y = 1`.
    ///
    /// ```rust
    /// use huepath_core::Whitepoint;
    ///
    /// let w = Whitepoint::from_xy(0.3127, 0.3290);
    /// assert!((w.x() - 0.95046).abs() < 1e-4);
    /// ```
    pub const fn from_xy(cx: f64, cy: f64) -> Self {
        Self {
            xyz: [cx / cy, 1.0, (1.0 - cx - cy) / cy],
            xy: (cx, cy),
        }
    }

    /// Tristimulus values `[X, Y, Z]`.
    #[inline]
    pub const fn xyz(&self) -> [f64; 3] {
        self.xyz
    }

    /// Tristimulus X.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.xyz[0]
    }

    /// Tristimulus Y.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.xyz[1]
    }

    /// Tristimulus Z.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.xyz[2]
    }

    /// Chromaticity x.
    #[inline]
    pub const fn cx(&self) -> f64 {
        self.xy.0
    }

    /// Chromaticity y.
    #[inline]
    pub const fn cy(&self) -> f64 {
        self.xy.1
    }

    /// CIE 1976 u' chromaticity.
    #[inline]
    pub fn u_prime(&self) -> f64 {
        let [x, y, z] = self.xyz;
        4.0 * x / (x + 15.0 * y + 3.0 * z)
    }

    /// CIE 1976 v' chromaticity.
    #[inline]
    pub fn v_prime(&self) -> f64 {
        let [x, y, z] = self.xyz;
        9.0 * y / (x + 15.0 * y + 3.0 * z)
    }

    /// Looks up a standard illuminant by name (`"D65"`, `"d50"`, `"E"`, ...).
    pub fn by_name(name: &str) -> Option<Self> {
        let w = match name.to_ascii_uppercase().as_str() {
            "A" => Self::A,
            "B" => Self::B,
            "C" => Self::C,
            "D50" => Self::D50,
            "D55" => Self::D55,
            "D65" => Self::D65,
            "D75" => Self::D75,
            "E" => Self::E,
            "F2" => Self::F2,
            "F7" => Self::F7,
            "F11" => Self::F11,
            _ => return None,
        };
        Some(w)
    }
}
