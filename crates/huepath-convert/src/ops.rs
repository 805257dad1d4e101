//! Per-value colorimetric formulas.
//!
//! Every function works on plain `[f64; 3]` triples. Hue angles are in
//! degrees, normalized to `[0, 360)`. CIE functions take the reference white
//! as XYZ tristimulus values.

use huepath_core::{CIE_EPSILON, CIE_KAPPA, Din99Params};

/// Wraps an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative input
    if h >= 360.0 { 0.0 } else { h }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        (CIE_KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let f3 = f * f * f;
    if f3 > CIE_EPSILON {
        f3
    } else {
        (116.0 * f - 16.0) / CIE_KAPPA
    }
}

/// XYZ → L*a*b*.
pub fn xyz_to_lab(xyz: [f64; 3], white: [f64; 3]) -> [f64; 3] {
    let fx = lab_f(xyz[0] / white[0]);
    let fy = lab_f(xyz[1] / white[1]);
    let fz = lab_f(xyz[2] / white[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// L*a*b* → XYZ.
pub fn lab_to_xyz(lab: [f64; 3], white: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab;
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;
    let yr = if l > CIE_KAPPA * CIE_EPSILON {
        fy * fy * fy
    } else {
        l / CIE_KAPPA
    };
    [lab_f_inv(fx) * white[0], yr * white[1], lab_f_inv(fz) * white[2]]
}

#[inline]
fn uv_prime(xyz: [f64; 3]) -> (f64, f64) {
    let d = xyz[0] + 15.0 * xyz[1] + 3.0 * xyz[2];
    if d == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * xyz[0] / d, 9.0 * xyz[1] / d)
    }
}

/// XYZ → L*u*v*.
pub fn xyz_to_luv(xyz: [f64; 3], white: [f64; 3]) -> [f64; 3] {
    let yr = xyz[1] / white[1];
    let l = if yr > CIE_EPSILON {
        116.0 * yr.cbrt() - 16.0
    } else {
        CIE_KAPPA * yr
    };
    if xyz[0] + 15.0 * xyz[1] + 3.0 * xyz[2] == 0.0 {
        return [l, 0.0, 0.0];
    }
    let (u, v) = uv_prime(xyz);
    let (uw, vw) = uv_prime(white);
    [l, 13.0 * l * (u - uw), 13.0 * l * (v - vw)]
}

/// L*u*v* → XYZ.
pub fn luv_to_xyz(luv: [f64; 3], white: [f64; 3]) -> [f64; 3] {
    let [l, u, v] = luv;
    if l == 0.0 {
        return [0.0; 3];
    }
    let (uw, vw) = uv_prime(white);
    let y = if l > CIE_KAPPA * CIE_EPSILON {
        ((l + 16.0) / 116.0).powi(3)
    } else {
        l / CIE_KAPPA
    } * white[1];
    let up = u / (13.0 * l) + uw;
    let vp = v / (13.0 * l) + vw;
    [
        y * 9.0 * up / (4.0 * vp),
        y,
        y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp),
    ]
}

/// Rectangular `[L, a, b]` → cylindrical `[L, C, h]`. Shared by Lab and Luv.
pub fn rect_to_cyl(v: [f64; 3]) -> [f64; 3] {
    [v[0], v[1].hypot(v[2]), normalize_hue(v[2].atan2(v[1]).to_degrees())]
}

/// Cylindrical `[L, C, h]` → rectangular `[L, a, b]`.
pub fn cyl_to_rect(v: [f64; 3]) -> [f64; 3] {
    let (s, c) = v[2].to_radians().sin_cos();
    [v[0], v[1] * c, v[1] * s]
}

/// XYZ → `[Y, x, y]`. Black takes the white's chromaticity.
pub fn xyz_to_yxy(xyz: [f64; 3], white: [f64; 3]) -> [f64; 3] {
    let sum = xyz[0] + xyz[1] + xyz[2];
    if sum == 0.0 {
        let ws = white[0] + white[1] + white[2];
        return [xyz[1], white[0] / ws, white[1] / ws];
    }
    [xyz[1], xyz[0] / sum, xyz[1] / sum]
}

/// `[Y, x, y]` → XYZ.
pub fn yxy_to_xyz(yxy: [f64; 3]) -> [f64; 3] {
    let [big_y, x, y] = yxy;
    if y == 0.0 {
        return [0.0; 3];
    }
    [x * big_y / y, big_y, (1.0 - x - y) * big_y / y]
}

/// Hue (degrees) shared by HSV and HSL, with the max/min of the triple.
#[inline]
fn hue_of(rgb: [f64; 3]) -> (f64, f64, f64) {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    (normalize_hue(h), max, min)
}

/// Chroma, hue and offset → RGB.
#[inline]
fn from_hue(h: f64, c: f64, m: f64) -> [f64; 3] {
    let hp = normalize_hue(h) / 60.0;
    let x = c * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}

/// RGB → `[h, s, v]`.
pub fn rgb_to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let (h, max, min) = hue_of(rgb);
    let s = if max == 0.0 { 0.0 } else { (max - min) / max };
    [h, s, max]
}

/// `[h, s, v]` → RGB.
pub fn hsv_to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let [h, s, v] = hsv;
    let c = v * s;
    from_hue(h, c, v - c)
}

/// RGB → `[h, s, l]`.
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let (h, max, min) = hue_of(rgb);
    let l = (max + min) / 2.0;
    let delta = max - min;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    [h, s, l]
}

/// `[h, s, l]` → RGB.
pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    from_hue(h, c, l - c / 2.0)
}

/// `1 − v` per channel; converts RGB ↔ CMY in both directions.
#[inline]
pub fn complement(v: [f64; 3]) -> [f64; 3] {
    [1.0 - v[0], 1.0 - v[1], 1.0 - v[2]]
}

/// CMY → CMYK, extracting black as the smallest component.
pub fn cmy_to_cmyk(cmy: [f64; 3]) -> [f64; 4] {
    let k = cmy[0].min(cmy[1]).min(cmy[2]);
    if k >= 1.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }
    let s = 1.0 - k;
    [(cmy[0] - k) / s, (cmy[1] - k) / s, (cmy[2] - k) / s, k]
}

/// CMYK → CMY.
pub fn cmyk_to_cmy(cmyk: [f64; 4]) -> [f64; 3] {
    let k = cmyk[3];
    let s = 1.0 - k;
    [cmyk[0] * s + k, cmyk[1] * s + k, cmyk[2] * s + k]
}

/// `X' = f·X − (f − 1)·Z`, the modified tristimulus of DIN99c/d.
#[inline]
fn din99_modify(xyz: [f64; 3], f: f64) -> [f64; 3] {
    [f * xyz[0] - (f - 1.0) * xyz[2], xyz[1], xyz[2]]
}

#[inline]
fn din99_unmodify(xyz: [f64; 3], f: f64) -> [f64; 3] {
    [(xyz[0] + (f - 1.0) * xyz[2]) / f, xyz[1], xyz[2]]
}

/// L*a*b* → `[L99, C99, h99]`.
pub fn lab_to_din99(lab: [f64; 3], p: &Din99Params) -> [f64; 3] {
    let [l, a, b] = lab;
    let (s, c) = p.angle.to_radians().sin_cos();
    let e = a * c + b * s;
    let f = (-a * s + b * c) * p.f_factor;
    let g = e.hypot(f);
    [
        p.l_scale * (1.0 + p.l_coef * l).ln(),
        p.c_scale * (1.0 + p.c_coef * g).ln(),
        normalize_hue(f.atan2(e).to_degrees() + p.hue_offset),
    ]
}

/// `[L99, C99, h99]` → L*a*b*.
pub fn din99_to_lab(lch: [f64; 3], p: &Din99Params) -> [f64; 3] {
    let [l99, c99, h99] = lch;
    let l = ((l99 / p.l_scale).exp() - 1.0) / p.l_coef;
    let g = ((c99 / p.c_scale).exp() - 1.0) / p.c_coef;
    let (hs, hc) = (h99 - p.hue_offset).to_radians().sin_cos();
    let e = g * hc;
    let f = g * hs / p.f_factor;
    let (s, c) = p.angle.to_radians().sin_cos();
    [l, e * c - f * s, e * s + f * c]
}

/// XYZ → DIN99 cylindrical, through Lab of the (possibly modified) tristimulus.
pub fn xyz_to_din99(xyz: [f64; 3], white: [f64; 3], p: &Din99Params) -> [f64; 3] {
    let lab = xyz_to_lab(din99_modify(xyz, p.x_factor), din99_modify(white, p.x_factor));
    lab_to_din99(lab, p)
}

/// DIN99 cylindrical → XYZ.
pub fn din99_to_xyz(lch: [f64; 3], white: [f64; 3], p: &Din99Params) -> [f64; 3] {
    let lab = din99_to_lab(lch, p);
    din99_unmodify(lab_to_xyz(lab, din99_modify(white, p.x_factor)), p.x_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use huepath_core::{Din99Variant, Whitepoint};

    const D65: [f64; 3] = [0.95047, 1.0, 1.08883];

    fn assert_close(a: [f64; 3], b: [f64; 3], eps: f64) {
        for i in 0..3 {
            assert_abs_diff_eq!(a[i], b[i], epsilon = eps);
        }
    }

    #[test]
    fn test_white_is_l100() {
        assert_close(xyz_to_lab(D65, D65), [100.0, 0.0, 0.0], 1e-12);
        assert_close(xyz_to_luv(D65, D65), [100.0, 0.0, 0.0], 1e-12);
    }

    #[test]
    fn test_lab_known_value() {
        // sRGB red under D65
        let red = [0.4124564, 0.2126729, 0.0193339];
        assert_close(xyz_to_lab(red, D65), [53.2408, 80.0925, 67.2032], 1e-3);
    }

    #[test]
    fn test_lab_roundtrip_dark_and_bright() {
        for xyz in [[0.001, 0.0008, 0.002], [0.3, 0.25, 0.6], [0.9, 0.95, 1.0]] {
            assert_close(lab_to_xyz(xyz_to_lab(xyz, D65), D65), xyz, 1e-12);
            assert_close(luv_to_xyz(xyz_to_luv(xyz, D65), D65), xyz, 1e-12);
        }
    }

    #[test]
    fn test_luv_black() {
        assert_eq!(xyz_to_luv([0.0; 3], D65), [0.0; 3]);
        assert_eq!(luv_to_xyz([0.0; 3], D65), [0.0; 3]);
    }

    #[test]
    fn test_lch_hue_range() {
        let lch = rect_to_cyl([50.0, 0.0, -20.0]);
        assert_abs_diff_eq!(lch[1], 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lch[2], 270.0, epsilon = 1e-12);
        assert_close(cyl_to_rect(lch), [50.0, 0.0, -20.0], 1e-12);
    }

    #[test]
    fn test_yxy_black_takes_white() {
        let yxy = xyz_to_yxy([0.0; 3], D65);
        assert_abs_diff_eq!(yxy[1], Whitepoint::D65.cx(), epsilon = 1e-12);
        assert_eq!(yxy_to_xyz(yxy), [0.0; 3]);
    }

    #[test]
    fn test_hsv_hsl() {
        assert_close(rgb_to_hsv([1.0, 0.0, 0.0]), [0.0, 1.0, 1.0], 1e-12);
        assert_close(rgb_to_hsv([0.0, 0.0, 1.0]), [240.0, 1.0, 1.0], 1e-12);
        assert_close(rgb_to_hsl([0.0, 1.0, 0.0]), [120.0, 1.0, 0.5], 1e-12);
        assert_close(rgb_to_hsv([1.0, 0.0, 0.5]), [330.0, 1.0, 1.0], 1e-12);
        for rgb in [[0.2, 0.4, 0.6], [0.9, 0.1, 0.3], [0.5, 0.5, 0.5]] {
            assert_close(hsv_to_rgb(rgb_to_hsv(rgb)), rgb, 1e-12);
            assert_close(hsl_to_rgb(rgb_to_hsl(rgb)), rgb, 1e-12);
        }
    }

    #[test]
    fn test_cmyk() {
        let cmyk = cmy_to_cmyk([0.2, 0.5, 0.7]);
        assert_abs_diff_eq!(cmyk[3], 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(cmyk[0], 0.0, epsilon = 1e-12);
        assert_close(cmyk_to_cmy(cmyk), [0.2, 0.5, 0.7], 1e-12);
        assert_eq!(cmy_to_cmyk([1.0; 3]), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_din99_reference() {
        let p = Din99Variant::Din99.params();
        let lch = lab_to_din99([50.0, 10.0, 10.0], &p);
        assert_abs_diff_eq!(lch[0], 61.429570, epsilon = 1e-6);
        assert_abs_diff_eq!(lch[1], 10.403325, epsilon = 1e-6);
        assert_abs_diff_eq!(lch[2], 21.207067, epsilon = 1e-6);
    }

    #[test]
    fn test_din99_roundtrip_all_variants() {
        for v in [Din99Variant::Din99, Din99Variant::Din99b, Din99Variant::Din99c, Din99Variant::Din99d] {
            let p = v.params();
            for lab in [[50.0, 10.0, 10.0], [20.0, -40.0, 5.0], [90.0, 3.0, -60.0]] {
                assert_close(din99_to_lab(lab_to_din99(lab, &p), &p), lab, 1e-10);
            }
            let xyz = [0.3, 0.25, 0.6];
            assert_close(din99_to_xyz(xyz_to_din99(xyz, D65, &p), D65, &p), xyz, 1e-12);
        }
    }
}
