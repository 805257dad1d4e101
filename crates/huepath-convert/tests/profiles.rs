//! Resolution of profile-anchored colors.

use approx::assert_abs_diff_eq;
use huepath_convert::{
    AdaptationRegistry, ColorConverter, ConversionPathRegistry, ConvertError, ConverterOptions,
};
use huepath_core::{Color, ColorType, Colorspace, DeviceProfile, RgbSpace, Whitepoint};
use huepath_icc::{LabAbstractProfile, MatrixShaperProfile};
use std::sync::Arc;

fn build(source: Color, target: Color) -> Result<ColorConverter, ConvertError> {
    ColorConverter::with_registries(
        source,
        target,
        &ConversionPathRegistry::with_defaults(),
        &AdaptationRegistry::with_defaults(),
        &ConverterOptions::default(),
    )
}

fn device(profile: &Arc<dyn DeviceProfile>, kind: ColorType, values: &[f64]) -> Color {
    Color::new(kind, values, Colorspace::Device(profile.clone())).unwrap()
}

fn srgb_profile() -> Arc<dyn DeviceProfile> {
    Arc::new(MatrixShaperProfile::srgb())
}

#[test]
fn data_to_matching_pcs_is_one_stage() {
    let p = srgb_profile();
    let target = Color::zeroed(ColorType::Xyz, Colorspace::Cie(Whitepoint::D50)).unwrap();
    let mut c = build(device(&p, ColorType::Rgb, &[1.0, 1.0, 1.0]), target).unwrap();
    assert_eq!(c.stage_count(), 1);

    let xyz = c.convert().unwrap().values().to_vec();
    let d50 = Whitepoint::D50.xyz();
    for i in 0..3 {
        assert_abs_diff_eq!(xyz[i], d50[i], epsilon = 1e-9);
    }
}

#[test]
fn data_to_other_plain_is_two_stages() {
    let p = srgb_profile();
    let target = Color::zeroed(ColorType::Lab, Colorspace::Cie(Whitepoint::D65)).unwrap();
    let mut c = build(device(&p, ColorType::Rgb, &[1.0, 1.0, 1.0]), target).unwrap();
    assert_eq!(c.stage_count(), 2);

    let lab = c.convert().unwrap().values().to_vec();
    assert_abs_diff_eq!(lab[0], 100.0, epsilon = 1e-6);
    assert_abs_diff_eq!(lab[1], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(lab[2], 0.0, epsilon = 1e-6);
}

#[test]
fn plain_to_data_mirrors() {
    let p = srgb_profile();
    let source = Color::xyz(0.2, 0.3, 0.4, Whitepoint::D50);
    let target = Color::zeroed(ColorType::Rgb, Colorspace::Device(p.clone())).unwrap();
    assert_eq!(build(source, target).unwrap().stage_count(), 1);

    let source = Color::lab(50.0, 10.0, 10.0, Whitepoint::D65);
    let target = Color::zeroed(ColorType::Rgb, Colorspace::Device(p)).unwrap();
    assert_eq!(build(source, target).unwrap().stage_count(), 2);
}

#[test]
fn data_to_data_with_shared_pcs_is_two_stages() {
    let srgb = srgb_profile();
    let adobe: Arc<dyn DeviceProfile> = Arc::new(MatrixShaperProfile::adobe_rgb());
    let rgb = [0.3, 0.5, 0.7];

    let target = Color::zeroed(ColorType::Rgb, Colorspace::Device(adobe)).unwrap();
    let mut c = build(device(&srgb, ColorType::Rgb, &rgb), target).unwrap();
    assert_eq!(c.stage_count(), 2);
    let via_profiles = c.convert().unwrap().values().to_vec();

    // Same result as the plain RGB → RGB path: both spaces share D65.
    let plain_src = Color::rgb(rgb[0], rgb[1], rgb[2], Arc::new(RgbSpace::srgb()));
    let plain_dst =
        Color::zeroed(ColorType::Rgb, Colorspace::from(RgbSpace::adobe_rgb())).unwrap();
    let mut plain = build(plain_src, plain_dst).unwrap();
    let direct = plain.convert().unwrap().values().to_vec();
    for i in 0..3 {
        assert_abs_diff_eq!(via_profiles[i], direct[i], epsilon = 1e-9);
    }
}

#[test]
fn data_to_data_across_pcs_types_is_three_stages() {
    let srgb = srgb_profile();
    let abs: Arc<dyn DeviceProfile> = Arc::new(LabAbstractProfile::identity());

    let target = Color::zeroed(ColorType::Lab, Colorspace::Device(abs)).unwrap();
    let mut c = build(device(&srgb, ColorType::Rgb, &[1.0, 1.0, 1.0]), target).unwrap();
    assert_eq!(c.stage_count(), 3);
    let lab = c.convert().unwrap().values().to_vec();
    assert_abs_diff_eq!(lab[0], 100.0, epsilon = 1e-6);
}

#[test]
fn pcs_role_behaves_as_plain() {
    let p = srgb_profile();
    let source = device(&p, ColorType::Xyz, &Whitepoint::D50.xyz());
    let target = Color::zeroed(ColorType::Lab, Colorspace::Cie(Whitepoint::D50)).unwrap();
    let mut c = build(source, target).unwrap();
    assert_eq!(c.stage_count(), 1);
    let lab = c.convert().unwrap().values().to_vec();
    assert_abs_diff_eq!(lab[0], 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(lab[1], 0.0, epsilon = 1e-9);
}

#[test]
fn abstract_profile_takes_data_role() {
    let abs: Arc<dyn DeviceProfile> = Arc::new(LabAbstractProfile::new(1.0, 0.5));
    let source = Color::lab(60.0, 20.0, -10.0, Whitepoint::D50);
    let target = Color::zeroed(ColorType::Lab, Colorspace::Device(abs.clone())).unwrap();
    let mut c = build(source, target).unwrap();
    // PCS Lab D50 already: only the profile runs.
    assert_eq!(c.stage_count(), 1);
    c.convert().unwrap();

    let source = Color::lab(60.0, 20.0, -10.0, Whitepoint::D65);
    let target = Color::zeroed(ColorType::Lab, Colorspace::Device(abs)).unwrap();
    assert_eq!(build(source, target).unwrap().stage_count(), 2);
}

#[test]
fn device_round_trip() {
    let p = srgb_profile();
    let src = device(&p, ColorType::Rgb, &[0.2, 0.4, 0.6]);
    let lab = Color::zeroed(ColorType::Lab, Colorspace::Cie(Whitepoint::D65)).unwrap();
    let mut there = build(src.clone(), lab).unwrap();
    let lab = there.convert().unwrap().clone();

    let mut back = build(lab, Color::zeroed(ColorType::Rgb, src.space().clone()).unwrap()).unwrap();
    let rgb = back.convert().unwrap();
    for (a, b) in rgb.values().iter().zip(src.values()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
    }
}

#[test]
fn missing_pcs_hop_is_not_found() {
    let p = srgb_profile();
    let mut paths = ConversionPathRegistry::with_defaults();
    let hop = paths.get(ColorType::Xyz, ColorType::Luv).unwrap().clone();
    assert!(paths.remove(&hop));

    let target = Color::zeroed(ColorType::Luv, Colorspace::Cie(Whitepoint::D50)).unwrap();
    let err = ColorConverter::with_registries(
        device(&p, ColorType::Rgb, &[0.5; 3]),
        target,
        &paths,
        &AdaptationRegistry::with_defaults(),
        &ConverterOptions::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ConvertError::NotFound {
            from: ColorType::Xyz,
            to: ColorType::Luv
        }
    );
}
