//! Process-wide registries. Kept in their own test binary since they mutate
//! global state.

use huepath_convert::{
    ColorConverter, ConversionPath, ConversionStep, ConvertError, ConverterOptions,
    add_chromatic_adaptation, add_conversion_path, adaptations, init, paths,
    remove_chromatic_adaptation, remove_conversion_path,
};
use huepath_core::{Color, ColorType, Colorspace, Whitepoint};
use huepath_math::{ChromaticAdaptationMethod, Mat3};

#[test]
fn global_registries() {
    init();
    init();
    assert_eq!(paths().read().unwrap().len(), 256);
    assert_eq!(adaptations().read().unwrap().len(), 3);

    // Registering the default path again is a no-op.
    let lab_luv = ConversionPath::via_xyz(ColorType::Lab, ColorType::Luv);
    assert!(!add_conversion_path(lab_luv.clone()));

    let source = Color::lab(50.0, 10.0, 10.0, Whitepoint::D65);
    let target = Color::zeroed(ColorType::Luv, Colorspace::Cie(Whitepoint::D65)).unwrap();
    let mut converter = ColorConverter::new(source.clone(), target.clone()).unwrap();
    let expected = converter.convert().unwrap().values().to_vec();
    let kernels = converter.kernel_count();

    // A different path for the same pair replaces the default.
    let custom = ConversionPath::new(
        ColorType::Lab,
        ColorType::Luv,
        vec![
            ConversionStep::LabToXyz,
            ConversionStep::XyzToYxy,
            ConversionStep::YxyToXyz,
            ConversionStep::Adapt,
            ConversionStep::XyzToLuv,
        ],
    );
    assert_ne!(custom, lab_luv);
    assert!(add_conversion_path(custom.clone()));
    assert!(!add_conversion_path(custom.clone()));
    assert_eq!(paths().read().unwrap().len(), 256);
    assert_eq!(
        paths().read().unwrap().get(ColorType::Lab, ColorType::Luv),
        Some(&custom)
    );
    // the default is gone, so removal needs the custom path
    assert!(!remove_conversion_path(&lab_luv));

    // Yxy and back cancel, leaving the same program
    let mut converter = ColorConverter::new(source.clone(), target.clone()).unwrap();
    assert_eq!(converter.kernel_count(), kernels);
    let luv = converter.convert().unwrap().values().to_vec();
    for (got, want) in luv.iter().zip(&expected) {
        assert!((got - want).abs() < 1e-9, "{luv:?} != {expected:?}");
    }

    // Removing it makes the pair unresolvable.
    assert!(remove_conversion_path(&custom));
    assert!(!remove_conversion_path(&custom));
    let err = ColorConverter::new(source, target).unwrap_err();
    assert_eq!(
        err,
        ConvertError::NotFound {
            from: ColorType::Lab,
            to: ColorType::Luv
        }
    );

    assert!(add_conversion_path(lab_luv.clone()));
    assert!(!add_conversion_path(lab_luv));

    // Adaptation methods by name.
    let sharp = ChromaticAdaptationMethod::new(
        "Sharp",
        Mat3::from_rows([
            [1.2694, -0.0988, -0.1706],
            [-0.8364, 1.8006, 0.0357],
            [0.0297, -0.0315, 1.0018],
        ]),
    );
    assert!(add_chromatic_adaptation(sharp.clone()));
    assert!(!add_chromatic_adaptation(sharp));

    let source = Color::xyz(0.95047, 1.0, 1.08883, Whitepoint::D65);
    let target = Color::zeroed(ColorType::Xyz, Colorspace::Cie(Whitepoint::D50)).unwrap();
    let options = ConverterOptions::with_adaptation("Sharp");
    let mut converter = ColorConverter::with_options(source.clone(), target.clone(), &options).unwrap();
    let d50 = converter.convert().unwrap().values().to_vec();
    assert!((d50[0] - 0.96422).abs() < 1e-9, "{d50:?}");

    assert!(remove_chromatic_adaptation("Sharp"));
    assert!(!remove_chromatic_adaptation("Sharp"));
    assert_eq!(
        ColorConverter::with_options(source, target, &options).unwrap_err(),
        ConvertError::AdaptationNotFound("Sharp".into())
    );
}
