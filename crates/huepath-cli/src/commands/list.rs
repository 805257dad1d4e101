//! Lists what the other commands accept.

use anyhow::Result;
use huepath_core::{ColorType, Preset, RgbSpace, Whitepoint};

const WHITES: [&str; 11] = ["A", "B", "C", "D50", "D55", "D65", "D75", "E", "F2", "F7", "F11"];

pub fn run() -> Result<()> {
    huepath_convert::init();

    println!("Color types:");
    for kind in ColorType::ALL {
        println!("  {:<8} {} channel(s)", kind.name(), kind.channels());
    }

    println!("\nWhite points:");
    for name in WHITES {
        if let Some(w) = Whitepoint::by_name(name) {
            println!("  {:<4} x={:.5} y={:.5}", name, w.cx(), w.cy());
        }
    }

    println!("\nRGB spaces:");
    for preset in Preset::ALL {
        let space = RgbSpace::preset(preset);
        println!("  {:<18} white x={:.4}", space.name(), space.white().cx());
    }

    println!("\nAdaptation methods:");
    let registry = huepath_convert::adaptations()
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    for name in registry.names() {
        println!("  {name}");
    }
    Ok(())
}
