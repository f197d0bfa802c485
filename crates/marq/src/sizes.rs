// Author: Dustin Pilgrim
// License: MIT

use marq_core::presets::{self, ModelFamily, Orientation, SizeTier};

pub fn run(
    family: ModelFamily,
    tier: SizeTier,
    aspect: Option<&str>,
    orientation: Orientation,
) -> Result<(), String> {
    match aspect {
        Some(aspect) => {
            let (w, h) = presets::pick(family, tier, aspect, orientation);
            println!("{w}x{h}");
        }
        None => {
            for preset in family.table(tier) {
                let (w, h) = presets::pick(family, tier, preset.aspect, orientation);
                println!("{:>5}  {}x{}", preset.aspect, w, h);
            }
        }
    }
    Ok(())
}
