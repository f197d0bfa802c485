// Author: Dustin Pilgrim
// License: MIT
//
// Known-good generation sizes per model family. Tables are fixed grids the
// models were tuned on, not arbitrary math; keep them verbatim.

use serde::{Deserialize, Serialize};

#[cfg(feature = "clap")]
use clap::ValueEnum;

#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ModelFamily {
    Sd15,
    Sdxl,
    Flux,
    Qwen,
    Wan5b,
    Wan14b,
}

/// Size tier within a family: `Base` is the native grid (1.0x, or 480p for
/// the video families), `Large` the scaled-up one (1.5x / 720p).
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SizeTier {
    Base,
    Large,
}

#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One table row: dimensions before orientation swapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePreset {
    pub aspect: &'static str,
    pub width: i32,
    pub height: i32,
}

const fn p(aspect: &'static str, width: i32, height: i32) -> SizePreset {
    SizePreset { aspect, width, height }
}

const SD15_1X: &[SizePreset] = &[
    p("1:1", 512, 512),
    p("3:2", 768, 512),
    p("2:3", 512, 768),
    p("4:3", 768, 576),
    p("16:9", 912, 512),
];

const SD15_15X: &[SizePreset] = &[
    p("1:1", 768, 768),
    p("3:2", 1152, 768),
    p("2:3", 768, 1152),
    p("4:3", 1152, 864),
    p("16:9", 1360, 768),
];

const SDXL_1X: &[SizePreset] = &[
    p("1:1", 1024, 1024),
    p("3:2", 1216, 832),
    p("2:3", 832, 1216),
    p("4:3", 1152, 864),
    p("3:4", 864, 1152),
    p("16:9", 1344, 768),
    p("21:9", 1536, 640),
];

const SDXL_15X: &[SizePreset] = &[
    p("1:1", 1536, 1536),
    p("3:2", 1824, 1216),
    p("2:3", 1216, 1824),
    p("4:3", 1728, 1296),
    p("3:4", 1296, 1728),
    p("16:9", 2016, 1152),
    p("21:9", 2304, 960),
];

const FLUX_1X: &[SizePreset] = &[
    p("1:1", 1024, 1024),
    p("2:3", 832, 1216),
    p("4:3", 1152, 896),
    p("16:9", 1344, 768),
    p("21:9", 1536, 640),
];

const FLUX_15X: &[SizePreset] = &[
    p("1:1", 1536, 1536),
    p("2:3", 1248, 1824),
    p("4:3", 1728, 1344),
    p("16:9", 2016, 1152),
    p("21:9", 2304, 960),
];

const QWEN_1X: &[SizePreset] = &[
    p("1:1", 1328, 1328),
    p("2:3", 1056, 1584),
    p("4:3", 1472, 1104),
    p("16:9", 1664, 928),
    p("21:9", 1536, 640),
];

const QWEN_15X: &[SizePreset] = &[
    p("1:1", 1992, 1992),
    p("2:3", 1584, 2376),
    p("4:3", 2208, 1656),
    p("16:9", 2496, 1392),
    p("21:9", 2304, 960),
];

// Both WAN sizes share the 480p grid.
const WAN_480P: &[SizePreset] = &[
    p("16:9", 832, 480),
    p("9:16", 480, 832),
    p("4:3", 640, 480),
    p("3:4", 480, 640),
    p("1:1", 576, 576),
    p("21:9", 896, 384),
    p("9:21", 384, 896),
    p("3:2", 720, 480),
    p("2:3", 480, 720),
];

// 5B uses a native 708px short side at the 720p tier.
const WAN5B_720P: &[SizePreset] = &[
    p("16:9", 1280, 708),
    p("9:16", 708, 1280),
    p("4:3", 944, 708),
    p("3:4", 708, 944),
    p("1:1", 708, 708),
    p("21:9", 1652, 708),
    p("9:21", 708, 1652),
    p("3:2", 1062, 708),
    p("2:3", 708, 1062),
];

const WAN14B_720P: &[SizePreset] = &[
    p("16:9", 1280, 720),
    p("9:16", 720, 1280),
    p("4:3", 960, 720),
    p("3:4", 720, 960),
    p("1:1", 720, 720),
    p("21:9", 1680, 720),
    p("9:21", 720, 1680),
    p("3:2", 1080, 720),
    p("2:3", 720, 1080),
];

impl ModelFamily {
    pub fn table(self, tier: SizeTier) -> &'static [SizePreset] {
        match (self, tier) {
            (ModelFamily::Sd15, SizeTier::Base) => SD15_1X,
            (ModelFamily::Sd15, SizeTier::Large) => SD15_15X,
            (ModelFamily::Sdxl, SizeTier::Base) => SDXL_1X,
            (ModelFamily::Sdxl, SizeTier::Large) => SDXL_15X,
            (ModelFamily::Flux, SizeTier::Base) => FLUX_1X,
            (ModelFamily::Flux, SizeTier::Large) => FLUX_15X,
            (ModelFamily::Qwen, SizeTier::Base) => QWEN_1X,
            (ModelFamily::Qwen, SizeTier::Large) => QWEN_15X,
            (ModelFamily::Wan5b, SizeTier::Base) => WAN_480P,
            (ModelFamily::Wan5b, SizeTier::Large) => WAN5B_720P,
            (ModelFamily::Wan14b, SizeTier::Base) => WAN_480P,
            (ModelFamily::Wan14b, SizeTier::Large) => WAN14B_720P,
        }
    }

    pub fn default_aspect(self) -> &'static str {
        match self {
            ModelFamily::Wan5b | ModelFamily::Wan14b => "16:9",
            _ => "1:1",
        }
    }
}

/// Resolve a (width, height) for the given family/tier/aspect.
///
/// Unknown aspects fall back to the family default; orientation then decides
/// which axis gets the larger dimension. Never fails.
pub fn pick(
    family: ModelFamily,
    tier: SizeTier,
    aspect: &str,
    orientation: Orientation,
) -> (i32, i32) {
    let table = family.table(tier);
    let preset = table
        .iter()
        .find(|pr| pr.aspect == aspect)
        .or_else(|| table.iter().find(|pr| pr.aspect == family.default_aspect()))
        .unwrap_or(&table[0]);

    let (larger, smaller) = if preset.width >= preset.height {
        (preset.width, preset.height)
    } else {
        (preset.height, preset.width)
    };

    match orientation {
        Orientation::Horizontal => (larger, smaller),
        Orientation::Vertical => (smaller, larger),
    }
}
