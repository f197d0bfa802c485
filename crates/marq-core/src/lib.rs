// Author: Dustin Pilgrim
// License: MIT

pub mod extent;
pub mod fields;
pub mod presets;
pub mod rect;

pub use extent::Extent;
pub use fields::{FieldKey, FieldValues};
pub use presets::{ModelFamily, Orientation, SizeTier};
pub use rect::Rect;
