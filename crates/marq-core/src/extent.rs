// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

/// A width/height pair: the natural size of a background image, or the
/// synthetic fallback surface when no image resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}
