// Author: Dustin Pilgrim
// License: MIT

use marq_core::Rect;

/// Grab tolerance around a guide, in bounds-space units. Deliberately not
/// scaled: the comparison happens in the same space as the coordinates.
pub const EDGE_TOLERANCE: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    None,
    Move,
    Left,
    Right,
    Top,
    Bottom,
}

/// Classify a bounds-space pointer position against the rectangle.
///
/// Guides run the full length of the surface, so an edge band matches at any
/// perpendicular offset. Order is part of the contract: left, right, top,
/// bottom, then strict interior; near a corner the earlier edge wins.
pub fn classify(rect: Rect, px: i32, py: i32) -> Hit {
    if (px - rect.x).abs() < EDGE_TOLERANCE {
        return Hit::Left;
    }
    if (px - rect.right()).abs() < EDGE_TOLERANCE {
        return Hit::Right;
    }
    if (py - rect.y).abs() < EDGE_TOLERANCE {
        return Hit::Top;
    }
    if (py - rect.bottom()).abs() < EDGE_TOLERANCE {
        return Hit::Bottom;
    }
    if rect.contains(px, py) {
        return Hit::Move;
    }
    Hit::None
}
