// Author: Dustin Pilgrim
// License: MIT

use crate::hit::{Hit, classify};
use crate::model::GeometryModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Left,
    Right,
    Top,
    Bottom,
}

/// Transient drag state. The pointer-to-corner offset exists only while
/// moving; it keeps the rectangle from snapping its corner to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Moving { offset_x: i32, offset_y: i32 },
    Resizing(EdgeKind),
}

/// Turns a pointer-down/move/up sequence into GeometryModel mutations.
/// All coordinates are bounds-space.
#[derive(Debug)]
pub struct DragController {
    state: DragState,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self { state: DragState::Idle }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == DragState::Idle
    }

    /// Start a drag if the pointer lands on the rectangle or a guide.
    /// Returns whether a drag began; pressing on empty space stays idle.
    pub fn pointer_down(&mut self, model: &GeometryModel, px: i32, py: i32) -> bool {
        let rect = model.rect();
        self.state = match classify(rect, px, py) {
            Hit::None => DragState::Idle,
            Hit::Move => DragState::Moving {
                offset_x: px - rect.x,
                offset_y: py - rect.y,
            },
            Hit::Left => DragState::Resizing(EdgeKind::Left),
            Hit::Right => DragState::Resizing(EdgeKind::Right),
            Hit::Top => DragState::Resizing(EdgeKind::Top),
            Hit::Bottom => DragState::Resizing(EdgeKind::Bottom),
        };
        !self.is_idle()
    }

    /// Route a pointer-move to the model. Returns whether the model was
    /// touched (callers re-sync fields and redraw on `true`).
    pub fn pointer_move(&mut self, model: &mut GeometryModel, px: i32, py: i32) -> bool {
        match self.state {
            DragState::Idle => false,
            DragState::Moving { offset_x, offset_y } => {
                let rect = model.rect();
                model.translate(px - offset_x - rect.x, py - offset_y - rect.y);
                true
            }
            DragState::Resizing(EdgeKind::Left) => {
                model.set_left_edge(px);
                true
            }
            DragState::Resizing(EdgeKind::Right) => {
                model.set_right_edge(px);
                true
            }
            DragState::Resizing(EdgeKind::Top) => {
                model.set_top_edge(py);
                true
            }
            DragState::Resizing(EdgeKind::Bottom) => {
                model.set_bottom_edge(py);
                true
            }
        }
    }

    /// Unconditional: any release ends the drag, wherever the pointer is.
    pub fn pointer_up(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marq_core::{Extent, Rect};

    fn model() -> GeometryModel {
        let mut m = GeometryModel::new(Rect::new(100, 100, 200, 150));
        m.set_bounds(Extent::new(800, 600));
        m
    }

    #[test]
    fn down_on_empty_space_stays_idle() {
        let m = model();
        let mut drag = DragController::new();
        assert!(!drag.pointer_down(&m, 10, 10));
        assert!(drag.is_idle());

        let mut m = m;
        assert!(!drag.pointer_move(&mut m, 50, 50));
        assert_eq!(m.rect(), Rect::new(100, 100, 200, 150));
    }

    #[test]
    fn move_drag_keeps_the_grab_offset() {
        let mut m = model();
        let mut drag = DragController::new();
        // grab 30,20 inside the rectangle
        assert!(drag.pointer_down(&m, 130, 120));
        assert_eq!(drag.state(), DragState::Moving { offset_x: 30, offset_y: 20 });

        drag.pointer_move(&mut m, 230, 140);
        assert_eq!(m.rect(), Rect::new(200, 120, 200, 150));

        // offset stays stable across further moves
        drag.pointer_move(&mut m, 231, 141);
        assert_eq!(m.rect(), Rect::new(201, 121, 200, 150));
    }

    #[test]
    fn edge_drags_dispatch_to_the_matching_setter() {
        let mut m = model();
        let mut drag = DragController::new();
        assert!(drag.pointer_down(&m, 300, 170));
        assert_eq!(drag.state(), DragState::Resizing(EdgeKind::Right));

        drag.pointer_move(&mut m, 450, 999);
        assert_eq!(m.rect(), Rect::new(100, 100, 350, 150));
    }

    #[test]
    fn pointer_up_always_returns_to_idle() {
        let mut m = model();
        let mut drag = DragController::new();

        drag.pointer_down(&m, 130, 120);
        drag.pointer_move(&mut m, -4000, -4000);
        drag.pointer_up();
        assert!(drag.is_idle());

        // and from a resize, with the pointer far off the surface
        drag.pointer_down(&m, 100, 170);
        drag.pointer_up();
        assert!(drag.is_idle());

        // releases while idle are harmless
        drag.pointer_up();
        assert!(drag.is_idle());
    }
}
