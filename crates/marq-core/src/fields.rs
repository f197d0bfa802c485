// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::rect::Rect;

/// The four numeric fields persisted on a host node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKey {
    X,
    Y,
    Width,
    Height,
}

pub const FIELD_KEYS: [FieldKey; 4] = [FieldKey::X, FieldKey::Y, FieldKey::Width, FieldKey::Height];

impl FieldKey {
    /// Field name as the host knows it.
    pub fn name(self) -> &'static str {
        match self {
            FieldKey::X => "x",
            FieldKey::Y => "y",
            FieldKey::Width => "width",
            FieldKey::Height => "height",
        }
    }

    /// Coercion default for empty / non-numeric input.
    pub fn default_value(self) -> i32 {
        match self {
            FieldKey::X | FieldKey::Y => 0,
            FieldKey::Width | FieldKey::Height => 1,
        }
    }
}

/// The integer quadruple shown in the editor's fields and committed back to
/// the host on Apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for FieldValues {
    fn default() -> Self {
        Self { x: 0, y: 0, width: 512, height: 512 }
    }
}

impl FieldValues {
    pub fn get(&self, key: FieldKey) -> i32 {
        match key {
            FieldKey::X => self.x,
            FieldKey::Y => self.y,
            FieldKey::Width => self.width,
            FieldKey::Height => self.height,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: i32) {
        match key {
            FieldKey::X => self.x = value,
            FieldKey::Y => self.y = value,
            FieldKey::Width => self.width = value,
            FieldKey::Height => self.height = value,
        }
    }
}

impl From<Rect> for FieldValues {
    fn from(r: Rect) -> Self {
        Self { x: r.x, y: r.y, width: r.w, height: r.h }
    }
}

impl From<FieldValues> for Rect {
    fn from(f: FieldValues) -> Self {
        Rect::new(f.x, f.y, f.width, f.height)
    }
}
