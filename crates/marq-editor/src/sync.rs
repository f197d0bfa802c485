// Author: Dustin Pilgrim
// License: MIT
//
// Field <-> model mirroring. Fields never display a value the model
// rejected: every write path ends by reading the clamped rectangle back.

use marq_core::{FieldKey, FieldValues, Rect};

use crate::model::GeometryModel;

/// Model -> fields. Always succeeds; the rectangle is already integral.
pub fn to_fields(rect: Rect) -> FieldValues {
    FieldValues::from(rect)
}

/// Parse one raw field. Non-numeric input takes the field's default
/// (0 for x/y, 1 for width/height); numbers are rounded and floored at 0.
pub fn parse_field(raw: &str, key: FieldKey) -> i32 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => (v.round() as i64).clamp(0, i32::MAX as i64) as i32,
        _ => key.default_value(),
    }
}

/// Fields -> model -> fields: parse the four raw contents in x, y, width,
/// height order, push them through the model's coercing setter, and return
/// what the fields must now display.
pub fn from_raw(model: &mut GeometryModel, raw: [&str; 4]) -> FieldValues {
    let x = parse_field(raw[0], FieldKey::X);
    let y = parse_field(raw[1], FieldKey::Y);
    let w = parse_field(raw[2], FieldKey::Width);
    let h = parse_field(raw[3], FieldKey::Height);
    model.set_from_fields(x, y, w, h);
    to_fields(model.rect())
}
