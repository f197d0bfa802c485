// Author: Dustin Pilgrim
// License: MIT

use image::RgbaImage;
use marq_core::FieldKey;

/// Handle to the host-owned node an edit session was opened for.
///
/// The host side decides what a node is; the engine only needs a stable id,
/// the four numeric fields, and a way to say "repaint yourself" after Apply.
/// Fields are independently present-or-absent: reads return `None` and
/// writes are expected to be no-ops for fields the node does not carry.
pub trait HostNode {
    /// Stable identity, used to keep one live session per node.
    fn id(&self) -> u64;

    /// Read one persisted field, if the node has it.
    fn field(&self, key: FieldKey) -> Option<f64>;

    /// Write one committed value back; ignore unknown fields.
    fn set_field(&mut self, key: FieldKey, value: i32);

    /// Called once on Apply, after all field writes.
    fn mark_dirty(&mut self);
}

/// Background image state for a session. Resolution is owned by the host
/// collaborator and settles exactly once; until then the renderer runs in
/// fallback mode so the surface is never blank.
pub enum Background {
    /// Resolution has not settled yet.
    Pending,
    /// A background resolved; the bitmap here is already display-sized.
    Ready(RgbaImage),
    /// No image could be resolved. Not an error: fallback rendering plus a
    /// caller-visible hint.
    Unavailable,
}

impl Background {
    pub fn is_pending(&self) -> bool {
        matches!(self, Background::Pending)
    }
}
