// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

/// The engine coerces every invalid input instead of failing; the only thing
/// it can reject is a surface buffer that does not match the display size.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface buffer is {got} bytes, expected {expected} ({width}x{height} @ 4bpp)")]
    BufferMismatch {
        got: usize,
        expected: usize,
        width: i32,
        height: i32,
    },
}
