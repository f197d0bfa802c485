// Author: Dustin Pilgrim
// License: MIT

use image::RgbaImage;
use marq_core::{Extent, Rect};

use crate::error::RenderError;
use crate::pixels::*;

pub const GUIDE_THICKNESS: i32 = 2;
pub const HANDLE_RADIUS: i32 = 5;

const CHECKER_CELL: i32 = 16;
const CHECKER_EVEN: u32 = 0xFF11_1111;
const CHECKER_ODD: u32 = 0xFF0D_0D0D;

// Outside-rectangle strips keep 65% brightness (a 35% black veil).
const DIM_KEEP: u32 = 166;

// Translucent fill over the rectangle interior in fallback mode.
const FALLBACK_TINT: u32 = 0xA640_5080;

/// Everything one redraw needs, read-only. The rectangle is bounds-space;
/// the background, when present, is already display-sized.
pub(crate) struct Frame<'a> {
    pub rect: Rect,
    pub scale: f64,
    pub display: Extent,
    pub background: Option<&'a RgbaImage>,
    pub guide_argb: u32,
    pub handle_argb: u32,
}

/// Compose one frame into `buf` (0xAARRGGBB, row-major, exactly the display
/// size). Idempotent; reads the model state, mutates nothing but the buffer.
pub(crate) fn redraw(frame: &Frame<'_>, buf: &mut [u8]) -> Result<(), RenderError> {
    let w = frame.display.width;
    let h = frame.display.height;
    let expected = w as usize * h as usize * 4;
    if buf.len() != expected {
        return Err(RenderError::BufferMismatch { got: buf.len(), expected, width: w, height: h });
    }

    let l = to_display(frame.rect.x, frame.scale);
    let r = to_display(frame.rect.right(), frame.scale);
    let t = to_display(frame.rect.y, frame.scale);
    let b = to_display(frame.rect.bottom(), frame.scale);

    match frame.background {
        Some(img) => {
            blit_rgba_u32(buf, w, h, img);
            // darken the four strips outside the rectangle
            dim_rect_u32(buf, w, h, 0, 0, w, t, DIM_KEEP);
            dim_rect_u32(buf, w, h, 0, b, w, h - b, DIM_KEEP);
            dim_rect_u32(buf, w, h, 0, t, l, b - t, DIM_KEEP);
            dim_rect_u32(buf, w, h, r, t, w - r, b - t, DIM_KEEP);
        }
        None => {
            checker_u32(buf, w, h, CHECKER_CELL, CHECKER_EVEN, CHECKER_ODD);
            blend_rect_u32(buf, w, h, l, t, r - l, b - t, FALLBACK_TINT);
        }
    }

    // guides: full-length lines centered on each edge
    let half = GUIDE_THICKNESS / 2;
    fill_rect_u32(buf, w, h, l - half, 0, GUIDE_THICKNESS, h, frame.guide_argb);
    fill_rect_u32(buf, w, h, r - half, 0, GUIDE_THICKNESS, h, frame.guide_argb);
    fill_rect_u32(buf, w, h, 0, t - half, w, GUIDE_THICKNESS, frame.guide_argb);
    fill_rect_u32(buf, w, h, 0, b - half, w, GUIDE_THICKNESS, frame.guide_argb);

    // corner handles on top
    for (cx, cy) in [(l, t), (r, t), (l, b), (r, b)] {
        fill_circle_u32(buf, w, h, cx, cy, HANDLE_RADIUS, frame.handle_argb);
    }

    Ok(())
}

fn to_display(v: i32, scale: f64) -> i32 {
    (v as f64 * scale).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUIDE: u32 = 0xFF66_CCFF;
    const HANDLE: u32 = 0xFFFF_D60A;

    fn px(buf: &[u8], w: i32, x: i32, y: i32) -> u32 {
        let i = (y as usize * w as usize + x as usize) * 4;
        u32::from_le_bytes([buf[i], buf[i + 1], buf[i + 2], buf[i + 3]])
    }

    fn frame(display: Extent, rect: Rect, background: Option<&RgbaImage>) -> Frame<'_> {
        Frame { rect, scale: 1.0, display, background, guide_argb: GUIDE, handle_argb: HANDLE }
    }

    #[test]
    fn rejects_a_wrongly_sized_buffer() {
        let f = frame(Extent::new(64, 64), Rect::new(16, 16, 32, 32), None);
        let mut short = vec![0u8; 64 * 64 * 4 - 4];
        assert!(redraw(&f, &mut short).is_err());

        let mut ok = vec![0u8; 64 * 64 * 4];
        assert!(redraw(&f, &mut ok).is_ok());
    }

    #[test]
    fn fallback_draws_checker_tint_guides_and_handles() {
        let f = frame(Extent::new(64, 64), Rect::new(16, 16, 32, 32), None);
        let mut buf = vec![0u8; 64 * 64 * 4];
        redraw(&f, &mut buf).unwrap();

        // untouched checker outside the rectangle
        assert_eq!(px(&buf, 64, 8, 40), 0xFF11_1111);
        // tinted interior: FALLBACK_TINT over the even checker colour
        assert_eq!(px(&buf, 64, 32, 32), 0xFF30_3A59);
        // left guide occupies columns 15..=16 away from corners
        assert_eq!(px(&buf, 64, 15, 40), GUIDE);
        assert_eq!(px(&buf, 64, 16, 40), GUIDE);
        // handles sit on the corners, over the guides
        assert_eq!(px(&buf, 64, 16, 16), HANDLE);
        assert_eq!(px(&buf, 64, 48, 48), HANDLE);
    }

    #[test]
    fn image_mode_dims_only_the_outside() {
        let img = RgbaImage::from_pixel(32, 32, image::Rgba([255, 255, 255, 255]));
        let f = frame(Extent::new(32, 32), Rect::new(8, 8, 16, 16), Some(&img));
        let mut buf = vec![0u8; 32 * 32 * 4];
        redraw(&f, &mut buf).unwrap();

        // interior stays at full brightness
        assert_eq!(px(&buf, 32, 16, 16), 0xFFFF_FFFF);
        // 255 * 166 / 256 = 165 in every dimmed strip
        assert_eq!(px(&buf, 32, 16, 2), 0xFFA5_A5A5); // top
        assert_eq!(px(&buf, 32, 16, 29), 0xFFA5_A5A5); // bottom
        assert_eq!(px(&buf, 32, 2, 16), 0xFFA5_A5A5); // left
        assert_eq!(px(&buf, 32, 29, 16), 0xFFA5_A5A5); // right
    }

    #[test]
    fn guides_scale_with_the_display_factor() {
        let img = RgbaImage::from_pixel(32, 32, image::Rgba([255, 255, 255, 255]));
        let mut f = frame(Extent::new(32, 32), Rect::new(16, 16, 32, 32), Some(&img));
        f.scale = 0.5;
        let mut buf = vec![0u8; 32 * 32 * 4];
        redraw(&f, &mut buf).unwrap();

        // left edge lands at display x = 8 (sample away from the handles)
        assert_eq!(px(&buf, 32, 7, 15), GUIDE);
        assert_eq!(px(&buf, 32, 8, 15), GUIDE);
        assert_eq!(px(&buf, 32, 14, 28), 0xFFA5_A5A5);
    }
}
