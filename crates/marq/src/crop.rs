// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use eventline::{debug, info};
use image::GenericImageView;

pub fn run(
    input: &Path,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    output: &Path,
    constrain: bool,
) -> Result<(), String> {
    let img = image::open(input)
        .map_err(|e| format!("failed to read {}: {e}", input.display()))?;
    let (iw, ih) = img.dimensions();
    let (iw, ih) = (iw as i32, ih as i32);
    debug!("loaded {} ({}x{})", input.display(), iw, ih);

    let (mut x, mut y, mut w, mut h) = (x, y, width, height);
    if constrain {
        x = x.clamp(0, (iw - 1).max(0));
        y = y.clamp(0, (ih - 1).max(0));
        w = w.clamp(1, (iw - x).max(1));
        h = h.clamp(1, (ih - y).max(1));
    }
    let (x, y, w, h) = slice_rect(x, y, w, h, iw, ih);

    info!("crop {}x{}+{}+{} of {}x{}", w, h, x, y, iw, ih);
    let cropped = img.crop_imm(x as u32, y as u32, w as u32, h as u32);
    cropped
        .save(output)
        .map_err(|e| format!("failed to write {}: {e}", output.display()))?;

    println!("{}: {}x{}+{}+{}", output.display(), w, h, x, y);
    Ok(())
}

/// Pin a rectangle to a slice that exists inside a `iw`x`ih` bitmap: at
/// least one pixel, never past an edge. Applies even without `constrain`.
fn slice_rect(x: i32, y: i32, w: i32, h: i32, iw: i32, ih: i32) -> (i32, i32, i32, i32) {
    let x = x.clamp(0, (iw - 1).max(0));
    let y = y.clamp(0, (ih - 1).max(0));
    let x2 = (x + w.max(1)).clamp(x + 1, iw.max(x + 1));
    let y2 = (y + h.max(1)).clamp(y + 1, ih.max(y + 1));
    (x, y, x2 - x, y2 - y)
}
