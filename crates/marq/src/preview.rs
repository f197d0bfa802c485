// Author: Dustin Pilgrim
// License: MIT
//
// Drives a real edit session headlessly and writes one rendered frame.
// Useful for eyeballing the overlay and for checking what the editor would
// make of a given rectangle/image pair.

use std::path::Path;

use eventline::debug;
use image::RgbaImage;

use marq_core::{FieldKey, FieldValues};
use marq_editor::{EditorOptions, HostNode, SessionManager};

use crate::config::MarqConfig;

const PREVIEW_NODE_ID: u64 = 0;

/// A stand-in host node holding the CLI-provided values.
struct LocalNode {
    values: FieldValues,
}

impl HostNode for LocalNode {
    fn id(&self) -> u64 {
        PREVIEW_NODE_ID
    }

    fn field(&self, key: FieldKey) -> Option<f64> {
        Some(self.values.get(key) as f64)
    }

    fn set_field(&mut self, key: FieldKey, value: i32) {
        self.values.set(key, value);
    }

    fn mark_dirty(&mut self) {}
}

pub fn run(
    image: Option<&Path>,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    fit: bool,
    output: &Path,
    cfg: &MarqConfig,
) -> Result<(), String> {
    let background = match image {
        Some(path) => Some(
            image::open(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?
                .to_rgba8(),
        ),
        None => None,
    };

    let mut mgr = SessionManager::with_options(EditorOptions {
        max_display_width: cfg.max_display_width,
        guide_argb: cfg.guide_colour,
        handle_argb: cfg.handle_colour,
    });

    let session = mgr.open_session(LocalNode {
        values: FieldValues { x, y, width, height },
    });
    session.set_background(background);

    if let Some(hint) = session.hint() {
        eprintln!("{hint}");
    }
    if fit {
        session.fit_to_bounds();
    }

    let display = session.display();
    debug!("rendering {}x{} preview", display.width, display.height);

    let mut buf = vec![0u8; display.width as usize * display.height as usize * 4];
    session.render(&mut buf).map_err(|e| e.to_string())?;

    let frame = argb_to_rgba(&buf, display.width as u32, display.height as u32)
        .ok_or("frame buffer did not match the display size")?;
    frame
        .save(output)
        .map_err(|e| format!("failed to write {}: {e}", output.display()))?;

    let vals = mgr
        .apply(PREVIEW_NODE_ID)
        .ok_or("preview session disappeared before apply")?;
    println!(
        "{}: {}x{} frame, rect x={} y={} width={} height={}",
        output.display(),
        display.width,
        display.height,
        vals.x,
        vals.y,
        vals.width,
        vals.height
    );
    Ok(())
}

fn argb_to_rgba(buf: &[u8], w: u32, h: u32) -> Option<RgbaImage> {
    let mut rgba = Vec::with_capacity(buf.len());
    for px in buf.chunks_exact(4) {
        let argb = u32::from_le_bytes([px[0], px[1], px[2], px[3]]);
        rgba.extend_from_slice(&[
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        ]);
    }
    RgbaImage::from_raw(w, h, rgba)
}
