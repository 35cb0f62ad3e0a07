//! Bounding-box trimming of raster figures
//!
//! The figure is drawn on a fixed-size canvas, then cropped to the smallest
//! rectangle containing every non-background pixel, grown by a padding and
//! clamped to the canvas.

/// Pixel rectangle inside a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// The whole canvas
    pub fn full(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Grow by `pad` pixels on every side, clamped to a `canvas_w × canvas_h` canvas
    pub fn expand(&self, pad: u32, canvas_w: u32, canvas_h: u32) -> Self {
        let x0 = self.x.saturating_sub(pad);
        let y0 = self.y.saturating_sub(pad);
        let x1 = (self.x + self.width).saturating_add(pad).min(canvas_w);
        let y1 = (self.y + self.height).saturating_add(pad).min(canvas_h);
        Self { x: x0, y: y0, width: x1 - x0, height: y1 - y0 }
    }
}

/// Smallest box holding every pixel that differs from `background`
///
/// `buffer` is packed RGB, row-major, `width * height * 3` bytes.
/// Returns `None` for a blank canvas or a buffer of the wrong size.
pub fn content_bounds(buffer: &[u8], width: u32, height: u32, background: [u8; 3]) -> Option<BoundingBox> {
    let (w, h) = (width as usize, height as usize);
    if w == 0 || h == 0 || buffer.len() != w * h * 3 {
        return None;
    }

    let mut min_x = usize::MAX;
    let mut min_y = usize::MAX;
    let mut max_x = 0usize;
    let mut max_y = 0usize;

    for (row, line) in buffer.chunks_exact(w * 3).enumerate() {
        for (col, pixel) in line.chunks_exact(3).enumerate() {
            if pixel != &background[..] {
                min_x = min_x.min(col);
                max_x = max_x.max(col);
                min_y = min_y.min(row);
                max_y = max_y.max(row);
            }
        }
    }

    if min_x == usize::MAX {
        return None;
    }

    Some(BoundingBox {
        x: min_x as u32,
        y: min_y as u32,
        width: (max_x - min_x + 1) as u32,
        height: (max_y - min_y + 1) as u32,
    })
}
