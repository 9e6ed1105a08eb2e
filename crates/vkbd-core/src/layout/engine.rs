// Vkbd Layout Engine
// Converts a key table and a window size into per-key pixel rectangles

use crate::layout::spec::LayoutSpec;

/// Pixel rectangle of one key, index-aligned with the layout spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl KeyRect {
    /// Strict containment: points exactly on an edge hit nothing, so a
    /// shared border between adjacent keys is a one-pixel dead zone instead
    /// of a double trigger. Intentional, matching the hit-test policy.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x > self.x && x < self.x + self.w && y > self.y && y < self.y + self.h
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }
}

/// Compute the pixel rectangle of every key for the given window size.
///
/// Pure function of (spec, width, height); calling it again with the same
/// inputs yields the same geometry.
///
/// Rows split the height evenly with integer division; the last row absorbs
/// the remainder so row heights always sum to `height`. Within a row each
/// key's width is proportional to its weight, and the last key in the row is
/// stretched to the right window edge so every row tiles `width` exactly.
///
/// A row whose weights sum to zero (only possible when it has no keys)
/// contributes no geometry but still occupies its height band. Window sizes
/// smaller than the row count produce zero or negative heights; that is a
/// degenerate rendering, not an error, and is not clamped here.
pub fn compute_layout(spec: &LayoutSpec, width: i32, height: i32) -> Vec<KeyRect> {
    let mut rects = vec![KeyRect::default(); spec.len()];
    let nrows = spec.row_count() as i32;
    if nrows == 0 {
        return rects;
    }

    let row_h = height / nrows;
    let mut index = 0usize;
    let mut y = 0i32;
    for (r, row) in spec.rows().enumerate() {
        let h = if r as i32 == nrows - 1 { height - y } else { row_h };
        let base: i64 = row.iter().map(|k| i64::from(k.width_weight())).sum();
        if base > 0 {
            let mut x = 0i32;
            let last = row.len() - 1;
            for (c, def) in row.iter().enumerate() {
                let w = if c == last {
                    width - x
                } else {
                    (i64::from(def.width_weight()) * i64::from(width) / base) as i32
                };
                rects[index] = KeyRect { x, y, w, h };
                x += w;
                index += 1;
            }
        } else {
            // Zero total weight: no visible geometry, but the flat index
            // must stay aligned with the table.
            index += row.len();
        }
        y += row_h;
    }
    rects
}
