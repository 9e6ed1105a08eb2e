// Vkbd Hit Tester
// Resolves a pointer position to the key under it

use crate::layout::engine::KeyRect;

/// Flat index of the first key whose rectangle strictly contains the point.
///
/// Boundary pixels are excluded on purpose: a point exactly on the shared
/// edge between two adjacent keys resolves to neither. This trades a
/// one-pixel dead zone for never double-triggering across an edge, and is a
/// documented policy rather than a bug.
pub fn locate(x: i32, y: i32, rects: &[KeyRect]) -> Option<usize> {
    rects.iter().position(|r| r.contains(x, y))
}
