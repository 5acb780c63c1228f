//! Combination of the three per-channel labellings into one.
//!
//! Two pixels end up in the same final region iff they agree on every
//! channel labelling *and* are connected through a path of 8-neighbour
//! steps that all satisfy the same agreement. A plain keying on the label
//! triple would fuse spatially disjoint regions that happen to share a
//! triple, so the closure is built with a union pass over the grid instead.

use crate::edges::FORWARD_OFFSETS;
use crate::union_find::DisjointSet;

/// Intersect three channel labellings of a `width`x`height` grid.
///
/// All three slices must have length `width * height`. Returns a canonical
/// label map (root pixel indices).
pub fn intersect_channels(
    red: &[u32],
    green: &[u32],
    blue: &[u32],
    width: usize,
    height: usize,
) -> Vec<u32> {
    let n = width * height;
    assert_eq!(red.len(), n, "red labelling length mismatch");
    assert_eq!(green.len(), n, "green labelling length mismatch");
    assert_eq!(blue.len(), n, "blue labelling length mismatch");

    let mut ds = DisjointSet::new(n);
    for y in 0..height {
        for x in 0..width {
            let p = y * width + x;
            for (dy, dx) in FORWARD_OFFSETS {
                let (ny, nx) = (y as isize + dy, x as isize + dx);
                if ny < 0 || nx < 0 || ny as usize >= height || nx as usize >= width {
                    continue;
                }
                let q = ny as usize * width + nx as usize;
                if red[p] == red[q] && green[p] == green[q] && blue[p] == blue[q] {
                    ds.union(p as u32, q as u32);
                }
            }
        }
    }
    ds.flatten()
}
