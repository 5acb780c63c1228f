//! Separable Gaussian pre-smoothing.
//!
//! Segmentation on raw camera data is noise-sensitive: single-pixel
//! outliers raise boundary weights and splinter regions. The classic remedy
//! is a small Gaussian blur per channel before building the pixel graph.
//!
//! The filter is separable: one horizontal and one vertical pass with the
//! same 1-D taps, through an `f32` intermediate, with clamp-to-edge
//! borders. Mask size and sigma are caller-configurable; see
//! [`SmoothingOptions`].

mod kernel;

pub use kernel::gaussian_taps;

use crate::image::{PlaneF32, PlaneU8, RgbImageOwned, RgbImageU8};
use crate::types::Channel;
use serde::{Deserialize, Serialize};

/// Gaussian pre-filter configuration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingOptions {
    /// Number of taps; odd and at least 3.
    pub mask_size: usize,
    /// Standard deviation of the kernel; positive.
    pub sigma: f32,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            mask_size: 5,
            sigma: 0.8,
        }
    }
}

/// Blur one channel plane with a separable Gaussian.
pub fn smooth_plane(plane: &PlaneU8, options: &SmoothingOptions) -> PlaneU8 {
    let taps = gaussian_taps(options.mask_size, options.sigma);
    let (w, h) = (plane.w, plane.h);
    if w == 0 || h == 0 {
        return PlaneU8::new(w, h);
    }

    // Horizontal pass into the float intermediate.
    let mut horiz = PlaneF32::new(w, h);
    for y in 0..h {
        filter_row(plane.row(y), horiz.row_mut(y), &taps);
    }

    // Vertical pass, reading whole rows to stay cache-friendly.
    let radius = taps.len() / 2;
    let mut out = PlaneU8::new(w, h);
    for y in 0..h {
        let dst = out.row_mut(y);
        let mut acc = vec![0.0f32; w];
        for (k, &tap) in taps.iter().enumerate() {
            let sy = clamp_index(y as isize + k as isize - radius as isize, h);
            for (a, &s) in acc.iter_mut().zip(horiz.row(sy)) {
                *a += tap * s;
            }
        }
        for (d, a) in dst.iter_mut().zip(acc) {
            *d = a.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Blur all three channels of an interleaved RGB image.
pub fn smooth_rgb(img: &RgbImageU8<'_>, options: &SmoothingOptions) -> RgbImageOwned {
    let mut out = RgbImageOwned::zeroed(img.w, img.h);
    for channel in Channel::ALL {
        let plane = smooth_plane(&img.channel_plane(channel), options);
        let offset = channel.offset();
        for y in 0..img.h {
            let src = plane.row(y);
            let dst = out.row_mut(y);
            for (x, &v) in src.iter().enumerate() {
                dst[x * 3 + offset] = v;
            }
        }
    }
    out
}

fn filter_row(row: &[u8], out: &mut [f32], taps: &[f32]) {
    let radius = taps.len() / 2;
    let len = row.len();
    for (x, dst) in out.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            let idx = clamp_index(x as isize + k as isize - radius as isize, len);
            acc += tap * f32::from(row[idx]);
        }
        *dst = acc;
    }
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if idx < 0 {
        0
    } else if idx as usize >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
