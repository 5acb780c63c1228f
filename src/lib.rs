#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod image;
pub mod labels;
pub mod segmenter;
pub mod types;

// Building blocks – still public, but considered unstable internals.
pub mod channel;
pub mod edges;
pub mod intersect;
pub mod smooth;
pub mod union_find;

// --- High-level re-exports -------------------------------------------------

// Main entry points: segmenter + results.
pub use crate::segmenter::{ColorSegmenter, SegmenterParams};
pub use crate::types::{Channel, SegmentationResult};

// Diagnostics bundle returned by `process_with_diagnostics`.
pub use crate::diagnostics::DetailedResult;

// Label-map post-processing used by most callers.
pub use crate::labels::{format_region_report, merge_regions, region_size_histogram};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use color_segmenter::prelude::*;
///
/// # fn main() {
/// let (w, h) = (640usize, 480usize);
/// let rgb = vec![0u8; w * h * 3];
/// let img = RgbImageU8 { w, h, stride: w, data: &rgb };
///
/// let segmenter = ColorSegmenter::new(SegmenterParams::default());
/// let result = segmenter.process(img);
/// println!("regions={} latency_ms={:.3}", result.region_count, result.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::RgbImageU8;
    pub use crate::{Channel, ColorSegmenter, SegmentationResult, SegmenterParams};
}
