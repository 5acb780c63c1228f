//! Full-color segmentation pipeline.
//!
//! The [`ColorSegmenter`] exposes a simple API: feed an interleaved RGB
//! image and get a canonical label map. Internally it coordinates
//!
//! - the optional Gaussian pre-filter (`crate::smooth`),
//! - three independent single-channel segmentations (`crate::channel`),
//!   run concurrently when the `parallel` feature is enabled,
//! - the 8-connected intersection of the three channel labellings
//!   (`crate::intersect`).
//!
//! The three channel jobs own disjoint working sets (plane, edge buffer,
//! disjoint set, sibling arrays) and the intersection runs only after all
//! of them joined, so no stage needs locking and the result does not
//! depend on channel completion order.
//!
//! Typical usage:
//! ```no_run
//! use color_segmenter::{ColorSegmenter, SegmenterParams};
//! use color_segmenter::image::RgbImageU8;
//!
//! # fn example(rgb: RgbImageU8) {
//! let segmenter = ColorSegmenter::new(SegmenterParams::default());
//! let result = segmenter.process(rgb);
//! println!("{} regions", result.region_count);
//! # }
//! ```

pub mod options;
mod pipeline;

pub use options::SegmenterParams;
pub use pipeline::ColorSegmenter;
