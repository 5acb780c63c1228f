//! Parameter types configuring the segmentation pipeline.

use crate::smooth::SmoothingOptions;
use serde::Deserialize;

/// Pipeline-wide parameters.
///
/// `k` is the region-scale parameter of the merge predicate: a component
/// accepts a boundary edge of weight `w` while `w <= int_diff + k / size`,
/// so larger values tolerate heavier boundaries and produce larger
/// regions. Must be finite and non-negative.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct SegmenterParams {
    pub k: f32,
    /// Gaussian pre-filter; `None` segments the raw pixels.
    pub smoothing: Option<SmoothingOptions>,
}

impl Default for SegmenterParams {
    fn default() -> Self {
        Self {
            k: 300.0,
            smoothing: Some(SmoothingOptions::default()),
        }
    }
}

impl SegmenterParams {
    /// Same parameters with the pre-filter disabled.
    pub fn without_smoothing(mut self) -> Self {
        self.smoothing = None;
        self
    }
}
