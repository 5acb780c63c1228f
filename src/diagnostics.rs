use crate::types::{Channel, SegmentationResult};
use serde::Serialize;

/// Counters from one channel's merge loop.
#[derive(Clone, Debug, Serialize)]
pub struct ChannelDiagnostics {
    pub channel: Channel,
    pub edge_count: usize,
    pub merges: usize,
    pub region_count: usize,
    pub elapsed_ms: f64,
}

/// Per-stage timings and counts for a full segmentation run.
#[derive(Clone, Debug, Serialize)]
pub struct ProcessingDiagnostics {
    pub input_width: usize,
    pub input_height: usize,
    /// Present when the Gaussian pre-filter ran.
    pub smoothing_ms: Option<f64>,
    pub channels: Vec<ChannelDiagnostics>,
    pub intersect_ms: f64,
    pub region_count: usize,
    pub total_latency_ms: f64,
}

/// Segmentation output bundled with its diagnostics.
#[derive(Clone, Debug, Serialize)]
pub struct DetailedResult {
    pub result: SegmentationResult,
    pub diagnostics: ProcessingDiagnostics,
}
