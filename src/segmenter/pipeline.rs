use super::options::SegmenterParams;
use crate::channel::{segment_plane, ChannelLabeling};
use crate::diagnostics::{ChannelDiagnostics, DetailedResult, ProcessingDiagnostics};
use crate::image::{PlaneU8, RgbImageU8};
use crate::intersect::intersect_channels;
use crate::labels;
use crate::smooth::smooth_plane;
use crate::types::{Channel, SegmentationResult};
use log::debug;
use std::time::Instant;

/// Orchestrates pre-smoothing, the per-channel fan-out, and the
/// intersection pass.
pub struct ColorSegmenter {
    params: SegmenterParams,
}

impl ColorSegmenter {
    /// Create a segmenter with the supplied parameters.
    pub fn new(params: SegmenterParams) -> Self {
        assert!(
            params.k.is_finite() && params.k >= 0.0,
            "scale parameter k must be finite and non-negative, got {}",
            params.k
        );
        Self { params }
    }

    pub fn params(&self) -> &SegmenterParams {
        &self.params
    }

    /// Segment an image into a canonical label map.
    pub fn process(&self, rgb: RgbImageU8<'_>) -> SegmentationResult {
        self.process_with_diagnostics(rgb).result
    }

    /// Segment an image and capture per-stage diagnostics.
    pub fn process_with_diagnostics(&self, rgb: RgbImageU8<'_>) -> DetailedResult {
        let total_start = Instant::now();
        let (width, height) = (rgb.w, rgb.h);

        let smooth_start = Instant::now();
        let planes = self.prepare_planes(&rgb);
        let smoothing_ms = self
            .params
            .smoothing
            .map(|_| smooth_start.elapsed().as_secs_f64() * 1000.0);

        let channel_runs = run_channels(&planes, self.params.k);
        for (channel, run) in Channel::ALL.iter().zip(&channel_runs) {
            debug!(
                "ColorSegmenter::process {} channel: {} edges, {} merges, {} regions in {:.3} ms",
                channel.name(),
                run.edge_count,
                run.merges,
                run.region_count,
                run.elapsed_ms
            );
        }

        let intersect_start = Instant::now();
        let [red, green, blue] = channel_runs;
        let final_labels =
            intersect_channels(&red.labels, &green.labels, &blue.labels, width, height);
        let intersect_ms = intersect_start.elapsed().as_secs_f64() * 1000.0;

        let (_, region_count) = labels::densify(&final_labels);
        let total_latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "ColorSegmenter::process intersected to {} regions in {:.3} ms (total {:.3} ms)",
            region_count, intersect_ms, total_latency_ms
        );

        let channels = Channel::ALL
            .iter()
            .zip([&red, &green, &blue])
            .map(|(&channel, run)| ChannelDiagnostics {
                channel,
                edge_count: run.edge_count,
                merges: run.merges,
                region_count: run.region_count,
                elapsed_ms: run.elapsed_ms,
            })
            .collect();

        DetailedResult {
            result: SegmentationResult {
                labels: final_labels,
                width,
                height,
                region_count,
                latency_ms: total_latency_ms,
            },
            diagnostics: ProcessingDiagnostics {
                input_width: width,
                input_height: height,
                smoothing_ms,
                channels,
                intersect_ms,
                region_count,
                total_latency_ms,
            },
        }
    }

    fn prepare_planes(&self, rgb: &RgbImageU8<'_>) -> [PlaneU8; 3] {
        Channel::ALL.map(|channel| {
            let plane = rgb.channel_plane(channel);
            match &self.params.smoothing {
                Some(options) => smooth_plane(&plane, options),
                None => plane,
            }
        })
    }
}

#[cfg(feature = "parallel")]
fn run_channels(planes: &[PlaneU8; 3], k: f32) -> [ChannelLabeling; 3] {
    let [red, green, blue] = planes;
    let (red, (green, blue)) = rayon::join(
        || segment_plane(red, k),
        || rayon::join(|| segment_plane(green, k), || segment_plane(blue, k)),
    );
    [red, green, blue]
}

#[cfg(not(feature = "parallel"))]
fn run_channels(planes: &[PlaneU8; 3], k: f32) -> [ChannelLabeling; 3] {
    let [red, green, blue] = planes;
    [
        segment_plane(red, k),
        segment_plane(green, k),
        segment_plane(blue, k),
    ]
}
