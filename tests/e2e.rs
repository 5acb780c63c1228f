mod common;

use common::synthetic_image::{checkerboard_rgb, ramp_rgb, split_rgb, uniform_rgb};
use color_segmenter::channel::segment_plane;
use color_segmenter::image::RgbImageU8;
use color_segmenter::labels::densify;
use color_segmenter::types::Channel;
use color_segmenter::{ColorSegmenter, SegmenterParams};

fn view(w: usize, h: usize, data: &[u8]) -> RgbImageU8<'_> {
    RgbImageU8 {
        w,
        h,
        stride: w,
        data,
    }
}

fn raw_params(k: f32) -> SegmenterParams {
    SegmenterParams {
        k,
        ..Default::default()
    }
    .without_smoothing()
}

fn sorted_region_sizes(labels: &[u32]) -> Vec<usize> {
    let (dense, count) = densify(labels);
    let mut sizes = vec![0usize; count];
    for l in dense {
        sizes[l as usize] += 1;
    }
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}

fn assert_canonical(labels: &[u32]) {
    for &l in labels {
        assert!((l as usize) < labels.len(), "label {l} is not a pixel index");
        assert_eq!(
            labels[l as usize], l,
            "canonical labels must be idempotent"
        );
    }
}

#[test]
fn uniform_image_is_a_single_region() {
    let buffer = uniform_rgb(4, 4, [128, 128, 128]);
    let result = ColorSegmenter::new(raw_params(1.0)).process(view(4, 4, &buffer));
    assert_eq!(result.region_count, 1);
    assert_eq!(sorted_region_sizes(&result.labels), vec![16]);
    assert_canonical(&result.labels);
}

#[test]
fn contrast_split_separates_the_two_sides() {
    // Left column black, right three columns white, on a 4x2 grid.
    let buffer = split_rgb(4, 2, 1, [0, 0, 0], [255, 255, 255]);
    for k in [0.0, 1.0, 100.0] {
        let result = ColorSegmenter::new(raw_params(k)).process(view(4, 2, &buffer));
        assert_eq!(result.region_count, 2, "k={k}");
        assert_eq!(sorted_region_sizes(&result.labels), vec![6, 2], "k={k}");
    }
}

#[test]
fn checkerboard_at_k_zero_has_one_region_per_color() {
    let buffer = checkerboard_rgb(4, 4, 1, [0, 0, 0], [255, 255, 255]);
    let result = ColorSegmenter::new(raw_params(0.0)).process(view(4, 4, &buffer));
    assert_eq!(result.region_count, 2);
    assert_eq!(sorted_region_sizes(&result.labels), vec![8, 8]);
}

#[test]
fn checkerboard_colors_fuse_at_the_locked_boundary() {
    // The zero-weight diagonal edges fuse each color into a size-8
    // component before any 255-weight edge is processed, so the cross-color
    // threshold is k / 8 per channel: two regions below k = 2040, one at it.
    let buffer = checkerboard_rgb(4, 4, 1, [0, 0, 0], [255, 255, 255]);
    let at_contrast = ColorSegmenter::new(raw_params(255.0)).process(view(4, 4, &buffer));
    assert_eq!(at_contrast.region_count, 2);

    let below = ColorSegmenter::new(raw_params(2032.0)).process(view(4, 4, &buffer));
    assert_eq!(below.region_count, 2);

    let fused = ColorSegmenter::new(raw_params(2040.0)).process(view(4, 4, &buffer));
    assert_eq!(fused.region_count, 1);
    assert_eq!(sorted_region_sizes(&fused.labels), vec![16]);
}

#[test]
fn ramp_at_k_zero_stays_singletons() {
    let buffer = ramp_rgb(64);
    let result = ColorSegmenter::new(raw_params(0.0)).process(view(64, 1, &buffer));
    assert_eq!(result.region_count, 64);
    assert_eq!(sorted_region_sizes(&result.labels), vec![1; 64]);
    assert_canonical(&result.labels);
}

#[test]
fn empty_image_yields_empty_labelling() {
    let result = ColorSegmenter::new(raw_params(100.0)).process(view(0, 0, &[]));
    assert!(result.labels.is_empty());
    assert_eq!(result.region_count, 0);
}

#[test]
fn channel_permutation_preserves_the_partition() {
    // Structure differs per channel: red splits left/right, green splits
    // top/bottom, blue is flat.
    let (w, h) = (6usize, 4usize);
    let mut buffer = Vec::with_capacity(w * h * 3);
    for y in 0..h {
        for x in 0..w {
            let r = if x < 3 { 20 } else { 240 };
            let g = if y < 2 { 10 } else { 200 };
            buffer.extend_from_slice(&[r, g, 77]);
        }
    }
    let permuted: Vec<u8> = buffer
        .chunks_exact(3)
        .flat_map(|px| [px[2], px[0], px[1]])
        .collect();

    let segmenter = ColorSegmenter::new(raw_params(0.0));
    let original = segmenter.process(view(w, h, &buffer));
    let rotated = segmenter.process(view(w, h, &permuted));

    assert_eq!(original.region_count, 4, "quadrant split expected");
    assert_eq!(
        densify(&original.labels).0,
        densify(&rotated.labels).0,
        "partition must be invariant under channel permutation"
    );
}

#[test]
fn intersection_refines_every_channel_partition() {
    let (w, h) = (8usize, 6usize);
    let mut buffer = Vec::with_capacity(w * h * 3);
    for y in 0..h {
        for x in 0..w {
            let r = if x < 4 { 0 } else { 255 };
            let g = if y < 3 { 0 } else { 255 };
            let b = if (x + y) % 5 == 0 { 0 } else { 255 };
            buffer.extend_from_slice(&[r, g, b]);
        }
    }
    let img = view(w, h, &buffer);
    let k = 40.0;

    let final_labels = ColorSegmenter::new(raw_params(k)).process(img.clone()).labels;
    for channel in Channel::ALL {
        let plane = img.channel_plane(channel);
        let channel_labels = segment_plane(&plane, k).labels;
        for (i, &label) in final_labels.iter().enumerate() {
            let rep = label as usize;
            assert_eq!(
                channel_labels[i], channel_labels[rep],
                "pixel {i} and its representative diverge on {}",
                channel.name()
            );
        }
    }
}

#[test]
fn smoothing_keeps_a_uniform_image_uniform() {
    let buffer = uniform_rgb(8, 8, [90, 120, 33]);
    let params = SegmenterParams {
        k: 1.0,
        ..Default::default()
    };
    let result = ColorSegmenter::new(params).process(view(8, 8, &buffer));
    assert_eq!(result.region_count, 1);
}

#[test]
fn diagnostics_mirror_the_result() {
    let buffer = checkerboard_rgb(6, 6, 2, [10, 10, 10], [200, 200, 200]);
    let detailed =
        ColorSegmenter::new(raw_params(0.0)).process_with_diagnostics(view(6, 6, &buffer));
    assert_eq!(detailed.diagnostics.input_width, 6);
    assert_eq!(detailed.diagnostics.input_height, 6);
    assert_eq!(detailed.diagnostics.channels.len(), 3);
    assert_eq!(
        detailed.diagnostics.region_count,
        detailed.result.region_count
    );
    assert!(detailed.diagnostics.smoothing_ms.is_none());
    for channel in &detailed.diagnostics.channels {
        assert_eq!(channel.edge_count, 110);
        assert_eq!(
            channel.region_count,
            36 - channel.merges,
            "merge count and region count must agree"
        );
    }
}
