//! Label-map post-processing: region merging, size statistics, dense
//! relabelling, and the textual region-size report.
//!
//! All helpers treat the label map purely as a partition of pixel indices;
//! none of them re-checks spatial connectivity.

use std::collections::HashMap;

/// Coalesce every occurrence of a label in `selected` to one representative.
///
/// The representative is the *minimum* label of the selected set, which
/// makes the operation deterministic and independent of the order the
/// caller collected the labels in. Selecting fewer than two distinct
/// labels is a no-op. Idempotent: re-applying the same selection changes
/// nothing.
pub fn merge_regions(labels: &mut [u32], selected: &[u32]) {
    let mut distinct: Vec<u32> = selected.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() < 2 {
        return;
    }
    let representative = distinct[0];
    for label in labels.iter_mut() {
        if distinct.binary_search(label).is_ok() {
            *label = representative;
        }
    }
}

/// Per-region pixel counts, largest regions first.
///
/// Ties are broken by ascending label so the ordering is deterministic.
pub fn region_size_histogram(labels: &[u32]) -> Vec<(u32, u32)> {
    let mut counts: HashMap<u32, u32> = HashMap::new();
    for &l in labels {
        *counts.entry(l).or_default() += 1;
    }
    let mut histogram: Vec<(u32, u32)> = counts.into_iter().collect();
    histogram.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    histogram
}

/// Remap sparse labels to `[0, R)` in first-occurrence order.
///
/// Returns the dense map and the number of distinct regions. The input
/// order fixes the output, so equal inputs densify identically.
pub fn densify(labels: &[u32]) -> (Vec<u32>, usize) {
    let mut remap: HashMap<u32, u32> = HashMap::new();
    let mut dense = Vec::with_capacity(labels.len());
    for &l in labels {
        let next = remap.len() as u32;
        dense.push(*remap.entry(l).or_insert(next));
    }
    (dense, remap.len())
}

/// Render the region-size report.
///
/// Stable format consumed by downstream tooling: the first line is the
/// decimal count of distinct labels; each subsequent line is a pixel
/// count, in non-increasing order. No label identifiers are emitted.
pub fn format_region_report(labels: &[u32]) -> String {
    let histogram = region_size_histogram(labels);
    let mut report = String::new();
    report.push_str(&histogram.len().to_string());
    report.push('\n');
    for (_, count) in histogram {
        report.push_str(&count.to_string());
        report.push('\n');
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_uses_the_minimum_selected_label() {
        let mut labels = vec![1, 1, 2, 3, 2, 4];
        merge_regions(&mut labels, &[2, 3]);
        assert_eq!(labels, vec![1, 1, 2, 2, 2, 4]);

        // Selection order must not matter.
        let mut labels = vec![1, 1, 2, 3, 2, 4];
        merge_regions(&mut labels, &[3, 2]);
        assert_eq!(labels, vec![1, 1, 2, 2, 2, 4]);
    }

    #[test]
    fn merge_is_idempotent() {
        let mut once = vec![5, 9, 9, 7, 5, 3];
        merge_regions(&mut once, &[9, 5, 7]);
        let mut twice = once.clone();
        merge_regions(&mut twice, &[9, 5, 7]);
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_with_fewer_than_two_distinct_labels_is_a_noop() {
        let original = vec![1, 2, 3];
        for selection in [&[][..], &[2][..], &[2, 2][..]] {
            let mut labels = original.clone();
            merge_regions(&mut labels, selection);
            assert_eq!(labels, original, "selection {selection:?}");
        }
    }

    #[test]
    fn merge_ignores_labels_absent_from_the_map() {
        let mut labels = vec![1, 4, 4];
        merge_regions(&mut labels, &[4, 40]);
        assert_eq!(labels, vec![1, 4, 4]);
    }

    #[test]
    fn histogram_sorts_by_count_then_label() {
        let labels = vec![3, 3, 1, 1, 8, 8, 8, 2];
        assert_eq!(
            region_size_histogram(&labels),
            vec![(8, 3), (1, 2), (3, 2), (2, 1)]
        );
    }

    #[test]
    fn densify_uses_first_occurrence_order() {
        let (dense, count) = densify(&[9, 9, 4, 9, 7]);
        assert_eq!(dense, vec![0, 0, 1, 0, 2]);
        assert_eq!(count, 3);
    }

    #[test]
    fn report_lists_count_then_sizes_descending() {
        let labels = vec![3, 3, 1, 1, 8, 8, 8, 2];
        assert_eq!(format_region_report(&labels), "4\n3\n2\n2\n1\n");
    }

    #[test]
    fn report_of_empty_labelling() {
        assert_eq!(format_region_report(&[]), "0\n");
    }
}
