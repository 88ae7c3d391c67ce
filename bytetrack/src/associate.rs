//! Greedy IoU association between tracks and detections

use crate::bbox::{iou_matrix, Bbox};

/// Result of associating detections against a track pool
///
/// Indices refer to the slices passed to [`associate`], in their original
/// enumeration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Association {
    /// Matched (track index, detection index) pairs
    pub matches: Vec<(usize, usize)>,
    /// Track indices left without a detection
    pub unmatched_tracks: Vec<usize>,
    /// Detection indices left without a track
    pub unmatched_detections: Vec<usize>,
}

/// Assign detections to tracks by spatial overlap.
///
/// Candidate pairs with IoU >= `iou_threshold` are sorted by IoU descending
/// (ties broken by track index, then detection index) and accepted greedily
/// while both sides are still unassigned. Greedy matching is approximate, not
/// a globally optimal assignment; swapping in an optimal solver changes the
/// output in ambiguous-overlap cases.
pub fn associate(tracks: &[Bbox], detections: &[Bbox], iou_threshold: f32) -> Association {
    if tracks.is_empty() {
        return Association {
            matches: Vec::new(),
            unmatched_tracks: Vec::new(),
            unmatched_detections: (0..detections.len()).collect(),
        };
    }
    if detections.is_empty() {
        return Association {
            matches: Vec::new(),
            unmatched_tracks: (0..tracks.len()).collect(),
            unmatched_detections: Vec::new(),
        };
    }

    let ious = iou_matrix(tracks, detections);

    let mut candidates: Vec<(usize, usize, f32)> = Vec::new();
    for t in 0..tracks.len() {
        for d in 0..detections.len() {
            let iou = ious[(t, d)];
            if iou >= iou_threshold {
                candidates.push((t, d, iou));
            }
        }
    }

    candidates.sort_by(|a, b| {
        b.2.partial_cmp(&a.2)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
            .then(a.1.cmp(&b.1))
    });

    let mut track_taken = vec![false; tracks.len()];
    let mut det_taken = vec![false; detections.len()];
    let mut matches = Vec::new();

    for (t, d, _) in candidates {
        if !track_taken[t] && !det_taken[d] {
            track_taken[t] = true;
            det_taken[d] = true;
            matches.push((t, d));
        }
    }

    let unmatched_tracks = (0..tracks.len()).filter(|&t| !track_taken[t]).collect();
    let unmatched_detections = (0..detections.len()).filter(|&d| !det_taken[d]).collect();

    Association {
        matches,
        unmatched_tracks,
        unmatched_detections,
    }
}
