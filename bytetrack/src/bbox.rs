//! Bounding box operations and IoU calculations

use ndarray::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned bounding box in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bbox {
    pub xmin: f32,
    pub ymin: f32,
    pub xmax: f32,
    pub ymax: f32,
}

impl Bbox {
    pub fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    pub fn width(&self) -> f32 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f32 {
        self.ymax - self.ymin
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Center point (x, y) of the box
    pub fn center(&self) -> (f32, f32) {
        (
            (self.xmin + self.xmax) / 2.0,
            (self.ymin + self.ymax) / 2.0,
        )
    }
}

impl fmt::Display for Bbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bbox({}, {}, {}, {})",
            self.xmin, self.ymin, self.xmax, self.ymax
        )
    }
}

/// Calculate IoU between two bounding boxes
///
/// Returns 0.0 for non-overlapping pairs and for a zero-area union.
pub fn calculate_iou(bbox1: &Bbox, bbox2: &Bbox) -> f32 {
    let x1 = bbox1.xmin.max(bbox2.xmin);
    let y1 = bbox1.ymin.max(bbox2.ymin);
    let x2 = bbox1.xmax.min(bbox2.xmax);
    let y2 = bbox1.ymax.min(bbox2.ymax);

    if x2 <= x1 || y2 <= y1 {
        return 0.0;
    }

    let intersection = (x2 - x1) * (y2 - y1);
    let union = bbox1.area() + bbox2.area() - intersection;

    if union > 0.0 {
        intersection / union
    } else {
        0.0
    }
}

/// Compute the IoU matrix between tracks and detections with parallel processing
/// Returns: (n_tracks, n_detections) IoU matrix
pub fn iou_matrix(tracks: &[Bbox], detections: &[Bbox]) -> Array2<f32> {
    let n_tracks = tracks.len();
    let n_dets = detections.len();

    if n_tracks == 0 || n_dets == 0 {
        return Array2::zeros((n_tracks, n_dets));
    }

    let iou_data: Vec<f32> = tracks
        .par_iter()
        .flat_map(|track_box| {
            detections
                .iter()
                .map(|det_box| calculate_iou(track_box, det_box))
                .collect::<Vec<_>>()
        })
        .collect();

    Array2::from_shape_vec((n_tracks, n_dets), iou_data).unwrap()
}
