//! Tracker configuration

use serde::{Deserialize, Serialize};

/// Configuration for the two-tier tracking state machine
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Maximum frames to keep a track alive without a matching detection
    pub max_age: u32,
    /// Minimum hits before a track appears in the active output
    pub min_hits: u32,
    /// IoU threshold for associating detections to tracks
    pub iou_threshold: f32,
    /// Minimum detection score considered trackable at all
    pub track_thresh: f32,
    /// Score at or above which a detection joins the high-confidence tier
    pub high_thresh: f32,
    /// Matching threshold for high-confidence association (reserved)
    pub match_thresh: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_age: 30,
            min_hits: 3,
            iou_threshold: 0.3,
            track_thresh: 0.5,
            high_thresh: 0.6,
            match_thresh: 0.8,
        }
    }
}
