//! Track entity and lifecycle states

use crate::bbox::Bbox;
use std::collections::VecDeque;

/// Number of center points retained per track
pub const HISTORY_CAPACITY: usize = 30;

/// Lifecycle state of a track
///
/// A removed track is dropped from the tracker entirely rather than kept in a
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackState {
    /// Actively matched, or unmatched for less than one frame
    Tracked,
    /// Unmatched but still within the `max_age` grace period
    Lost,
}

/// A persistent identity assigned to a sequence of detections
#[derive(Debug, Clone)]
pub struct Track {
    /// Unique id, monotonically assigned, never reused
    pub id: u32,
    /// Most recent bounding box
    pub bbox: Bbox,
    /// Most recent detection score
    pub score: f32,
    /// Successful matches since creation
    pub hits: u32,
    /// Frames since the last successful match
    pub time_since_update: u32,
    pub state: TrackState,
    history: VecDeque<(f32, f32)>,
}

impl Track {
    pub fn new(id: u32, bbox: Bbox, score: f32) -> Self {
        let mut history = VecDeque::with_capacity(HISTORY_CAPACITY);
        history.push_back(bbox.center());
        Track {
            id,
            bbox,
            score,
            hits: 1,
            time_since_update: 0,
            state: TrackState::Tracked,
            history,
        }
    }

    /// Apply a matched detection: refresh the box and score, reset the age
    /// counter, and record the new center.
    pub fn update(&mut self, bbox: Bbox, score: f32) {
        self.bbox = bbox;
        self.score = score;
        self.hits += 1;
        self.time_since_update = 0;
        if self.history.len() == HISTORY_CAPACITY {
            self.history.pop_front();
        }
        self.history.push_back(bbox.center());
    }

    /// Recorded center points, oldest first
    pub fn history(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.history.iter().copied()
    }

    /// Predict the next center by linear extrapolation of the last two
    /// recorded positions. Falls back to the current center when the history
    /// is too short.
    pub fn predict_center(&self) -> (f32, f32) {
        let len = self.history.len();
        if len >= 2 {
            let (px, py) = self.history[len - 2];
            let (cx, cy) = self.history[len - 1];
            (cx + (cx - px), cy + (cy - py))
        } else {
            self.bbox.center()
        }
    }
}
