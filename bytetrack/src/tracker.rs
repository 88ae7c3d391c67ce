//! ByteTrack-style two-tier tracking state machine
//!
//! High-confidence detections are associated against tracked tracks first;
//! low-confidence detections get a second chance to reactivate lost tracks
//! before the grace period expires.

use crate::associate::associate;
use crate::bbox::Bbox;
use crate::config::TrackerConfig;
use crate::track::{Track, TrackState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A per-frame detection: a box and its score, no identity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bbox: Bbox,
    pub score: f32,
}

impl Detection {
    pub fn new(bbox: Bbox, score: f32) -> Self {
        Self { bbox, score }
    }
}

/// A confirmed track as emitted to downstream consumers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackedBox {
    pub bbox: Bbox,
    pub track_id: u32,
    pub score: f32,
}

/// Multi-object tracker owning the set of live tracks
#[derive(Debug, Clone)]
pub struct ByteTracker {
    config: TrackerConfig,
    tracks: BTreeMap<u32, Track>,
    next_id: u32,
    frame_count: u64,
}

impl ByteTracker {
    pub fn new(config: TrackerConfig) -> Self {
        ByteTracker {
            config,
            tracks: BTreeMap::new(),
            next_id: 1,
            frame_count: 0,
        }
    }

    /// Advance the tracker by one frame of detections.
    ///
    /// Returns the active tracks: confirmed (`hits >= min_hits`), currently
    /// tracked identities, in ascending id order.
    pub fn update(&mut self, detections: &[Detection]) -> Vec<TrackedBox> {
        self.frame_count += 1;

        // Split detections into confidence tiers. Anything below
        // `track_thresh` is ignored entirely.
        let high: Vec<Detection> = detections
            .iter()
            .copied()
            .filter(|d| d.score >= self.config.high_thresh)
            .collect();
        let low: Vec<Detection> = detections
            .iter()
            .copied()
            .filter(|d| d.score >= self.config.track_thresh && d.score < self.config.high_thresh)
            .collect();

        // Every live track goes one more frame without a match until proven
        // otherwise; a successful match resets the counter below.
        for track in self.tracks.values_mut() {
            track.time_since_update += 1;
        }

        // First pass: high-confidence detections against tracked tracks
        let (tracked_ids, tracked_boxes): (Vec<u32>, Vec<Bbox>) = self
            .tracks
            .values()
            .filter(|t| t.state == TrackState::Tracked)
            .map(|t| (t.id, t.bbox))
            .unzip();
        let high_boxes: Vec<Bbox> = high.iter().map(|d| d.bbox).collect();
        let first = associate(&tracked_boxes, &high_boxes, self.config.iou_threshold);

        for &(t, d) in &first.matches {
            if let Some(track) = self.tracks.get_mut(&tracked_ids[t]) {
                track.update(high[d].bbox, high[d].score);
            }
        }

        // Unmatched tracked tracks either expire or go lost
        for &t in &first.unmatched_tracks {
            let id = tracked_ids[t];
            let expired = self
                .tracks
                .get(&id)
                .is_some_and(|track| track.time_since_update > self.config.max_age);
            if expired {
                log::debug!("track {} expired while tracked", id);
                self.tracks.remove(&id);
            } else if let Some(track) = self.tracks.get_mut(&id) {
                track.state = TrackState::Lost;
            }
        }

        // Fresh tracks from unmatched high-confidence detections
        for &d in &first.unmatched_detections {
            let det = high[d];
            let id = self.next_id;
            self.next_id += 1;
            log::debug!("new track {} (score {:.2})", id, det.score);
            self.tracks.insert(id, Track::new(id, det.bbox, det.score));
        }

        // Second pass: low-confidence detections against lost tracks
        let (lost_ids, lost_boxes): (Vec<u32>, Vec<Bbox>) = self
            .tracks
            .values()
            .filter(|t| t.state == TrackState::Lost)
            .map(|t| (t.id, t.bbox))
            .unzip();
        let low_boxes: Vec<Bbox> = low.iter().map(|d| d.bbox).collect();
        let second = associate(&lost_boxes, &low_boxes, self.config.iou_threshold);

        for &(t, d) in &second.matches {
            if let Some(track) = self.tracks.get_mut(&lost_ids[t]) {
                // Reactivation: the hit count keeps accumulating from before
                // the loss.
                track.update(low[d].bbox, low[d].score);
                track.state = TrackState::Tracked;
                log::debug!("track {} reactivated", track.id);
            }
        }

        // Lost tracks past the grace period are dropped for good
        let max_age = self.config.max_age;
        self.tracks
            .retain(|_, t| t.state != TrackState::Lost || t.time_since_update <= max_age);

        self.tracks
            .values()
            .filter(|t| t.state == TrackState::Tracked && t.hits >= self.config.min_hits)
            .map(|t| TrackedBox {
                bbox: t.bbox,
                track_id: t.id,
                score: t.score,
            })
            .collect()
    }

    /// Drop all tracks and restart id assignment
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.next_id = 1;
        self.frame_count = 0;
    }

    /// Remove a specific track
    pub fn remove(&mut self, track_id: u32) {
        self.tracks.remove(&track_id);
    }

    /// Number of live tracks (tracked and lost)
    pub fn num_tracks(&self) -> usize {
        self.tracks.len()
    }

    /// Frames processed so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Iterate over all live tracks in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }
}

impl Default for ByteTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
