//! Line-crossing counting state machine
//!
//! Consumes the tracker's active tracks once per frame, detects side
//! crossings with debounce against detection jitter, and maintains the
//! running enter/exit/occupancy counts plus the append-only event log.

use crate::event::{CountingEvent, Direction};
use crate::line::CountingLine;
use bytetrack::TrackedBox;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Configuration for crossing detection and state retention
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Minimum pixels a center must move between frames for a crossing to count
    pub min_crossing_distance: f32,
    /// Perpendicular distance from the line a counted track must reach
    /// before it may be counted again
    pub crossing_reset_distance: f32,
    /// Frames a track may go unseen before its counting state is forgotten
    pub lost_frame_threshold: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            min_crossing_distance: 2.0,
            crossing_reset_distance: 20.0,
            lost_frame_threshold: 30,
        }
    }
}

/// Per-track counting state, independent of the tracker's own lifecycle
#[derive(Debug, Clone)]
struct CrossingState {
    last_center: (f32, f32),
    last_side: Direction,
    counted: bool,
    frames_since_seen: u32,
}

/// Directional crossing counter over a virtual line
#[derive(Debug, Clone)]
pub struct LineCounter {
    line: CountingLine,
    config: CounterConfig,
    states: BTreeMap<u32, CrossingState>,
    total_enter: u64,
    total_exit: u64,
    occupancy: u64,
    history: Vec<CountingEvent>,
}

impl LineCounter {
    pub fn new(line: CountingLine) -> Self {
        Self::with_config(line, CounterConfig::default())
    }

    pub fn with_config(line: CountingLine, config: CounterConfig) -> Self {
        LineCounter {
            line,
            config,
            states: BTreeMap::new(),
            total_enter: 0,
            total_exit: 0,
            occupancy: 0,
            history: Vec::new(),
        }
    }

    /// Advance the counter by one frame of active tracks.
    ///
    /// Returns the running (total_enter, total_exit, current_occupancy).
    pub fn update(&mut self, tracks: &[TrackedBox], timestamp: f64) -> (u64, u64, u64) {
        for state in self.states.values_mut() {
            state.frames_since_seen += 1;
        }

        for track in tracks {
            let center = track.bbox.center();
            let side = self.line.side(center);

            let state = match self.states.entry(track.track_id) {
                Entry::Vacant(entry) => {
                    // First sighting of this id: record, never count
                    entry.insert(CrossingState {
                        last_center: center,
                        last_side: side,
                        counted: false,
                        frames_since_seen: 0,
                    });
                    continue;
                }
                Entry::Occupied(entry) => entry.into_mut(),
            };
            state.frames_since_seen = 0;

            let moved = euclidean(center, state.last_center);

            if side != state.last_side {
                // Crossing candidate: count unless this episode was already
                // counted or the movement is within jitter range
                if !state.counted && moved >= self.config.min_crossing_distance {
                    state.counted = true;
                    match side {
                        Direction::Enter => {
                            self.total_enter += 1;
                            self.occupancy += 1;
                        }
                        Direction::Exit => {
                            self.total_exit += 1;
                            self.occupancy = self.occupancy.saturating_sub(1);
                        }
                    }
                    self.history.push(CountingEvent {
                        timestamp,
                        track_id: track.track_id,
                        direction: side,
                        total_enter: self.total_enter,
                        total_exit: self.total_exit,
                    });
                    log::info!(
                        "track {} {}: enter={} exit={} occupancy={}",
                        track.track_id,
                        side,
                        self.total_enter,
                        self.total_exit,
                        self.occupancy
                    );
                } else {
                    log::debug!(
                        "track {} side change suppressed (counted={} moved={:.1})",
                        track.track_id,
                        state.counted,
                        moved
                    );
                }
            } else if state.counted {
                // Re-arm only after sustained departure from the line; a
                // track oscillating inside the reset band stays counted.
                let line_distance = self.line.signed_distance(center).abs();
                if line_distance > self.config.crossing_reset_distance
                    && moved >= self.config.min_crossing_distance
                {
                    state.counted = false;
                    log::debug!("track {} re-armed for counting", track.track_id);
                }
            }

            state.last_center = center;
            state.last_side = side;
        }

        let threshold = self.config.lost_frame_threshold;
        self.states.retain(|_, s| s.frames_since_seen < threshold);

        (self.total_enter, self.total_exit, self.occupancy)
    }

    /// Current running counts without advancing a frame
    pub fn counts(&self) -> (u64, u64, u64) {
        (self.total_enter, self.total_exit, self.occupancy)
    }

    /// Copy of the accumulated event log, in event order
    pub fn history(&self) -> Vec<CountingEvent> {
        self.history.clone()
    }

    /// Clear only the per-track counted flags, leaving counts and history
    /// untouched. Intended for tooling and debugging.
    pub fn reset_counted_flags(&mut self) {
        for state in self.states.values_mut() {
            state.counted = false;
        }
    }

    /// Full reset: zero the counts, drop the event log, and forget all
    /// per-track state.
    pub fn clear(&mut self) {
        self.states.clear();
        self.total_enter = 0;
        self.total_exit = 0;
        self.occupancy = 0;
        self.history.clear();
    }

    pub fn line(&self) -> &CountingLine {
        &self.line
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Number of track ids with live counting state
    pub fn num_tracked_states(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn events(&self) -> &[CountingEvent] {
        &self.history
    }
}

fn euclidean(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
