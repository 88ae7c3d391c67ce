//! Two-tier IoU-based multi-object tracking
//!
//! Assigns stable integer identities to per-frame detections. High-confidence
//! detections are associated greedily by IoU against tracked tracks;
//! low-confidence detections get a second pass against lost tracks so brief
//! occlusions do not break identities.
//!
//! ```rust,ignore
//! use bytetrack::{Bbox, ByteTracker, Detection, TrackerConfig};
//!
//! let mut tracker = ByteTracker::new(TrackerConfig::default());
//! let detections = vec![Detection::new(Bbox::new(10.0, 10.0, 50.0, 90.0), 0.9)];
//! let active = tracker.update(&detections);
//! ```

pub mod associate;
pub mod bbox;
pub mod config;
pub mod track;
pub mod tracker;

pub use associate::{associate, Association};
pub use bbox::{calculate_iou, iou_matrix, Bbox};
pub use config::TrackerConfig;
pub use track::{Track, TrackState, HISTORY_CAPACITY};
pub use tracker::{ByteTracker, Detection, TrackedBox};
