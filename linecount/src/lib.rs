//! Directional line-crossing counting over tracked objects
//!
//! Consumes the active-track output of the `bytetrack` crate frame by frame,
//! classifies each track against a virtual counting line, detects debounced
//! side crossings, and maintains cumulative enter/exit/occupancy counts plus
//! an append-only event log.
//!
//! ```rust,ignore
//! use bytetrack::{ByteTracker, Detection, TrackerConfig};
//! use linecount::{CountingLine, LineCounter, LineOrientation};
//!
//! let mut tracker = ByteTracker::new(TrackerConfig::default());
//! let mut counter = LineCounter::new(CountingLine::new(
//!     (320.0, 0.0),
//!     (320.0, 480.0),
//!     LineOrientation::Vertical,
//! ));
//!
//! // per frame:
//! let active = tracker.update(&detections);
//! let (enter, exit, occupancy) = counter.update(&active, timestamp);
//! ```

pub mod counter;
pub mod error;
pub mod event;
pub mod export;
pub mod line;

pub use counter::{CounterConfig, LineCounter};
pub use error::{CountError, Result};
pub use event::{CountingEvent, Direction};
pub use export::{write_events_csv, write_events_json};
pub use line::{CountingLine, LineOrientation};
