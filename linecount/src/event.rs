//! Counting event records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Crossing direction, also used as the side label for line classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Enter,
    Exit,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Enter => write!(f, "enter"),
            Direction::Exit => write!(f, "exit"),
        }
    }
}

/// An immutable record of one counted crossing
///
/// The cumulative totals are captured at the moment of the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountingEvent {
    /// Timestamp in seconds
    pub timestamp: f64,
    pub track_id: u32,
    pub direction: Direction,
    pub total_enter: u64,
    pub total_exit: u64,
}
