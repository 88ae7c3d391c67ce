//! Event-log export for external consumption
//!
//! The counter itself defines no wire protocol; these helpers serialize the
//! accumulated event log to CSV (columns `timestamp, track_id, direction,
//! total_enter, total_exit`) or JSON for the surrounding tooling.

use crate::counter::LineCounter;
use crate::error::Result;
use crate::event::CountingEvent;
use std::io::Write;
use std::path::Path;

/// Write events as CSV with a header row, in event order
pub fn write_events_csv<W: Write>(events: &[CountingEvent], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for event in events {
        csv_writer.serialize(event)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write events as a JSON array
pub fn write_events_json<W: Write>(events: &[CountingEvent], writer: W) -> Result<()> {
    serde_json::to_writer(writer, events)?;
    Ok(())
}

impl LineCounter {
    /// Export the event log as CSV to any writer
    pub fn write_history_csv<W: Write>(&self, writer: W) -> Result<()> {
        write_events_csv(self.events(), writer)
    }

    /// Export the event log as a JSON array to any writer
    pub fn write_history_json<W: Write>(&self, writer: W) -> Result<()> {
        write_events_json(self.events(), writer)
    }

    /// Export the event log as CSV to a file path
    pub fn save_history_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut csv_writer = csv::Writer::from_path(path)?;
        for event in self.events() {
            csv_writer.serialize(event)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Direction;

    fn sample_events() -> Vec<CountingEvent> {
        vec![
            CountingEvent {
                timestamp: 0.5,
                track_id: 3,
                direction: Direction::Enter,
                total_enter: 1,
                total_exit: 0,
            },
            CountingEvent {
                timestamp: 2.25,
                track_id: 3,
                direction: Direction::Exit,
                total_enter: 1,
                total_exit: 1,
            },
        ]
    }

    #[test]
    fn test_csv_layout() {
        let mut buffer = Vec::new();
        write_events_csv(&sample_events(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("timestamp,track_id,direction,total_enter,total_exit")
        );
        assert_eq!(lines.next(), Some("0.5,3,enter,1,0"));
        assert_eq!(lines.next(), Some("2.25,3,exit,1,1"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_json_round_trip() {
        let events = sample_events();
        let mut buffer = Vec::new();
        write_events_json(&events, &mut buffer).unwrap();
        let parsed: Vec<CountingEvent> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, events);
    }

    #[test]
    fn test_empty_history_is_empty_output() {
        let mut buffer = Vec::new();
        write_events_csv(&[], &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }
}
