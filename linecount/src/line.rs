//! Counting line geometry and side classification

use crate::event::Direction;
use serde::{Deserialize, Serialize};

/// Declared orientation of a counting line
///
/// Descriptive metadata only: side classification derives purely from the
/// signed distance to the implicit line equation, never from the orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineOrientation {
    Horizontal,
    Vertical,
}

/// A virtual counting line defined by two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountingLine {
    pub start: (f32, f32),
    pub end: (f32, f32),
    pub orientation: LineOrientation,
}

impl CountingLine {
    pub fn new(start: (f32, f32), end: (f32, f32), orientation: LineOrientation) -> Self {
        Self {
            start,
            end,
            orientation,
        }
    }

    /// Coefficients (a, b, c) of the implicit line equation a*x + b*y + c = 0
    pub fn coefficients(&self) -> (f32, f32, f32) {
        let (x1, y1) = self.start;
        let (x2, y2) = self.end;
        let a = y2 - y1;
        let b = -(x2 - x1);
        let c = (x2 - x1) * y1 - (y2 - y1) * x1;
        (a, b, c)
    }

    /// Signed perpendicular distance from a point to the line.
    ///
    /// The sign encodes the side. A degenerate line (coincident endpoints)
    /// yields 0 for every point.
    pub fn signed_distance(&self, point: (f32, f32)) -> f32 {
        let (a, b, c) = self.coefficients();
        let norm_sq = a * a + b * b;
        if norm_sq > 0.0 {
            (a * point.0 + b * point.1 + c) / norm_sq.sqrt()
        } else {
            0.0
        }
    }

    /// Classify which side of the line a point lies on.
    ///
    /// Negative distance is the enter side, non-negative the exit side,
    /// regardless of the declared orientation. Callers wanting the opposite
    /// convention swap the two endpoints.
    pub fn side(&self, point: (f32, f32)) -> Direction {
        if self.signed_distance(point) < 0.0 {
            Direction::Enter
        } else {
            Direction::Exit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vertical_line_coefficients() {
        let line = CountingLine::new((50.0, 0.0), (50.0, 100.0), LineOrientation::Vertical);
        let (a, b, c) = line.coefficients();
        assert_eq!(a, 100.0);
        assert_eq!(b, 0.0);
        assert_eq!(c, -5000.0);
    }

    #[test]
    fn test_vertical_line_distance_is_x_offset() {
        let line = CountingLine::new((50.0, 0.0), (50.0, 100.0), LineOrientation::Vertical);
        assert_abs_diff_eq!(line.signed_distance((40.0, 30.0)), -10.0, epsilon = 0.0001);
        assert_abs_diff_eq!(line.signed_distance((90.0, 70.0)), 40.0, epsilon = 0.0001);
        assert_abs_diff_eq!(line.signed_distance((50.0, 12.0)), 0.0, epsilon = 0.0001);
    }

    #[test]
    fn test_side_classification() {
        let line = CountingLine::new((50.0, 0.0), (50.0, 100.0), LineOrientation::Vertical);
        assert_eq!(line.side((40.0, 50.0)), Direction::Enter);
        assert_eq!(line.side((60.0, 50.0)), Direction::Exit);
        // A point exactly on the line classifies as the exit side
        assert_eq!(line.side((50.0, 50.0)), Direction::Exit);
    }

    #[test]
    fn test_swapped_endpoints_flip_sides() {
        let line = CountingLine::new((50.0, 100.0), (50.0, 0.0), LineOrientation::Vertical);
        assert_eq!(line.side((40.0, 50.0)), Direction::Exit);
        assert_eq!(line.side((60.0, 50.0)), Direction::Enter);
    }

    #[test]
    fn test_degenerate_line() {
        let line = CountingLine::new((10.0, 10.0), (10.0, 10.0), LineOrientation::Horizontal);
        assert_eq!(line.signed_distance((500.0, -3.0)), 0.0);
        assert_eq!(line.side((500.0, -3.0)), Direction::Exit);
    }

    #[test]
    fn test_horizontal_line_distance() {
        // For a left-to-right horizontal line the distance reduces to y1 - y,
        // so points above the line land on the exit side
        let line = CountingLine::new((0.0, 100.0), (200.0, 100.0), LineOrientation::Horizontal);
        assert_abs_diff_eq!(line.signed_distance((50.0, 80.0)), 20.0, epsilon = 0.0001);
        assert_eq!(line.side((50.0, 80.0)), Direction::Exit);
        assert_eq!(line.side((50.0, 120.0)), Direction::Enter);
    }
}
