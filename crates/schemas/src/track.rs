//! Track geometry snapshot types
//!
//! The simulator owns the real track representation; at track load it hands
//! the robot a read-only snapshot of the segment chain. The robot only ever
//! reads forward along it, so the traversal API is a single
//! [`Track::next_index`] call that refuses to walk past the end of an open
//! segment list.

use serde::{Deserialize, Serialize};

/// Turn direction of a curved segment, seen in travel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveDirection {
    /// Left-hand corner
    Left,
    /// Right-hand corner
    Right,
}

/// Geometric shape of a single track segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SegmentShape {
    /// Straight section
    Straight {
        /// Length along the centerline in meters
        length: f32,
    },
    /// Constant-radius corner
    Curve {
        /// Centerline radius in meters
        radius: f32,
        /// Swept angle in radians
        arc: f32,
        /// Turn direction
        direction: CurveDirection,
    },
}

/// One segment of the track's centerline chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSegment {
    /// Segment geometry
    pub shape: SegmentShape,
    /// Track width in meters
    pub width: f32,
    /// Surface friction coefficient (dimensionless, ~1.0 for dry tarmac)
    pub friction: f32,
}

impl TrackSegment {
    /// Create a straight segment.
    #[must_use]
    pub fn straight(length: f32, width: f32, friction: f32) -> Self {
        Self {
            shape: SegmentShape::Straight { length },
            width,
            friction,
        }
    }

    /// Create a curved segment.
    #[must_use]
    pub fn curve(radius: f32, arc: f32, direction: CurveDirection, width: f32, friction: f32) -> Self {
        Self {
            shape: SegmentShape::Curve {
                radius,
                arc,
                direction,
            },
            width,
            friction,
        }
    }

    /// Whether this segment is a straight.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        matches!(self.shape, SegmentShape::Straight { .. })
    }

    /// Corner radius, or `None` for straights.
    #[must_use]
    pub fn radius(&self) -> Option<f32> {
        match self.shape {
            SegmentShape::Straight { .. } => None,
            SegmentShape::Curve { radius, .. } => Some(radius),
        }
    }

    /// Centerline path length of the segment in meters.
    ///
    /// For curves this is the arc length `radius * arc`.
    #[must_use]
    pub fn path_length(&self) -> f32 {
        match self.shape {
            SegmentShape::Straight { length } => length,
            SegmentShape::Curve { radius, arc, .. } => radius * arc,
        }
    }
}

/// Read-only snapshot of the track's segment chain.
///
/// Closed circuits wrap around; open tracks (point-to-point or partial
/// snapshots) terminate, and [`Track::next_index`] reports the end as
/// `None` instead of wrapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    segments: Vec<TrackSegment>,
    closed: bool,
}

impl Track {
    /// Create a closed circuit from a segment chain.
    #[must_use]
    pub fn circuit(segments: Vec<TrackSegment>) -> Self {
        Self {
            segments,
            closed: true,
        }
    }

    /// Create an open (non-wrapping) track from a segment chain.
    #[must_use]
    pub fn open(segments: Vec<TrackSegment>) -> Self {
        Self {
            segments,
            closed: false,
        }
    }

    /// Whether the chain wraps around.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether the track has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment at `index`, or `None` if out of range.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&TrackSegment> {
        self.segments.get(index)
    }

    /// Index of the segment following `index` in travel direction.
    ///
    /// Returns `None` past the end of an open chain, or for an index that
    /// is already out of range. Lookahead scans terminate on `None` rather
    /// than dereferencing past the chain.
    #[must_use]
    pub fn next_index(&self, index: usize) -> Option<usize> {
        if index >= self.segments.len() {
            return None;
        }
        let next = index + 1;
        if next < self.segments.len() {
            Some(next)
        } else if self.closed {
            Some(0)
        } else {
            None
        }
    }

    /// Total centerline length of the chain in meters.
    #[must_use]
    pub fn total_length(&self) -> f32 {
        self.segments.iter().map(TrackSegment::path_length).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_segment_track(closed: bool) -> Track {
        let segments = vec![
            TrackSegment::straight(100.0, 10.0, 1.0),
            TrackSegment::curve(50.0, 1.0, CurveDirection::Left, 10.0, 1.0),
        ];
        if closed {
            Track::circuit(segments)
        } else {
            Track::open(segments)
        }
    }

    #[test]
    fn test_path_length_straight() {
        let seg = TrackSegment::straight(120.0, 11.0, 1.0);
        assert!((seg.path_length() - 120.0).abs() < 1e-6);
        assert!(seg.is_straight());
        assert!(seg.radius().is_none());
    }

    #[test]
    fn test_path_length_curve_is_arc_length() {
        let seg = TrackSegment::curve(50.0, 0.5, CurveDirection::Right, 11.0, 1.0);
        assert!((seg.path_length() - 25.0).abs() < 1e-6);
        assert!(!seg.is_straight());
        assert_eq!(seg.radius(), Some(50.0));
    }

    #[test]
    fn test_closed_track_wraps() {
        let track = two_segment_track(true);
        assert_eq!(track.next_index(0), Some(1));
        assert_eq!(track.next_index(1), Some(0));
    }

    #[test]
    fn test_open_track_terminates() {
        let track = two_segment_track(false);
        assert_eq!(track.next_index(0), Some(1));
        assert_eq!(track.next_index(1), None);
    }

    #[test]
    fn test_next_index_out_of_range() {
        let track = two_segment_track(true);
        assert_eq!(track.next_index(7), None);
    }

    #[test]
    fn test_total_length() {
        let track = two_segment_track(true);
        assert!((track.total_length() - 150.0).abs() < 1e-4);
    }
}
