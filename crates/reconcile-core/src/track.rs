//! Shared data model for visibility intervals and canonical tracks

use serde::{Deserialize, Serialize};

/// A visibility interval in seconds, `end_time >= start_time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start_time: f64,
    pub end_time: f64,
}

impl Interval {
    pub fn new(start_time: f64, end_time: f64) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Interval length, clamped at zero for reversed endpoints that slipped
    /// through upstream validation.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.end_time - self.start_time).max(0.0)
    }

    /// Copy with both endpoints rounded to milliseconds.
    pub fn rounded(&self) -> Self {
        Self {
            start_time: (self.start_time * 1000.0).round() / 1000.0,
            end_time: (self.end_time * 1000.0).round() / 1000.0,
        }
    }
}

/// A canonical object identity: one physical object with its aliases and a
/// disjoint, merged set of visibility intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTrack {
    /// Canonical object name
    pub object_name: String,
    /// Original cluster names collapsed into this track, sorted
    pub aliases: Vec<String>,
    /// Disjoint intervals, sorted ascending
    pub intervals: Vec<Interval>,
    /// Deduplicated scene descriptions, first-seen order
    pub scene_descriptions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_length() {
        assert_eq!(Interval::new(1.0, 3.5).length(), 2.5);
        assert_eq!(Interval::new(3.0, 1.0).length(), 0.0);
    }

    #[test]
    fn test_interval_rounding() {
        let iv = Interval::new(1.23456, 2.99999).rounded();
        assert_eq!(iv.start_time, 1.235);
        assert_eq!(iv.end_time, 3.0);
    }

    #[test]
    fn test_track_serialization() {
        let track = CanonicalTrack {
            object_name: "soda can".to_string(),
            aliases: vec!["red soda can".to_string(), "soda can".to_string()],
            intervals: vec![Interval::new(0.0, 2.0)],
            scene_descriptions: vec!["on the kitchen counter".to_string()],
        };

        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["object_name"], "soda can");
        assert_eq!(json["intervals"][0]["start_time"], 0.0);

        let back: CanonicalTrack = serde_json::from_value(json).unwrap();
        assert_eq!(back, track);
    }
}
