//! Upstream segment DTOs
//!
//! The segmentation service returns per-segment entity lists. Detection
//! records are kept as loose JSON at the outermost edge so a malformed
//! record can be skipped on its own instead of failing the whole segment;
//! each record is validated into a typed [`RawDetection`] at the boundary.

use serde::{Deserialize, Serialize};

/// One time segment produced by the upstream segmentation service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub start_time: Option<f64>,
    #[serde(default)]
    pub end_time: Option<f64>,
    #[serde(default)]
    pub entities: SegmentEntities,
}

/// Entity payload of a segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentEntities {
    /// Raw detection records, one JSON value per detection.
    #[serde(default)]
    pub detections: Vec<serde_json::Value>,
}

/// A detection record after boundary validation. Every field is optional;
/// the mention collector applies segment-bound fallbacks and normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDetection {
    #[serde(default)]
    pub object_name: Option<String>,
    #[serde(default)]
    pub start_time: Option<f64>,
    #[serde(default)]
    pub end_time: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub scene_description: Option<String>,
}
