//! Caller-facing report shaping

use serde::{Deserialize, Serialize};
use video_reconcile_core::{CanonicalTrack, Interval};

/// One reconciled object in the caller's response format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportItem {
    pub label: String,
    pub description: String,
    pub timestamps: Vec<Interval>,
}

/// Final response payload: the target phrase plus one item per track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileReport {
    pub target_description: String,
    pub items: Vec<ReportItem>,
}

impl ReconcileReport {
    /// Shape final tracks for serialization. The first scene description of
    /// each track becomes its item description.
    pub fn from_tracks(target_description: impl Into<String>, tracks: &[CanonicalTrack]) -> Self {
        let items = tracks
            .iter()
            .map(|track| ReportItem {
                label: track.object_name.clone(),
                description: track
                    .scene_descriptions
                    .first()
                    .cloned()
                    .unwrap_or_default(),
                timestamps: track.intervals.clone(),
            })
            .collect();

        Self {
            target_description: target_description.into(),
            items,
        }
    }
}
