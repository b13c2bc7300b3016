//! Mention collection
//!
//! Flattens the upstream segment structure into a flat list of normalized
//! mention records, one per kept detection. No cross-segment deduplication
//! happens here; that is the clusterer's job.

use std::collections::HashSet;
use tracing::debug;
use video_reconcile_core::{RawDetection, Segment};

/// One raw per-segment object detection, normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Mention {
    pub object_name: String,
    pub start_time: f64,
    pub end_time: f64,
    pub reason: String,
    pub scene_description: String,
}

/// Flatten segments into an ordered list of mentions.
///
/// Records are dropped silently when they are not well-formed objects, have
/// an empty or whitespace-only name, or repeat a name already seen within
/// the same segment (first occurrence wins, which bounds how much a single
/// segment can inflate one name's mention count). Missing times fall back
/// to the segment's own bounds; reversed times are swapped.
pub fn collect_mentions(segments: &[Segment]) -> Vec<Mention> {
    let mut out = Vec::new();

    for segment in segments {
        let seg_start = segment.start_time.unwrap_or(0.0);
        let seg_end = segment.end_time.unwrap_or(seg_start);

        let mut seen: HashSet<String> = HashSet::new();
        for raw in &segment.entities.detections {
            let detection: RawDetection = match serde_json::from_value(raw.clone()) {
                Ok(d) => d,
                Err(_) => continue,
            };

            let name = detection
                .object_name
                .as_deref()
                .map(str::trim)
                .unwrap_or("");
            if name.is_empty() || seen.contains(name) {
                continue;
            }
            seen.insert(name.to_string());

            let mut start = detection.start_time.unwrap_or(seg_start);
            let mut end = detection.end_time.unwrap_or(seg_end);
            if end < start {
                std::mem::swap(&mut start, &mut end);
            }

            out.push(Mention {
                object_name: name.to_string(),
                start_time: start,
                end_time: end,
                reason: detection.reason.unwrap_or_default().trim().to_string(),
                scene_description: detection
                    .scene_description
                    .unwrap_or_default()
                    .trim()
                    .to_string(),
            });
        }
    }

    debug!(
        "Collected {} mentions from {} segments",
        out.len(),
        segments.len()
    );
    out
}
