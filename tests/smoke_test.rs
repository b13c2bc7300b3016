//! Workspace smoke test: segments in, serialized report out

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use video_reconcile_core::{
    DedupDecision, DedupOracle, DedupRequest, DedupResponse, MergeOracle, MergeRequest,
    MergeResponse, OracleError, Segment,
};
use video_track_reconciliation::{ReconcileConfig, ReconcileReport, TrackReconciler};

struct KeepAllDedup;

#[async_trait]
impl DedupOracle for KeepAllDedup {
    async fn dedup(&self, request: &DedupRequest) -> Result<DedupResponse, OracleError> {
        Ok(DedupResponse {
            items: request
                .candidates
                .iter()
                .map(|c| DedupDecision {
                    name: c.name.clone(),
                    keep: true,
                    canonical_name: Some(c.name.clone()),
                })
                .collect(),
        })
    }
}

struct ScriptedMerge {
    merge_to: Option<BTreeMap<String, String>>,
}

#[async_trait]
impl MergeOracle for ScriptedMerge {
    async fn merge(&self, _request: &MergeRequest) -> Result<MergeResponse, OracleError> {
        Ok(MergeResponse {
            merge_to: self.merge_to.clone(),
        })
    }
}

/// Upstream-shaped segment payload: one sturdy object, one noisy duplicate
/// within a segment, one malformed record, one too-brief object.
fn upstream_segments() -> Vec<Segment> {
    serde_json::from_value(json!([
        {
            "start_time": 0.0,
            "end_time": 1.0,
            "entities": {
                "detections": [
                    {
                        "object_name": "soda can",
                        "start_time": 0.0,
                        "end_time": 1.0,
                        "reason": "prominent on the counter",
                        "scene_description": "a kitchen counter with a soda can"
                    },
                    {"object_name": "soda can", "start_time": 0.5, "end_time": 0.9},
                    "garbage entry"
                ]
            }
        },
        {
            "start_time": 1.0,
            "end_time": 2.0,
            "entities": {
                "detections": [
                    {"object_name": "soda can", "start_time": 1.2, "end_time": 2.0},
                    {"object_name": "flicker", "start_time": 1.5, "end_time": 1.6}
                ]
            }
        },
        {
            "start_time": 5.0,
            "end_time": 6.0,
            "entities": {
                "detections": [
                    {"object_name": "soda can", "end_time": 6.0}
                ]
            }
        }
    ]))
    .unwrap()
}

#[tokio::test]
async fn test_segments_to_report() {
    let reconciler = TrackReconciler::new(ReconcileConfig::default());
    let merge_oracle = ScriptedMerge { merge_to: None };

    let tracks = reconciler
        .run(
            "a soda can",
            &upstream_segments(),
            &KeepAllDedup,
            &merge_oracle,
        )
        .await
        .unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].object_name, "soda can");

    let report = ReconcileReport::from_tracks("a soda can", &tracks);
    let payload = serde_json::to_value(&report).unwrap();

    assert_eq!(payload["target_description"], "a soda can");
    assert_eq!(payload["items"][0]["label"], "soda can");
    assert_eq!(
        payload["items"][0]["description"],
        "a kitchen counter with a soda can"
    );
    let timestamps = payload["items"][0]["timestamps"].as_array().unwrap();
    assert_eq!(timestamps.len(), 2);
    assert_eq!(timestamps[0]["start_time"], 0.0);
    assert_eq!(timestamps[0]["end_time"], 2.0);
}

#[tokio::test]
async fn test_reconciliation_is_repeatable() {
    let reconciler = TrackReconciler::new(ReconcileConfig::default());
    let merge_oracle = ScriptedMerge { merge_to: None };
    let segments = upstream_segments();

    let first = reconciler
        .run("a soda can", &segments, &KeepAllDedup, &merge_oracle)
        .await
        .unwrap();
    let second = reconciler
        .run("a soda can", &segments, &KeepAllDedup, &merge_oracle)
        .await
        .unwrap();

    assert_eq!(first, second);
}
