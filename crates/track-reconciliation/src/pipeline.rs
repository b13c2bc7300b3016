//! Pipeline orchestrator
//!
//! Wires the reconciliation stages into a single pass: mention collection,
//! temporal clustering, heuristic filtering, oracle-guided canonicalization,
//! and overlap-triggered track merging. One call per video; nothing is
//! shared across runs.

use crate::canonical::resolve_dedup;
use crate::cluster::{cluster_by_name, NameCluster};
use crate::filter::{filter_clusters, FilterConfig};
use crate::intervals::DEFAULT_MERGE_GAP_SECONDS;
use crate::merge::{apply_merge_mapping, high_overlap_pairs, DEFAULT_TRACK_OVERLAP_THRESHOLD};
use crate::mentions::collect_mentions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};
use video_reconcile_core::{
    CanonicalTrack, DedupCandidate, DedupOracle, DedupRequest, Interval, MergeOracle,
    MergeRequest, ReconcileError, Segment,
};

/// Reconciliation pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Gap tolerance for unioning intervals, in seconds (default: 0.3)
    pub merge_gap_seconds: f64,
    /// Mutual overlap ratio that triggers a merge oracle consult (default: 0.85)
    pub track_overlap_threshold: f64,
    /// Cluster filtering thresholds
    pub filter: FilterConfig,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            merge_gap_seconds: DEFAULT_MERGE_GAP_SECONDS,
            track_overlap_threshold: DEFAULT_TRACK_OVERLAP_THRESHOLD,
            filter: FilterConfig::default(),
        }
    }
}

impl ReconcileConfig {
    /// Load configuration from a YAML manifest.
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self, ReconcileError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ReconcileError::InvalidConfig(format!("Failed to read config: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| ReconcileError::InvalidConfig(format!("Failed to parse YAML: {}", e)))
    }
}

/// Single-pass reconciler turning segment detections into canonical tracks.
pub struct TrackReconciler {
    config: ReconcileConfig,
}

impl TrackReconciler {
    pub fn new(config: ReconcileConfig) -> Self {
        info!("Creating track reconciler with config: {:?}", config);
        Self { config }
    }

    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Run one reconciliation pass over the segment list.
    ///
    /// Oracle clients are injected per call; the reconciler holds no client
    /// state between runs. A dedup oracle failure is fatal for the run. The
    /// merge oracle is only consulted when at least two tracks overlap past
    /// the threshold, and a missing `merge_to` mapping leaves the tracks
    /// unchanged.
    pub async fn run(
        &self,
        target_description: &str,
        segments: &[Segment],
        dedup_oracle: &dyn DedupOracle,
        merge_oracle: &dyn MergeOracle,
    ) -> Result<Vec<CanonicalTrack>, ReconcileError> {
        let mentions = collect_mentions(segments);

        let clusters = cluster_by_name(&mentions, self.config.merge_gap_seconds);
        let clusters = filter_clusters(clusters, &self.config.filter);

        let request = self.build_dedup_request(target_description, &clusters);
        let response = dedup_oracle
            .dedup(&request)
            .await
            .map_err(ReconcileError::DedupCall)?;

        let tracks = resolve_dedup(&clusters, &response.items, self.config.merge_gap_seconds);
        info!(
            "Canonicalized {} clusters into {} tracks",
            clusters.len(),
            tracks.len()
        );

        if tracks.len() < 2 {
            return Ok(tracks);
        }

        let pairs = high_overlap_pairs(&tracks, self.config.track_overlap_threshold);
        if pairs.is_empty() {
            return Ok(tracks);
        }
        debug!(
            "{} high-overlap track pairs, consulting merge oracle",
            pairs.len()
        );

        let merge_request = MergeRequest {
            target_description: target_description.to_string(),
            tracks: tracks.clone(),
            high_overlap_pairs: pairs,
        };
        let merge_response = merge_oracle
            .merge(&merge_request)
            .await
            .map_err(ReconcileError::MergeCall)?;

        match merge_response.merge_to {
            Some(mapping) => Ok(apply_merge_mapping(
                tracks,
                &mapping,
                self.config.merge_gap_seconds,
            )),
            None => Ok(tracks),
        }
    }

    fn build_dedup_request(
        &self,
        target_description: &str,
        clusters: &BTreeMap<String, NameCluster>,
    ) -> DedupRequest {
        let mut candidates: Vec<DedupCandidate> = clusters
            .iter()
            .map(|(name, cluster)| DedupCandidate {
                name: name.clone(),
                mention_count: cluster.mention_count,
                total_visible_seconds: round_millis(cluster.total_visible_seconds),
                intervals: cluster.intervals.iter().map(Interval::rounded).collect(),
                scene_descriptions: cluster.scene_descriptions.clone(),
            })
            .collect();
        candidates.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        DedupRequest {
            target_description: target_description.to_string(),
            candidates,
        }
    }
}

fn round_millis(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
