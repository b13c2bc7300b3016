//! Oracle traits and typed request/response contracts
//!
//! The pipeline consults two external semantic oracles: a dedup oracle that
//! judges which candidate names refer to the same physical object, and a
//! merge oracle consulted when finished tracks overlap heavily in time.
//! Both are narrow request/response boundaries; clients are constructed by
//! the caller and injected per call, never owned by the core.

use crate::error::OracleError;
use crate::track::{CanonicalTrack, Interval};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One candidate cluster offered to the dedup oracle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupCandidate {
    pub name: String,
    pub mention_count: usize,
    pub total_visible_seconds: f64,
    pub intervals: Vec<Interval>,
    pub scene_descriptions: Vec<String>,
}

/// Dedup oracle request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupRequest {
    pub target_description: String,
    pub candidates: Vec<DedupCandidate>,
}

/// Keep/merge verdict for a single candidate name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupDecision {
    pub name: String,
    pub keep: bool,
    /// Canonical target. The oracle may omit it or name an unknown cluster;
    /// the resolver falls back to `name` in both cases.
    #[serde(default)]
    pub canonical_name: Option<String>,
}

/// Dedup oracle response. A payload whose `items` field is missing or not a
/// list fails typed deserialization; implementations surface that as
/// [`OracleError::Contract`], which is fatal for the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupResponse {
    pub items: Vec<DedupDecision>,
}

/// A track pair whose mutual overlap reached the merge threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlapPair {
    pub a: String,
    pub b: String,
    pub overlap_ratio: f64,
}

/// Merge oracle request: a compact summary of every track plus the flagged
/// high-overlap pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeRequest {
    pub target_description: String,
    pub tracks: Vec<CanonicalTrack>,
    pub high_overlap_pairs: Vec<OverlapPair>,
}

/// Merge oracle response. This call is advisory: implementations map a
/// missing or malformed `merge_to` to `None`, and the pipeline returns the
/// tracks unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeResponse {
    #[serde(default)]
    pub merge_to: Option<BTreeMap<String, String>>,
}

/// Semantic deduplication oracle.
#[async_trait]
pub trait DedupOracle: Send + Sync {
    async fn dedup(&self, request: &DedupRequest) -> Result<DedupResponse, OracleError>;
}

/// Track-merge oracle.
#[async_trait]
pub trait MergeOracle: Send + Sync {
    async fn merge(&self, request: &MergeRequest) -> Result<MergeResponse, OracleError>;
}
