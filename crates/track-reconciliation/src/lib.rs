//! Track reconciliation engine
//!
//! Reconciles noisy per-segment object detections from an upstream
//! video-understanding service into a small set of canonical, temporally
//! coherent tracks, one per physical object, each carrying a disjoint set
//! of visibility intervals.
//!
//! # Pipeline
//! 1. **Mention collection** - flatten segments into normalized mentions
//! 2. **Temporal clustering** - gap-tolerant union-find chains per name
//! 3. **Heuristic filtering** - drop sparse or brief clusters
//! 4. **Canonicalization** - collapse clusters per dedup oracle decisions
//! 5. **Track merging** - resolve high-overlap tracks via the merge oracle
//!
//! The two oracles are reached through the narrow traits in
//! `video-reconcile-core`; the engine itself never touches the network.
//!
//! # Example
//! ```
//! use video_track_reconciliation::{ReconcileConfig, TrackReconciler};
//!
//! let reconciler = TrackReconciler::new(ReconcileConfig::default());
//! assert_eq!(reconciler.config().merge_gap_seconds, 0.3);
//! ```

pub mod canonical;
pub mod cluster;
pub mod filter;
pub mod intervals;
pub mod mentions;
pub mod merge;
pub mod pipeline;
pub mod report;

pub use canonical::resolve_dedup;
pub use cluster::{cluster_by_name, NameCluster};
pub use filter::{filter_clusters, FilterConfig};
pub use intervals::{
    intersection_length, merge_intervals, overlap_ratio, total_length, DEFAULT_MERGE_GAP_SECONDS,
};
pub use mentions::{collect_mentions, Mention};
pub use merge::{apply_merge_mapping, high_overlap_pairs, DEFAULT_TRACK_OVERLAP_THRESHOLD};
pub use pipeline::{ReconcileConfig, TrackReconciler};
pub use report::{ReconcileReport, ReportItem};
