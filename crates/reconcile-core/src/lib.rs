//! Reconcile Core - shared data model and oracle contracts
//!
//! This crate provides the boundary layer for the track reconciliation
//! pipeline: the shared data model, the upstream segment DTOs, the typed
//! request/response contracts for the two semantic oracles, and the error
//! taxonomy. It contains no algorithms; the engine lives in
//! `video-track-reconciliation`.

pub mod error;
pub mod oracle;
pub mod segment;
pub mod track;

pub use error::{OracleError, ReconcileError};
pub use oracle::{
    DedupCandidate, DedupDecision, DedupOracle, DedupRequest, DedupResponse, MergeOracle,
    MergeRequest, MergeResponse, OverlapPair,
};
pub use segment::{RawDetection, Segment, SegmentEntities};
pub use track::{CanonicalTrack, Interval};
