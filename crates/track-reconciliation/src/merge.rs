//! Overlap-triggered track merging
//!
//! Detects high mutual overlap between canonical tracks and resolves the
//! merge oracle's name mapping into final merged tracks. The mapping may be
//! chained or cyclic; resolution is hop-bounded and falls back to the
//! original name rather than propagate a hallucinated target.

use crate::canonical::sort_tracks;
use crate::intervals::{merge_intervals, overlap_ratio};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;
use video_reconcile_core::{CanonicalTrack, Interval, OverlapPair};

/// Mutual overlap at or above this ratio flags a track pair for the oracle.
pub const DEFAULT_TRACK_OVERLAP_THRESHOLD: f64 = 0.85;

/// Upper bound on mapping-chain hops. Guarantees termination when the
/// oracle returns a cyclic or nonsensical mapping.
const MAX_MAPPING_HOPS: usize = 20;

/// Scene descriptions carried per merged track.
const MAX_MERGED_SCENE_DESCRIPTIONS: usize = 10;

/// All unordered track pairs whose overlap ratio reaches `threshold`.
pub fn high_overlap_pairs(tracks: &[CanonicalTrack], threshold: f64) -> Vec<OverlapPair> {
    let mut pairs = Vec::new();
    for i in 0..tracks.len() {
        for j in (i + 1)..tracks.len() {
            let ratio = overlap_ratio(&tracks[i].intervals, &tracks[j].intervals);
            if ratio >= threshold {
                pairs.push(OverlapPair {
                    a: tracks[i].object_name.clone(),
                    b: tracks[j].object_name.clone(),
                    overlap_ratio: (ratio * 1000.0).round() / 1000.0,
                });
            }
        }
    }
    pairs
}

/// Follow the mapping chain for `name` until it reaches a fixed point.
///
/// A target outside the known track names aborts the chain and keeps the
/// original name. A chain that exhausts the hop bound without settling
/// (a cycle, or an absurdly long chain) also falls back to the original
/// name.
fn resolve_canonical_name(
    name: &str,
    mapping: &BTreeMap<String, String>,
    known: &HashSet<String>,
) -> String {
    let mut current = name;
    for _ in 0..MAX_MAPPING_HOPS {
        let next = mapping.get(current).map(String::as_str).unwrap_or(current);
        if !known.contains(next) {
            return name.to_string();
        }
        if next == current {
            return current.to_string();
        }
        current = next;
    }
    name.to_string()
}

/// Apply an oracle `merge_to` mapping to the track list.
///
/// Keys that are not existing track names are discarded at ingestion.
/// Tracks are grouped by resolved canonical name; each group unions its
/// intervals, alias sets, and scene descriptions, and the result is
/// re-sorted with the canonicalization ordering.
pub fn apply_merge_mapping(
    tracks: Vec<CanonicalTrack>,
    mapping: &BTreeMap<String, String>,
    gap: f64,
) -> Vec<CanonicalTrack> {
    let known: HashSet<String> = tracks.iter().map(|t| t.object_name.clone()).collect();
    let mapping: BTreeMap<String, String> = mapping
        .iter()
        .filter(|(key, _)| known.contains(*key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let mut groups: BTreeMap<String, Vec<CanonicalTrack>> = BTreeMap::new();
    for track in tracks {
        let canonical = resolve_canonical_name(&track.object_name, &mapping, &known);
        groups.entry(canonical).or_default().push(track);
    }

    let mut merged = Vec::with_capacity(groups.len());
    for (canonical, members) in groups {
        let mut all_intervals: Vec<Interval> = Vec::new();
        let mut aliases: BTreeSet<String> = BTreeSet::new();
        let mut scene_descriptions: Vec<String> = Vec::new();

        for member in &members {
            aliases.extend(member.aliases.iter().cloned());
            all_intervals.extend_from_slice(&member.intervals);
            for desc in &member.scene_descriptions {
                if scene_descriptions.len() >= MAX_MERGED_SCENE_DESCRIPTIONS {
                    break;
                }
                if !desc.is_empty() && !scene_descriptions.iter().any(|s| s == desc) {
                    scene_descriptions.push(desc.clone());
                }
            }
        }

        let intervals: Vec<Interval> = merge_intervals(&all_intervals, gap)
            .iter()
            .map(Interval::rounded)
            .collect();

        merged.push(CanonicalTrack {
            object_name: canonical,
            aliases: aliases.into_iter().collect(),
            intervals,
            scene_descriptions,
        });
    }

    sort_tracks(&mut merged);
    debug!("Merge mapping produced {} tracks", merged.len());
    merged
}
