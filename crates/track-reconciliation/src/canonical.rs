//! Canonicalization
//!
//! Applies dedup oracle keep/merge decisions to collapse name clusters into
//! canonical tracks, unioning intervals and aggregating aliases.

use crate::cluster::NameCluster;
use crate::intervals::merge_intervals;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;
use video_reconcile_core::{CanonicalTrack, DedupDecision, Interval};

/// Scene descriptions carried per canonical track.
const MAX_TRACK_SCENE_DESCRIPTIONS: usize = 8;

/// Order tracks by first interval start, then case-insensitive name.
/// Tracks with no intervals sort last.
pub(crate) fn sort_tracks(tracks: &mut [CanonicalTrack]) {
    tracks.sort_by(|a, b| {
        let start_a = a
            .intervals
            .first()
            .map(|iv| iv.start_time)
            .unwrap_or(f64::INFINITY);
        let start_b = b
            .intervals
            .first()
            .map(|iv| iv.start_time)
            .unwrap_or(f64::INFINITY);
        start_a
            .total_cmp(&start_b)
            .then_with(|| a.object_name.to_lowercase().cmp(&b.object_name.to_lowercase()))
    });
}

/// Collapse surviving clusters into canonical tracks per oracle decisions.
///
/// Only `keep = true` decisions contribute. A decision naming an unknown
/// cluster is dropped entirely; a kept decision whose canonical target is
/// unknown or absent falls back to its own name. The oracle therefore can
/// never introduce a name that was not among the input clusters.
pub fn resolve_dedup(
    clusters: &BTreeMap<String, NameCluster>,
    decisions: &[DedupDecision],
    gap: f64,
) -> Vec<CanonicalTrack> {
    let mut members_by_canonical: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut dropped = 0usize;

    for decision in decisions {
        if !decision.keep {
            continue;
        }
        let name = decision.name.trim();
        if name.is_empty() || !clusters.contains_key(name) {
            dropped += 1;
            continue;
        }
        let canonical = decision
            .canonical_name
            .as_deref()
            .map(str::trim)
            .filter(|c| clusters.contains_key(*c))
            .unwrap_or(name);
        members_by_canonical
            .entry(canonical.to_string())
            .or_default()
            .push(name.to_string());
    }

    if dropped > 0 {
        debug!("Dropped {} dedup decisions naming unknown clusters", dropped);
    }

    let mut tracks = Vec::with_capacity(members_by_canonical.len());
    for (canonical, members) in members_by_canonical {
        let mut all_intervals: Vec<Interval> = Vec::new();
        let mut aliases: BTreeSet<String> = BTreeSet::new();
        let mut scene_descriptions: Vec<String> = Vec::new();

        for member in &members {
            if let Some(cluster) = clusters.get(member) {
                aliases.insert(member.clone());
                all_intervals.extend_from_slice(&cluster.intervals);
                for desc in &cluster.scene_descriptions {
                    if scene_descriptions.len() >= MAX_TRACK_SCENE_DESCRIPTIONS {
                        break;
                    }
                    if !desc.is_empty() && !scene_descriptions.iter().any(|s| s == desc) {
                        scene_descriptions.push(desc.clone());
                    }
                }
            }
        }

        let intervals: Vec<Interval> = merge_intervals(&all_intervals, gap)
            .iter()
            .map(Interval::rounded)
            .collect();

        tracks.push(CanonicalTrack {
            object_name: canonical,
            aliases: aliases.into_iter().collect(),
            intervals,
            scene_descriptions,
        });
    }

    sort_tracks(&mut tracks);
    tracks
}
