//! Temporal clustering
//!
//! Groups mentions by exact object name and unions each group into
//! gap-tolerant clusters with a disjoint-set structure driven by a single
//! running chain.

use crate::intervals::{merge_intervals, total_length};
use crate::mentions::Mention;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use video_reconcile_core::Interval;

/// Scene descriptions carried per cluster.
const MAX_CLUSTER_SCENE_DESCRIPTIONS: usize = 6;

/// Mentions of one literal name collapsed into disjoint intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct NameCluster {
    /// Disjoint intervals, sorted ascending
    pub intervals: Vec<Interval>,
    /// Raw mention count, before clustering
    pub mention_count: usize,
    /// Sum of interval lengths
    pub total_visible_seconds: f64,
    /// Deduplicated scene descriptions, first-seen order
    pub scene_descriptions: Vec<String>,
}

/// Disjoint-set over per-name mention indices.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // path compression
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        if self.rank[ra] < self.rank[rb] {
            self.parent[ra] = rb;
        } else if self.rank[ra] > self.rank[rb] {
            self.parent[rb] = ra;
        } else {
            self.parent[rb] = ra;
            self.rank[ra] += 1;
        }
    }
}

/// Cluster mentions by exact name into gap-tolerant interval sets.
///
/// Within a name group, mentions sorted by `(start, end)` are unioned along
/// a single left-to-right chain: a mention whose start lies within `gap` of
/// the running chain end joins the chain and may extend it; otherwise it
/// starts a new chain. The merge is transitive, so two mentions that never
/// directly overlap can share a cluster through an intermediate mention.
/// Downstream filter thresholds are tuned against this exact policy.
pub fn cluster_by_name(mentions: &[Mention], gap: f64) -> BTreeMap<String, NameCluster> {
    let mut by_name: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (i, mention) in mentions.iter().enumerate() {
        by_name
            .entry(mention.object_name.clone())
            .or_default()
            .push(i);
    }

    let mut out = BTreeMap::new();
    for (name, idxs) in by_name {
        let mut sorted = idxs.clone();
        sorted.sort_by(|&a, &b| {
            mentions[a]
                .start_time
                .total_cmp(&mentions[b].start_time)
                .then(mentions[a].end_time.total_cmp(&mentions[b].end_time))
        });

        let mut uf = UnionFind::new(sorted.len());
        let mut chain_head = 0;
        let mut chain_end = mentions[sorted[0]].end_time;
        for (k, &idx) in sorted.iter().enumerate().skip(1) {
            let mention = &mentions[idx];
            if mention.start_time <= chain_end + gap {
                uf.union(chain_head, k);
                chain_end = chain_end.max(mention.end_time);
            } else {
                chain_head = k;
                chain_end = mention.end_time;
            }
        }

        // collapse each component to (min start, max end)
        let mut components: HashMap<usize, Interval> = HashMap::new();
        for (k, &idx) in sorted.iter().enumerate() {
            let root = uf.find(k);
            let mention = &mentions[idx];
            components
                .entry(root)
                .and_modify(|iv| {
                    iv.start_time = iv.start_time.min(mention.start_time);
                    iv.end_time = iv.end_time.max(mention.end_time);
                })
                .or_insert_with(|| Interval::new(mention.start_time, mention.end_time));
        }

        let spans: Vec<Interval> = components.into_values().collect();
        let intervals = merge_intervals(&spans, 0.0);

        let mut scene_descriptions: Vec<String> = Vec::new();
        for &idx in &idxs {
            if scene_descriptions.len() >= MAX_CLUSTER_SCENE_DESCRIPTIONS {
                break;
            }
            let desc = &mentions[idx].scene_description;
            if !desc.is_empty() && !scene_descriptions.iter().any(|s| s == desc) {
                scene_descriptions.push(desc.clone());
            }
        }

        let total_visible_seconds = total_length(&intervals);
        out.insert(
            name,
            NameCluster {
                intervals,
                mention_count: idxs.len(),
                total_visible_seconds,
                scene_descriptions,
            },
        );
    }

    debug!(
        "Clustered {} mentions into {} name groups",
        mentions.len(),
        out.len()
    );
    out
}
