//! Heuristic cluster filtering
//!
//! Drops clusters too sparse or too brief to be trustworthy. This is a
//! precision/recall lever, not a correctness check; dropped clusters leave
//! no trace.

use crate::cluster::NameCluster;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Thresholds for dropping untrustworthy clusters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum raw mentions for a cluster to be trusted (default: 2)
    pub min_mentions: usize,
    /// Minimum total visible seconds (default: 0.8)
    pub min_total_visible_seconds: f64,
    /// Visibility that keeps a cluster regardless of mention count (default: 2.0)
    pub keep_if_visible_seconds_at_least: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_mentions: 2,
            min_total_visible_seconds: 0.8,
            keep_if_visible_seconds_at_least: 2.0,
        }
    }
}

/// Keep a cluster iff it is visible long enough overall AND is either
/// mentioned often enough or visible well past the mention requirement.
pub fn filter_clusters(
    clusters: BTreeMap<String, NameCluster>,
    config: &FilterConfig,
) -> BTreeMap<String, NameCluster> {
    let before = clusters.len();
    let out: BTreeMap<String, NameCluster> = clusters
        .into_iter()
        .filter(|(_, cluster)| {
            cluster.total_visible_seconds >= config.min_total_visible_seconds
                && (cluster.mention_count >= config.min_mentions
                    || cluster.total_visible_seconds >= config.keep_if_visible_seconds_at_least)
        })
        .collect();

    debug!("Filter kept {}/{} clusters", out.len(), before);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use video_reconcile_core::Interval;

    fn cluster(mention_count: usize, visible: f64) -> NameCluster {
        NameCluster {
            intervals: vec![Interval::new(0.0, visible)],
            mention_count,
            total_visible_seconds: visible,
            scene_descriptions: vec![],
        }
    }

    fn run(name: &str, c: NameCluster) -> bool {
        let mut clusters = BTreeMap::new();
        clusters.insert(name.to_string(), c);
        filter_clusters(clusters, &FilterConfig::default()).contains_key(name)
    }

    #[test]
    fn test_keeps_frequently_mentioned_cluster() {
        assert!(run("soda can", cluster(3, 1.0)));
    }

    #[test]
    fn test_keeps_long_visible_single_mention() {
        // below min_mentions but visible past keep_if threshold
        assert!(run("lamp", cluster(1, 2.5)));
    }

    #[test]
    fn test_drops_brief_cluster() {
        // under min_total_visible_seconds regardless of mentions
        assert!(!run("glitch", cluster(5, 0.5)));
    }

    #[test]
    fn test_drops_sparse_short_cluster() {
        // one mention, visible over the floor but under the keep threshold
        assert!(!run("maybe", cluster(1, 1.0)));
    }

    #[test]
    fn test_threshold_boundaries_inclusive() {
        assert!(run("edge", cluster(2, 0.8)));
        assert!(run("edge2", cluster(1, 2.0)));
    }

    #[test]
    fn test_soda_can_scenario_survives_default_filter() {
        assert!(run("soda can", cluster(3, 3.0)));
    }
}
