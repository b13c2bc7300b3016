//! Interval algebra over sets of visibility intervals
//!
//! Interval sets flowing through the pipeline are kept in canonical form:
//! sorted ascending by `(start, end)`, pairwise disjoint, and with no two
//! adjacent intervals within the gap tolerance they were merged under.

use video_reconcile_core::Interval;

/// Default gap tolerance when unioning intervals, in seconds.
pub const DEFAULT_MERGE_GAP_SECONDS: f64 = 0.30;

fn by_start_end(a: &Interval, b: &Interval) -> std::cmp::Ordering {
    a.start_time
        .total_cmp(&b.start_time)
        .then(a.end_time.total_cmp(&b.end_time))
}

/// Merge a set of intervals, treating intervals within `gap` seconds of each
/// other as continuous. Idempotent for any fixed `gap >= 0`.
pub fn merge_intervals(intervals: &[Interval], gap: f64) -> Vec<Interval> {
    if intervals.is_empty() {
        return Vec::new();
    }

    let mut xs = intervals.to_vec();
    xs.sort_by(by_start_end);

    let mut out = Vec::with_capacity(xs.len());
    let mut current = xs[0];
    for iv in &xs[1..] {
        if iv.start_time <= current.end_time + gap {
            current.end_time = current.end_time.max(iv.end_time);
        } else {
            out.push(current);
            current = *iv;
        }
    }
    out.push(current);
    out
}

/// Total covered seconds. Reversed intervals contribute zero.
pub fn total_length(intervals: &[Interval]) -> f64 {
    intervals.iter().map(Interval::length).sum()
}

/// Intersection length of two interval sets.
///
/// Two-pointer sweep advancing whichever interval ends first, O(|a| + |b|)
/// after sorting.
pub fn intersection_length(a: &[Interval], b: &[Interval]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let mut xs = a.to_vec();
    let mut ys = b.to_vec();
    xs.sort_by(by_start_end);
    ys.sort_by(by_start_end);

    let mut i = 0;
    let mut j = 0;
    let mut inter = 0.0;
    while i < xs.len() && j < ys.len() {
        let start = xs[i].start_time.max(ys[j].start_time);
        let end = xs[i].end_time.min(ys[j].end_time);
        if end > start {
            inter += end - start;
        }
        if xs[i].end_time < ys[j].end_time {
            i += 1;
        } else {
            j += 1;
        }
    }
    inter
}

/// Intersection length over the smaller set's total length.
///
/// Zero when either set is empty or degenerate (denominator under `1e-9`).
/// Symmetric in its arguments, always in `[0, 1]`.
pub fn overlap_ratio(a: &[Interval], b: &[Interval]) -> f64 {
    let denom = total_length(a).min(total_length(b));
    if denom <= 1e-9 {
        return 0.0;
    }
    intersection_length(a, b) / denom
}
