use crate::core::{GraphRange, Sample};

/// Returns samples whose date falls inside the inclusive x window of `range`.
///
/// Ordering is preserved and nothing is deduplicated; for ascending input the
/// result is the maximal contiguous run inside the window.
#[must_use]
pub fn points_in_range(samples: &[Sample], range: GraphRange) -> Vec<Sample> {
    samples
        .iter()
        .copied()
        .filter(|sample| range.x.contains(sample.date))
        .collect()
}
