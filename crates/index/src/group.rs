//! Calendar grouping of accumulated values.

use std::collections::BTreeMap;

/// Group defined accumulated values by their calendar period label.
///
/// A single O(n) pass collects the indices of finite accumulated values
/// into one bucket per label. The returned `BTreeMap` gives deterministic
/// iteration order sorted by period, and within each bucket the indices
/// stay in original time order.
pub(crate) fn group_by_period(accumulated: &[f64], period: &[u8]) -> BTreeMap<u8, Vec<usize>> {
    let mut groups: BTreeMap<u8, Vec<usize>> = BTreeMap::new();
    for (i, &v) in accumulated.iter().enumerate() {
        if v.is_finite() {
            groups.entry(period[i]).or_default().push(i);
        }
    }
    groups
}
