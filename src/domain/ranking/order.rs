//! Result ordering.
//!
//! Coverage within `tie_band` points counts as tied, so the primary
//! comparison is not transitive and cannot be handed to `sort_by` directly.
//! Results are first put in a strict total order, then an insertion pass
//! applies the banded rule until every adjacent pair respects it.

use std::cmp::Ordering;

use crate::domain::coverage::Evaluation;

/// Coverage desc, efficiency desc, monthly cost asc, provider ids asc.
pub(super) fn total_order(a: &Evaluation, b: &Evaluation) -> Ordering {
    b.coverage_percent
        .cmp(&a.coverage_percent)
        .then_with(|| tie_break(a, b))
}

/// Coverage desc unless within `band` points, then efficiency desc, then
/// monthly cost asc, then provider ids asc.
pub(super) fn banded_order(a: &Evaluation, b: &Evaluation, band: u8) -> Ordering {
    if a.coverage_percent.abs_diff(b.coverage_percent) > band {
        b.coverage_percent.cmp(&a.coverage_percent)
    } else {
        tie_break(a, b)
    }
}

/// Coverage desc, monthly cost asc, provider ids asc.
pub(super) fn individual_order(a: &Evaluation, b: &Evaluation) -> Ordering {
    b.coverage_percent
        .cmp(&a.coverage_percent)
        .then_with(|| a.monthly_cost.cmp(&b.monthly_cost))
        .then_with(|| a.provider_ids().cmp(b.provider_ids()))
}

fn tie_break(a: &Evaluation, b: &Evaluation) -> Ordering {
    b.efficiency
        .cmp(&a.efficiency)
        .then_with(|| a.monthly_cost.cmp(&b.monthly_cost))
        .then_with(|| a.provider_ids().cmp(b.provider_ids()))
}

/// Sort so that no adjacent pair is out of [`banded_order`].
///
/// Elements only move past neighbours within the tie band, so after the
/// total pre-sort the pass is linear in the size of each band.
pub(super) fn sort_banded(items: &mut [Evaluation], band: u8) {
    items.sort_by(total_order);
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && banded_order(&items[j - 1], &items[j], band) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
