use super::validate_weights;
use crate::error::Result;

/// Exact-fill feasibility with unlimited reuse
///
/// `table[c]` is true when some multiset of weights sums to exactly `c`.
#[tracing::instrument(skip(weights), fields(items = weights.len()))]
pub fn fill_multi_use(capacity: usize, weights: &[usize]) -> Result<Vec<bool>> {
    validate_weights(weights.iter().copied())?;

    let mut table = vec![false; capacity + 1];
    table[0] = true;

    for current in 1..=capacity {
        table[current] = weights
            .iter()
            .any(|&weight| weight <= current && table[current - weight]);
    }

    tracing::debug!(
        feasible = table.iter().filter(|&&fits| fits).count(),
        "multi-use feasibility complete"
    );
    Ok(table)
}

/// Exact-fill feasibility with each item used at most once
///
/// `table[c]` is true when some subset of weights sums to exactly `c`.
#[tracing::instrument(skip(weights), fields(items = weights.len()))]
pub fn fill_single_use(capacity: usize, weights: &[usize]) -> Result<Vec<bool>> {
    validate_weights(weights.iter().copied())?;

    let mut table = vec![false; capacity + 1];
    table[0] = true;

    for &weight in weights {
        for current in (weight..=capacity).rev() {
            if table[current - weight] {
                table[current] = true;
            }
        }
    }

    tracing::debug!(
        feasible = table.iter().filter(|&&fits| fits).count(),
        "single-use feasibility complete"
    );
    Ok(table)
}

/// Whether a subset of `weights` fills exactly `capacity`
pub fn fits_exactly_single_use(capacity: usize, weights: &[usize]) -> Result<bool> {
    Ok(fill_single_use(capacity, weights)?[capacity])
}
