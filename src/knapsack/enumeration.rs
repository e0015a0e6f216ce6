use super::{validate_weights, Combination};
use crate::config::KnapsackConfig;
use crate::error::{CombOptError, Result};
use std::collections::BTreeSet;

/// Every distinct combination filling each capacity exactly
pub type CombinationTable = Vec<BTreeSet<Combination>>;

/// Copy of `combination` with `index` inserted in sorted position
fn extend_sorted(combination: &[usize], index: usize) -> Combination {
    let mut extended = Vec::with_capacity(combination.len() + 1);
    let split = combination.partition_point(|&existing| existing <= index);
    extended.extend_from_slice(&combination[..split]);
    extended.push(index);
    extended.extend_from_slice(&combination[split..]);
    extended
}

fn check_limit(capacity: usize, count: usize, opts: &KnapsackConfig) -> Result<()> {
    match opts.max_combinations {
        Some(limit) if count > limit => {
            tracing::warn!(capacity, limit, "combination limit exceeded");
            Err(CombOptError::EnumerationLimit { capacity, limit })
        }
        _ => Ok(()),
    }
}

fn fresh_table(capacity: usize) -> CombinationTable {
    let mut table = vec![BTreeSet::new(); capacity + 1];
    table[0].insert(Combination::new());
    table
}

/// All combinations filling each capacity exactly, unlimited reuse
///
/// An index may appear several times in one combination (`[0, 0, 2]`).
/// Entry 0 holds only the empty combination; unreachable entries are empty.
#[tracing::instrument(skip(weights, opts), fields(items = weights.len()))]
pub fn combinations_multi_use(
    capacity: usize,
    weights: &[usize],
    opts: &KnapsackConfig,
) -> Result<CombinationTable> {
    validate_weights(weights.iter().copied())?;

    let mut table = fresh_table(capacity);
    for current in 1..=capacity {
        let mut entry = BTreeSet::new();
        for (index, &weight) in weights.iter().enumerate() {
            if weight > current {
                continue;
            }
            for combination in &table[current - weight] {
                entry.insert(extend_sorted(combination, index));
            }
        }
        check_limit(current, entry.len(), opts)?;
        table[current] = entry;
    }

    tracing::debug!(
        combinations = table[capacity].len(),
        "multi-use enumeration complete"
    );
    Ok(table)
}

/// All combinations filling each capacity exactly, each item at most once
#[tracing::instrument(skip(weights, opts), fields(items = weights.len()))]
pub fn combinations_single_use(
    capacity: usize,
    weights: &[usize],
    opts: &KnapsackConfig,
) -> Result<CombinationTable> {
    validate_weights(weights.iter().copied())?;

    let mut table = fresh_table(capacity);
    for (index, &weight) in weights.iter().enumerate() {
        // Descending: table[current - weight] does not yet hold this item
        for current in (weight..=capacity).rev() {
            let additions: Vec<Combination> = table[current - weight]
                .iter()
                .map(|combination| extend_sorted(combination, index))
                .collect();
            if additions.is_empty() {
                continue;
            }
            table[current].extend(additions);
            check_limit(current, table[current].len(), opts)?;
        }
    }

    tracing::debug!(
        combinations = table[capacity].len(),
        "single-use enumeration complete"
    );
    Ok(table)
}
