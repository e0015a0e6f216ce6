use super::{validate_items, Item};
use crate::error::{CombOptError, Result};

/// `base + value`, or `ValueOverflow` when the sum leaves `u64`
fn add_value(base: u64, value: u64, capacity: usize) -> Result<u64> {
    base.checked_add(value).ok_or(CombOptError::ValueOverflow { capacity })
}

/// Best total value packable within each capacity, unlimited reuse
///
/// Entries need not be exactly filled: `table[c]` is the best value of any
/// packing whose weight is at most `c`, and 0 when nothing fits. A best
/// value past `u64::MAX` fails with `ValueOverflow`.
#[tracing::instrument(skip(items), fields(items = items.len()))]
pub fn best_value_multi_use(capacity: usize, items: &[Item]) -> Result<Vec<u64>> {
    validate_items(items)?;

    let mut table = vec![0u64; capacity + 1];
    for current in 0..=capacity {
        for item in items {
            if item.weight <= current {
                let candidate = add_value(table[current - item.weight], item.value, current)?;
                if candidate > table[current] {
                    table[current] = candidate;
                }
            }
        }
    }

    tracing::debug!(best = table[capacity], "multi-use value complete");
    Ok(table)
}

/// Best total value packable within each capacity, each item at most once
#[tracing::instrument(skip(items), fields(items = items.len()))]
pub fn best_value_single_use(capacity: usize, items: &[Item]) -> Result<Vec<u64>> {
    validate_items(items)?;

    let mut table = vec![0u64; capacity + 1];
    for item in items {
        for current in (item.weight..=capacity).rev() {
            let candidate = add_value(table[current - item.weight], item.value, current)?;
            if candidate > table[current] {
                table[current] = candidate;
            }
        }
    }

    tracing::debug!(best = table[capacity], "single-use value complete");
    Ok(table)
}
