//! Knapsack dynamic programs over a 1-D capacity table
//!
//! Six routines, split along two axes:
//! - reuse: multi-use items may be packed any number of times, single-use
//!   items at most once
//! - objective: exact-fill feasibility, best value within a capacity, or
//!   every combination filling a capacity exactly
//!
//! Multi-use routines sweep capacity ascending with items inside, so an item
//! can feed its own later entries. Single-use routines sweep items outside
//! and capacity descending, so each item lands at most once per entry.
//! Every table has `capacity + 1` entries and entry 0 is the empty packing.

pub mod enumeration;
pub mod feasibility;
pub mod value;

use crate::bail_invalid;
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub use enumeration::{combinations_multi_use, combinations_single_use, CombinationTable};
pub use feasibility::{fill_multi_use, fill_single_use, fits_exactly_single_use};
pub use value::{best_value_multi_use, best_value_single_use};

/// Sorted item indices; multi-use combinations may repeat an index
pub type Combination = Vec<usize>;

/// An item with a packing weight and a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub weight: usize,
    pub value: u64,
}

impl Item {
    pub fn new(weight: usize, value: u64) -> Self {
        Self { weight, value }
    }
}

impl From<(usize, u64)> for Item {
    fn from((weight, value): (usize, u64)) -> Self {
        Self::new(weight, value)
    }
}

/// Reject zero weights, which would let an item refill its own entry forever
fn validate_weights(weights: impl IntoIterator<Item = usize>) -> Result<()> {
    for (index, weight) in weights.into_iter().enumerate() {
        if weight == 0 {
            bail_invalid!("item weight", format!("0 at index {}", index));
        }
    }
    Ok(())
}

fn validate_items(items: &[Item]) -> Result<()> {
    validate_weights(items.iter().map(|item| item.weight))
}
