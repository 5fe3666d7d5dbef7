//! # Change Module
//!
//! Picks which bills leave the drawer when change is requested.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Change Computation                               │
//! │                                                                         │
//! │  available: Cash ──┐                                                   │
//! │                    ├──► ChangeStrategy::compute_change ──┬──► Some(Solution)
//! │  amount: i64 ──────┘                                     │     change + remaining
//! │                                                          │
//! │                                                          └──► None (not possible)
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "Not possible" is an ordinary outcome, so it is `Ok(None)`, never an
//! error. Errors are reserved for invalid input (negative or oversized amount).

mod dp;

pub use dp::DpChangeStrategy;

use serde::{Deserialize, Serialize};

use crate::cash::Cash;
use crate::denomination::Denomination;
use crate::error::CoreResult;

// =============================================================================
// Solution
// =============================================================================

/// A candidate split of available cash into change and what stays behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Bills handed out.
    pub change: Cash,

    /// Bills left in the drawer.
    pub remaining_cash: Cash,
}

impl Solution {
    /// Creates a solution from its two halves.
    pub fn new(change: Cash, remaining_cash: Cash) -> Self {
        Solution {
            change,
            remaining_cash,
        }
    }

    /// Nothing handed out, everything left behind.
    pub fn trivial(remaining_cash: Cash) -> Self {
        Solution::new(Cash::EMPTY, remaining_cash)
    }

    /// Rank of this solution: fewer bills in the change is better.
    #[inline]
    pub fn priority(&self) -> u64 {
        self.change.bill_count()
    }

    /// Moves one more bill of `denomination` from the remaining cash into the
    /// change, or `None` if this path has no such bill left.
    pub(crate) fn with_one_more(&self, denomination: Denomination) -> Option<Solution> {
        let remaining_cash = self.remaining_cash.subtract_bills(denomination, 1).ok()?;
        let change = self.change.add_bills(denomination, 1).ok()?;
        Some(Solution::new(change, remaining_cash))
    }
}

// =============================================================================
// Strategy Seam
// =============================================================================

/// Algorithm that picks change out of the available cash.
pub trait ChangeStrategy: Send + Sync {
    /// Computes the change for `amount` using the fewest bills.
    ///
    /// ## Returns
    /// - `Ok(Some(solution))` with `solution.change` summing to `amount`
    /// - `Ok(None)` if no combination of the available bills sums to `amount`
    ///
    /// ## Errors
    /// [`CoreError::InvalidArgument`](crate::CoreError::InvalidArgument) if
    /// `amount` is negative or beyond what the strategy can search.
    fn compute_change(&self, available: &Cash, amount: i64) -> CoreResult<Option<Solution>>;
}
