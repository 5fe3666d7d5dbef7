//! # Cash Module
//!
//! Provides the immutable `Cash` value: how many bills of each
//! [`Denomination`] a drawer, a deposit or a handful of change holds.
//!
//! ## Why Bills, Not Amounts?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE EXACT CHANGE PROBLEM                                               │
//! │                                                                         │
//! │  A register holding $18 can still fail to hand out $9:                  │
//! │    4 x $2 + 1 x $10 = $18, but no combination sums to an odd amount.    │
//! │                                                                         │
//! │  OUR SOLUTION: track bill counts per denomination                       │
//! │    Every operation is exact on counts; totals are derived, never        │
//! │    stored independently of the counts they come from.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hello_change_core::{Cash, Denomination};
//!
//! let drawer = Cash::from_counts([(Denomination::Five, 2), (Denomination::One, 3)]).unwrap();
//! assert_eq!(drawer.money_amount(), 13);
//! assert_eq!(drawer.bill_count(), 5);
//!
//! let after = drawer.subtract_bills(Denomination::Five, 1).unwrap();
//! assert_eq!(after.to_string(), "$8 0 0 1 0 3");
//!
//! // Not enough $5 bills: the original value is untouched
//! assert!(after.subtract_bills(Denomination::Five, 2).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::denomination::Denomination;
use crate::error::{CoreError, CoreResult};

// =============================================================================
// Cash Type
// =============================================================================

/// Bill counts per denomination, plus derived totals.
///
/// ## Design Decisions
/// - **Fixed array keyed by denomination index**: a zero slot is an absent
///   denomination, so there is no way to store a non-positive entry
/// - **Cached totals**: computed once at construction with checked
///   arithmetic, so every `Cash` has totals that fit in `u64`
/// - **Copy**: the value is small and never mutated after construction;
///   every operation returns a new `Cash`
///
/// Equality and hashing look at the counts only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Denomination, i64>",
    into = "BTreeMap<Denomination, u64>"
)]
pub struct Cash {
    counts: [u64; Denomination::COUNT],
    money_amount: u64,
    bill_count: u64,
}

impl Cash {
    /// The canonical empty value: no bills, $0.
    pub const EMPTY: Cash = Cash {
        counts: [0; Denomination::COUNT],
        money_amount: 0,
        bill_count: 0,
    };

    /// `None` when the money amount or bill count overflows `u64`.
    fn from_array(counts: [u64; Denomination::COUNT]) -> Option<Self> {
        let mut money_amount: u64 = 0;
        let mut bill_count: u64 = 0;
        for (denomination, &n) in Denomination::ASCENDING.iter().zip(counts.iter()) {
            let value = u64::from(denomination.face_value()).checked_mul(n)?;
            money_amount = money_amount.checked_add(value)?;
            bill_count = bill_count.checked_add(n)?;
        }

        Some(Cash {
            counts,
            money_amount,
            bill_count,
        })
    }

    fn from_input(counts: [u64; Denomination::COUNT]) -> CoreResult<Self> {
        Self::from_array(counts).ok_or_else(|| {
            CoreError::invalid_argument("bill counts exceed the representable money amount")
        })
    }

    /// Commits counts produced by arithmetic on existing values.
    fn from_sum(counts: [u64; Denomination::COUNT]) -> CoreResult<Self> {
        Self::from_array(counts).ok_or(CoreError::CapacityExceeded)
    }

    /// Builds cash from `(denomination, count)` pairs.
    ///
    /// Zero counts are dropped and a denomination listed twice has its counts
    /// summed. All-zero or empty input yields [`Cash::EMPTY`].
    ///
    /// ## Errors
    /// [`CoreError::InvalidArgument`] if any count is negative, or if the
    /// total money amount or bill count does not fit in `u64`.
    pub fn from_counts<I>(counts: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (Denomination, i64)>,
    {
        let mut normalized = [0u64; Denomination::COUNT];
        for (denomination, count) in counts {
            let count = u64::try_from(count).map_err(|_| {
                CoreError::invalid_argument(format!(
                    "negative amount of bills [{count}] for denomination {denomination}"
                ))
            })?;
            let slot = &mut normalized[denomination.index()];
            *slot = slot.checked_add(count).ok_or_else(|| {
                CoreError::invalid_argument(format!(
                    "too many {denomination} bills: count overflows"
                ))
            })?;
        }
        Self::from_input(normalized)
    }

    /// Builds cash from counts listed in display order ($20, $10, $5, $2, $1).
    ///
    /// ## Example
    /// ```rust
    /// use hello_change_core::Cash;
    ///
    /// let cash = Cash::from_descending_counts([1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(cash.money_amount(), 68);
    /// assert_eq!(cash.to_string(), "$68 1 2 3 4 5");
    /// ```
    pub fn from_descending_counts(counts: [i64; Denomination::COUNT]) -> CoreResult<Self> {
        Self::from_counts(Denomination::DESCENDING.into_iter().zip(counts))
    }

    /// Builds cash made of `count` bills of a single denomination.
    ///
    /// ## Errors
    /// [`CoreError::InvalidArgument`] if `count` is zero or its money amount
    /// does not fit in `u64`.
    pub fn from_single_denomination(denomination: Denomination, count: u64) -> CoreResult<Self> {
        if count == 0 {
            return Err(CoreError::invalid_argument(format!(
                "amount of {denomination} bills must be positive"
            )));
        }
        let mut counts = [0u64; Denomination::COUNT];
        counts[denomination.index()] = count;
        Self::from_input(counts)
    }

    /// Total money held, in whole dollars.
    #[inline]
    pub const fn money_amount(&self) -> u64 {
        self.money_amount
    }

    /// Total number of bills held.
    #[inline]
    pub const fn bill_count(&self) -> u64 {
        self.bill_count
    }

    /// Number of bills held for one denomination (0 when absent).
    #[inline]
    pub const fn count(&self, denomination: Denomination) -> u64 {
        self.counts[denomination.index()]
    }

    /// Checks if no bills are held.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bill_count == 0
    }

    /// Present denominations with their counts, smallest face value first.
    pub fn contents(&self) -> impl Iterator<Item = (Denomination, u64)> + '_ {
        Denomination::ASCENDING
            .into_iter()
            .map(|d| (d, self.count(d)))
            .filter(|(_, n)| *n > 0)
    }

    /// Per-denomination sum of both values.
    ///
    /// ## Errors
    /// [`CoreError::CapacityExceeded`] if a count or a total would overflow
    /// `u64`. Below that limit it never fails.
    pub fn add(&self, other: &Cash) -> CoreResult<Cash> {
        let mut counts = self.counts;
        for (slot, n) in counts.iter_mut().zip(other.counts) {
            *slot = slot.checked_add(n).ok_or(CoreError::CapacityExceeded)?;
        }
        Self::from_sum(counts)
    }

    /// Removes `other`'s bills from this value.
    ///
    /// All-or-nothing: nothing is produced unless every denomination has
    /// enough bills.
    ///
    /// ## Errors
    /// [`CoreError::InsufficientFunds`] for the first denomination (ascending)
    /// where `other` holds more bills than `self`.
    pub fn subtract(&self, other: &Cash) -> CoreResult<Cash> {
        let mut counts = self.counts;
        for denomination in Denomination::ASCENDING {
            let i = denomination.index();
            counts[i] = counts[i].checked_sub(other.counts[i]).ok_or(
                CoreError::InsufficientFunds {
                    denomination,
                    requested: other.counts[i],
                    available: self.counts[i],
                },
            )?;
        }
        // fewer bills than self, so the totals still fit
        Self::from_sum(counts)
    }

    /// Adds `count` bills of one denomination.
    ///
    /// ## Errors
    /// [`CoreError::CapacityExceeded`] if the count or a total would
    /// overflow `u64`.
    pub fn add_bills(&self, denomination: Denomination, count: u64) -> CoreResult<Cash> {
        let mut counts = self.counts;
        let slot = &mut counts[denomination.index()];
        *slot = slot.checked_add(count).ok_or(CoreError::CapacityExceeded)?;
        Self::from_sum(counts)
    }

    /// Removes `count` bills of one denomination.
    ///
    /// ## Errors
    /// [`CoreError::InsufficientFunds`] if fewer than `count` bills are held.
    pub fn subtract_bills(&self, denomination: Denomination, count: u64) -> CoreResult<Cash> {
        let available = self.count(denomination);
        let remaining = available
            .checked_sub(count)
            .ok_or(CoreError::InsufficientFunds {
                denomination,
                requested: count,
                available,
            })?;

        let mut counts = self.counts;
        counts[denomination.index()] = remaining;
        Self::from_sum(counts)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl PartialEq for Cash {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl Eq for Cash {}

impl Hash for Cash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.counts.hash(state);
    }
}

/// Default cash is empty.
impl Default for Cash {
    fn default() -> Self {
        Cash::EMPTY
    }
}

/// Renders `$<amount>` followed by bill counts from $20 down to $1.
///
/// ## Example
/// ```text
/// $68 1 2 3 4 5   ◄── 1 x $20, 2 x $10, 3 x $5, 4 x $2, 5 x $1
/// $0 0 0 0 0 0    ◄── Cash::EMPTY
/// ```
impl fmt::Display for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.money_amount)?;
        for denomination in Denomination::DESCENDING {
            write!(f, " {}", self.count(denomination))?;
        }
        Ok(())
    }
}

impl TryFrom<BTreeMap<Denomination, i64>> for Cash {
    type Error = CoreError;

    fn try_from(counts: BTreeMap<Denomination, i64>) -> CoreResult<Self> {
        Cash::from_counts(counts)
    }
}

impl From<Cash> for BTreeMap<Denomination, u64> {
    fn from(cash: Cash) -> Self {
        cash.contents().collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
