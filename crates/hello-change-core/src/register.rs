//! # Cash Register
//!
//! The one mutable thing in the crate: the drawer contents.
//!
//! ## Thread Safety
//! The contents live in an [`ArcSwap<Cash>`] and change only through
//! compare-and-swap of whole snapshots:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register Transition (add / remove / change)          │
//! │                                                                         │
//! │   ┌──────────────┐     ┌───────────────────┐     ┌──────────────────┐  │
//! │   │ load snapshot│────►│ compute next Cash │────►│ compare_and_swap │  │
//! │   └──────▲───────┘     │ (pure, no locks)  │     └────────┬─────────┘  │
//! │          │             └─────────┬─────────┘              │            │
//! │          │                       │ Err / None             │            │
//! │          │                       ▼                        │            │
//! │          │              return, state untouched           │            │
//! │          │                                                │            │
//! │          └──────── snapshot replaced meanwhile ◄──────────┤            │
//! │                    (retry from the new one)               │            │
//! │                                                  swapped  ▼            │
//! │                                               return result            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call is applied exactly once against some consistent snapshot.
//! Nothing blocks, so nothing can deadlock; a caller can in theory keep
//! losing the race under heavy contention. Separate calls do not compose
//! into one atomic step.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, trace};

use crate::cash::Cash;
use crate::change::{ChangeStrategy, DpChangeStrategy};
use crate::error::CoreResult;

/// Thread-safe cash register.
///
/// ## Example
/// ```rust
/// use hello_change_core::{Cash, CashRegister};
///
/// let register = CashRegister::new();
/// register.add(&Cash::from_descending_counts([1, 2, 3, 4, 5]).unwrap()).unwrap();
///
/// let change = register.change(11).unwrap().unwrap();
/// assert_eq!(change.to_string(), "$11 0 1 0 0 1");
/// assert_eq!(register.contents().money_amount(), 57);
///
/// // Not possible with what is left: no error, no state change
/// assert!(register.change(1000).unwrap().is_none());
/// ```
pub struct CashRegister<S = DpChangeStrategy> {
    cash: ArcSwap<Cash>,
    strategy: S,
}

impl CashRegister {
    /// Creates an empty register.
    pub fn new() -> Self {
        Self::with_contents(Cash::EMPTY)
    }

    /// Creates a register pre-seeded with `cash`.
    pub fn with_contents(cash: Cash) -> Self {
        Self::with_strategy(cash, DpChangeStrategy)
    }
}

impl<S: ChangeStrategy> CashRegister<S> {
    /// Creates a register pre-seeded with `cash` that computes change with
    /// `strategy`.
    pub fn with_strategy(cash: Cash, strategy: S) -> Self {
        CashRegister {
            cash: ArcSwap::from_pointee(cash),
            strategy,
        }
    }

    /// Current contents. Does not modify the register.
    pub fn contents(&self) -> Cash {
        **self.cash.load()
    }

    /// Deposits `cash` and returns the new contents.
    ///
    /// ## Errors
    /// [`CoreError::CapacityExceeded`](crate::CoreError::CapacityExceeded) if
    /// the deposit would overflow a count or a total; the contents stay as
    /// they were. Any deposit that fits succeeds.
    pub fn add(&self, cash: &Cash) -> CoreResult<Cash> {
        self.transition("add", |current| {
            let next = current.add(cash)?;
            Ok((Some(next), next))
        })
    }

    /// Withdraws `cash` and returns the new contents.
    ///
    /// ## Errors
    /// [`CoreError::InsufficientFunds`](crate::CoreError::InsufficientFunds)
    /// if the register lacks any of the bills; the contents stay as they were.
    pub fn remove(&self, cash: &Cash) -> CoreResult<Cash> {
        self.transition("remove", |current| {
            let next = current.subtract(cash)?;
            Ok((Some(next), next))
        })
    }

    /// Hands out change for `amount` and returns the bills handed out.
    ///
    /// ## Returns
    /// - `Ok(Some(change))` - change taken out of the register
    /// - `Ok(None)` - no combination of held bills matches; nothing changes
    ///
    /// ## Errors
    /// [`CoreError::InvalidArgument`](crate::CoreError::InvalidArgument) if
    /// `amount` is negative or too large for the strategy to search.
    pub fn change(&self, amount: i64) -> CoreResult<Option<Cash>> {
        self.transition("change", |current| {
            let solution = self.strategy.compute_change(current, amount)?;
            Ok(match solution {
                Some(s) => (Some(s.remaining_cash), Some(s.change)),
                None => (None, None),
            })
        })
    }

    /// Optimistic read-compute-swap loop shared by all transitions.
    ///
    /// `next` maps a snapshot to `(next_state, output)`, where a `None` state
    /// returns `output` without committing anything. It may run several
    /// times; an error leaves the register untouched.
    fn transition<T, F>(&self, operation: &'static str, mut next: F) -> CoreResult<T>
    where
        F: FnMut(&Cash) -> CoreResult<(Option<Cash>, T)>,
    {
        let mut conflicts: u32 = 0;

        loop {
            let current = self.cash.load_full();
            let (candidate, output) = next(current.as_ref())?;
            let Some(candidate) = candidate else {
                return Ok(output);
            };

            let money_amount = candidate.money_amount();
            let previous = self.cash.compare_and_swap(&current, Arc::new(candidate));

            if Arc::ptr_eq(&*previous, &current) {
                debug!(operation, conflicts, money_amount, "register updated");
                return Ok(output);
            }

            conflicts += 1;
            trace!(operation, conflicts, "register changed concurrently, retrying");
        }
    }
}

impl Default for CashRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for CashRegister<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CashRegister")
            .field("cash", &**self.cash.load())
            .finish_non_exhaustive()
    }
}
