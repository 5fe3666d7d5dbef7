//! Bottom-up dynamic programming over the change amount, bounded by the bills
//! actually in the drawer.
//!
//! ```text
//! table[s] = best Solution whose change sums to exactly s
//!
//! for s in 1..=amount:
//!   for d in $1, $2, $5, $10, $20:
//!     r = s - d
//!     r <  0  → skip
//!     r == 0  → one d taken from the original drawer
//!     r >  0  → table[r] plus one d taken from table[r].remaining_cash
//!   keep the candidate with the fewest bills (first one wins ties)
//! ```
//!
//! This is not unbounded coin change: extending `table[r]` only works if that
//! particular path still has a `d` bill left, so every sub-amount carries its
//! own remaining cash. Greedy largest-first is not enough here: with
//! 4 x $2 + 1 x $10, `$8` must be paid in twos even though a ten is there.
//!
//! The table holds one entry per dollar of the requested amount, so amounts
//! above [`DpChangeStrategy::MAX_AMOUNT`] are rejected up front instead of
//! allocating it.

use tracing::debug;

use super::{ChangeStrategy, Solution};
use crate::cash::Cash;
use crate::denomination::Denomination;
use crate::error::{CoreError, CoreResult};

/// Fewest-bills change under bounded supply.
///
/// ## Example
/// ```rust
/// use hello_change_core::{Cash, ChangeStrategy, Denomination, DpChangeStrategy};
///
/// let drawer = Cash::from_counts([(Denomination::Two, 4), (Denomination::Ten, 1)]).unwrap();
/// let strategy = DpChangeStrategy;
///
/// let solution = strategy.compute_change(&drawer, 8).unwrap().unwrap();
/// assert_eq!(solution.change.count(Denomination::Two), 4);
///
/// // Every bill is even: odd amounts cannot be paid
/// assert!(strategy.compute_change(&drawer, 9).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DpChangeStrategy;

impl DpChangeStrategy {
    /// Largest amount the table is built for, roughly 120 MB of entries.
    pub const MAX_AMOUNT: u64 = 1_000_000;
}

impl ChangeStrategy for DpChangeStrategy {
    fn compute_change(&self, available: &Cash, amount: i64) -> CoreResult<Option<Solution>> {
        let target = u64::try_from(amount).map_err(|_| {
            CoreError::invalid_argument(format!("negative change amount: {amount}"))
        })?;

        if target == 0 {
            return Ok(Some(Solution::trivial(*available)));
        }

        if target > available.money_amount() {
            debug!(
                amount = target,
                available = available.money_amount(),
                "change exceeds drawer total"
            );
            return Ok(None);
        }

        if target > Self::MAX_AMOUNT {
            return Err(CoreError::invalid_argument(format!(
                "change amount {target} exceeds the supported maximum of {}",
                Self::MAX_AMOUNT
            )));
        }

        let target = usize::try_from(target).map_err(|_| {
            CoreError::invalid_argument(format!("change amount too large: {amount}"))
        })?;

        let origin = Solution::trivial(*available);
        let mut table: Vec<Option<Solution>> = vec![None; target + 1];

        for sub_amount in 1..=target {
            let mut best: Option<Solution> = None;

            for denomination in Denomination::ASCENDING {
                let Some(rest) = sub_amount.checked_sub(denomination.face_value() as usize) else {
                    continue;
                };

                let base = if rest == 0 {
                    &origin
                } else {
                    match &table[rest] {
                        Some(solution) => solution,
                        None => continue,
                    }
                };

                let Some(candidate) = base.with_one_more(denomination) else {
                    continue;
                };

                if best.map_or(true, |b| candidate.priority() < b.priority()) {
                    best = Some(candidate);
                }
            }

            table[sub_amount] = best;
        }

        let solution = table.pop().flatten();
        if solution.is_none() {
            debug!(amount = target, "no bill combination matches the amount");
        }
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cash(counts: &[(Denomination, i64)]) -> Cash {
        Cash::from_counts(counts.iter().copied()).unwrap()
    }

    fn change(available: &Cash, amount: i64) -> Option<Solution> {
        DpChangeStrategy.compute_change(available, amount).unwrap()
    }

    /// Checks the invariants every feasible answer must satisfy.
    fn assert_valid(available: &Cash, amount: i64, solution: &Solution) {
        assert_eq!(solution.change.money_amount(), amount as u64);
        assert_eq!(solution.change.add(&solution.remaining_cash).unwrap(), *available);
    }

    /// Unbounded minimum bill count (CSES "Minimizing Coins").
    fn unbounded_min_bills(target: usize) -> u64 {
        let mut tally = vec![u64::MAX; target + 1];
        tally[0] = 0;
        for current in 1..=target {
            for d in Denomination::ASCENDING {
                let face = d.face_value() as usize;
                if face <= current && tally[current - face] != u64::MAX {
                    tally[current] = tally[current].min(tally[current - face] + 1);
                }
            }
        }
        tally[target]
    }

    #[test]
    fn test_negative_amount_is_invalid() {
        let result = DpChangeStrategy.compute_change(&Cash::EMPTY, -16);
        assert!(matches!(result, Err(CoreError::InvalidArgument { .. })));
    }

    #[test]
    fn test_zero_amount_is_trivial() {
        let available = cash(&[(Denomination::Five, 5), (Denomination::One, 3)]);
        let solution = change(&available, 0).unwrap();

        assert_eq!(solution.change, Cash::EMPTY);
        assert_eq!(solution.remaining_cash, available);

        assert_eq!(change(&Cash::EMPTY, 0).unwrap().remaining_cash, Cash::EMPTY);
    }

    #[test]
    fn test_amount_above_total_is_infeasible() {
        let available = cash(&[(Denomination::Twenty, 1), (Denomination::One, 2)]);
        assert!(change(&available, 23).is_none());
        assert!(change(&Cash::EMPTY, 1).is_none());
    }

    #[test]
    fn test_amount_above_table_limit_is_invalid() {
        let available = cash(&[(Denomination::Twenty, 100_000)]);
        assert_eq!(available.money_amount(), 2 * DpChangeStrategy::MAX_AMOUNT);

        let result = DpChangeStrategy.compute_change(&available, 1_000_020);
        assert_eq!(
            result,
            Err(CoreError::InvalidArgument {
                reason: "change amount 1000020 exceeds the supported maximum of 1000000".to_string(),
            })
        );

        // the total check still comes first
        assert!(change(&available, 2_000_001).is_none());
    }

    #[test]
    fn test_multiples_of_five() {
        let available = cash(&[(Denomination::Five, 5)]);

        for amount in (5..=25).step_by(5) {
            let solution = change(&available, amount).unwrap();
            assert_valid(&available, amount, &solution);
            assert_eq!(solution.change.bill_count(), amount as u64 / 5);
        }

        assert!(change(&available, 30).is_none());
        for amount in (1..30).filter(|a| a % 5 != 0) {
            assert!(change(&available, amount).is_none(), "amount {amount}");
        }
    }

    #[test]
    fn test_greedy_fails_case() {
        let available = cash(&[(Denomination::Two, 4), (Denomination::Ten, 1)]);
        assert_eq!(available.money_amount(), 18);

        for amount in (2..=18).step_by(2) {
            let solution = change(&available, amount).unwrap();
            assert_valid(&available, amount, &solution);
        }
        for amount in (1..20).step_by(2) {
            assert!(change(&available, amount).is_none(), "amount {amount}");
        }
        assert!(change(&available, 20).is_none());

        // $8 cannot touch the ten
        let eight = change(&available, 8).unwrap();
        assert_eq!(eight.change, cash(&[(Denomination::Two, 4)]));
    }

    #[test]
    fn test_fives_and_one() {
        let available = cash(&[(Denomination::Five, 3), (Denomination::One, 1)]);
        let feasible = [1, 5, 6, 10, 11, 15, 16];

        for amount in 1..=20 {
            match change(&available, amount) {
                Some(solution) => {
                    assert!(feasible.contains(&amount), "amount {amount}");
                    assert_valid(&available, amount, &solution);
                }
                None => assert!(!feasible.contains(&amount), "amount {amount}"),
            }
        }
    }

    #[test]
    fn test_tens_and_ones_split() {
        let available = cash(&[(Denomination::Ten, 10), (Denomination::One, 9)]);

        for amount in 1..110 {
            let solution = change(&available, amount).unwrap();
            let expected = cash(&[(Denomination::Ten, amount / 10), (Denomination::One, amount % 10)]);
            assert_eq!(solution.change, expected, "amount {amount}");
            assert_valid(&available, amount, &solution);
        }
        assert!(change(&available, 110).is_none());
    }

    #[test]
    fn test_scarcity_case() {
        let available = cash(&[
            (Denomination::Five, 1),
            (Denomination::Two, 1),
            (Denomination::One, 1),
        ]);

        let all = change(&available, 8).unwrap();
        assert_eq!(all.change, available);
        assert_eq!(all.remaining_cash, Cash::EMPTY);

        assert_eq!(change(&available, 5).unwrap().change, cash(&[(Denomination::Five, 1)]));
        assert_eq!(
            change(&available, 3).unwrap().change,
            cash(&[(Denomination::Two, 1), (Denomination::One, 1)])
        );
        assert!(change(&available, 4).is_none());
        assert!(change(&available, 9).is_none());
    }

    #[test]
    fn test_eight_out_of_thirteen() {
        let untreatable = [
            cash(&[(Denomination::Ten, 1), (Denomination::Two, 1), (Denomination::One, 1)]),
            cash(&[(Denomination::Ten, 1), (Denomination::One, 3)]),
        ];
        let treatable = [
            cash(&[(Denomination::Five, 2), (Denomination::Two, 1), (Denomination::One, 1)]),
            cash(&[(Denomination::Five, 2), (Denomination::One, 3)]),
            cash(&[(Denomination::Five, 1), (Denomination::Two, 4)]),
            cash(&[(Denomination::Five, 1), (Denomination::Two, 3), (Denomination::One, 2)]),
            cash(&[(Denomination::Five, 1), (Denomination::Two, 2), (Denomination::One, 4)]),
            cash(&[(Denomination::Five, 1), (Denomination::Two, 1), (Denomination::One, 6)]),
            cash(&[(Denomination::Five, 1), (Denomination::One, 8)]),
        ];

        for available in untreatable.iter().chain(treatable.iter()) {
            assert_eq!(available.money_amount(), 13);
        }
        for available in &untreatable {
            assert!(change(available, 8).is_none());
        }
        for available in &treatable {
            let solution = change(available, 8).unwrap();
            assert_valid(available, 8, &solution);
            assert_eq!(solution.remaining_cash.money_amount(), 5);
        }
    }

    #[test]
    fn test_minimal_bill_count_with_abundant_supply() {
        let available = Cash::from_counts(Denomination::ASCENDING.map(|d| (d, 1024i64))).unwrap();

        for amount in 1..=1024i64 {
            let solution = change(&available, amount).unwrap();
            assert_valid(&available, amount, &solution);
            assert_eq!(
                solution.change.bill_count(),
                unbounded_min_bills(amount as usize),
                "amount {amount}"
            );
        }
    }
}
