use log::trace;

use super::{
    check_slots, ChangeSolver, DenominationSet, RecursionConfig, SolutionTable, SolveStats,
};
use crate::error::{Error, Result};

/// Top-down recursion without memoization.
///
/// Follows the same visiting order and update rule as
/// [`MemoizedRecursion`](super::MemoizedRecursion), but the candidate for each
/// slot comes from solving `n - coin` again from scratch rather than reading
/// the table. Nothing is reused between sibling calls, so the running time
/// grows exponentially with the amount. Only useful as a baseline; anything
/// much past an amount of twenty is already slow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveRecursion {
    config: RecursionConfig,
}

impl NaiveRecursion {
    pub fn new(config: RecursionConfig) -> Self {
        Self { config }
    }

    /// Recomputes row `amount` and everything below it, returning its total.
    fn solve_row(
        &self,
        denominations: &DenominationSet,
        table: &mut SolutionTable,
        amount: usize,
        depth: usize,
        stats: &mut SolveStats,
    ) -> Result<Option<usize>> {
        if amount == 0 {
            return Ok(table.total(0));
        }
        if depth > self.config.max_depth {
            return Err(Error::RecursionDepthExceeded {
                limit: self.config.max_depth,
            });
        }

        self.solve_row(denominations, table, amount - 1, depth + 1, stats)?;

        table.reset_row(amount);
        stats.rows_solved += 1;
        for (slot, coin) in denominations.iter().enumerate() {
            let Some(remainder) = amount.checked_sub(coin) else {
                continue;
            };
            // No lookup: solve the remainder again, which leaves its row
            // fresh in the table for `adopt` to copy.
            self.solve_row(denominations, table, remainder, depth + 1, stats)?;
            if table.adopt(amount, remainder, slot) {
                stats.candidates_adopted += 1;
                trace!("amount {}: adopted {} + coin {}", amount, remainder, coin);
            }
        }
        Ok(table.total(amount))
    }
}

impl ChangeSolver for NaiveRecursion {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn check_amount(&self, amount: usize) -> Result<()> {
        if amount > self.config.max_depth {
            return Err(Error::RecursionDepthExceeded {
                limit: self.config.max_depth,
            });
        }
        Ok(())
    }

    fn fill(
        &self,
        denominations: &DenominationSet,
        table: &mut SolutionTable,
    ) -> Result<SolveStats> {
        check_slots(denominations, table)?;
        let mut stats = SolveStats::default();
        self.solve_row(denominations, table, table.amount(), 1, &mut stats)?;
        Ok(stats)
    }
}
