use log::trace;

use super::{
    check_slots, ChangeSolver, DenominationSet, RecursionConfig, SolutionTable, SolveStats,
};
use crate::error::{Error, Result};

/// Top-down recursion with memoization.
///
/// Solving amount `n` first recurses to make sure `n - 1` (and so every
/// smaller amount) is solved, then tries each slot by looking up the already
/// solved row `n - coin`. A slot that overshoots is skipped on its own, so
/// the result does not depend on the order of the denominations.
///
/// Time is O(N·D). The call chain is one frame per amount and is capped by
/// [`RecursionConfig::max_depth`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoizedRecursion {
    config: RecursionConfig,
}

impl MemoizedRecursion {
    pub fn new(config: RecursionConfig) -> Self {
        Self { config }
    }

    fn descend(
        &self,
        denominations: &DenominationSet,
        table: &mut SolutionTable,
        amount: usize,
        depth: usize,
        stats: &mut SolveStats,
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        if depth > self.config.max_depth {
            return Err(Error::RecursionDepthExceeded {
                limit: self.config.max_depth,
            });
        }

        self.descend(denominations, table, amount - 1, depth + 1, stats)?;

        stats.rows_solved += 1;
        for (slot, coin) in denominations.iter().enumerate() {
            let Some(remainder) = amount.checked_sub(coin) else {
                continue;
            };
            // Lookup instead of recursion: `remainder < amount` is final.
            if table.adopt(amount, remainder, slot) {
                stats.candidates_adopted += 1;
                trace!("amount {}: adopted {} + coin {}", amount, remainder, coin);
            }
        }
        Ok(())
    }
}

impl ChangeSolver for MemoizedRecursion {
    fn name(&self) -> &'static str {
        "memoized"
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
        self.descend(denominations, table, table.amount(), 1, &mut stats)?;
        Ok(stats)
    }
}
