//! Minimum-coin change making.
//!
//! Given a [`DenominationSet`] and a target amount `N`, every strategy fills a
//! [`SolutionTable`] with, for each amount `0..=N`, the fewest coins that make
//! that amount and how many of each denomination they use. Three strategies
//! are provided and implement [`ChangeSolver`]:
//!
//! * [`BottomUpTabulation`]: iterative, O(N·D).
//! * [`MemoizedRecursion`]: recursive, reuses solved rows, O(N·D).
//! * [`NaiveRecursion`]: recursive, re-solves every sub-amount, exponential.
//!
//! # Examples
//!
//! ```
//! use making_change::cs::dynamic::coin_change::{solve, DenominationSet, MemoizedRecursion};
//!
//! let coins = DenominationSet::new([1, 3, 4]).unwrap();
//! let solution = solve(&MemoizedRecursion::default(), &coins, 6).unwrap();
//! assert_eq!(solution.total_coins, 2);
//! assert_eq!(solution.breakdown.get(&3), Some(&2));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::timing::{timed, Timed};

pub mod denominations;
pub mod memoized;
pub mod naive;
pub mod table;
pub mod tabulation;

pub use denominations::DenominationSet;
pub use memoized::MemoizedRecursion;
pub use naive::NaiveRecursion;
pub use table::SolutionTable;
pub use tabulation::{BottomUpTabulation, SlotScan};

/// Default recursion limit for the recursive strategies.
///
/// Fits comfortably in the 2 MiB stack of spawned threads, test threads and
/// rayon workers, unoptimized builds included.
pub const DEFAULT_MAX_DEPTH: usize = 2048;

/// Configuration shared by the recursive strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursionConfig {
    /// Deepest call chain a recursive strategy may build. Both recursive
    /// strategies need one level per amount, so this also caps the largest
    /// amount they accept.
    pub max_depth: usize,
}

impl Default for RecursionConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Work counters reported by a strategy run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Times a row was (re)computed.
    pub rows_solved: usize,
    /// Candidates that replaced a row's previous best.
    pub candidates_adopted: usize,
}

/// A strategy that populates a [`SolutionTable`].
pub trait ChangeSolver: Send + Sync {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Whether correct results depend on the denominations being ascending.
    fn requires_sorted_input(&self) -> bool {
        false
    }

    /// Rejects amounts this strategy cannot solve safely.
    ///
    /// Called before the table is allocated.
    fn check_amount(&self, _amount: usize) -> Result<()> {
        Ok(())
    }

    /// Solves rows `1..=table.amount()`.
    ///
    /// Fails with [`Error::SlotMismatch`] unless `table` was allocated with
    /// `denominations.len()` slots.
    fn fill(&self, denominations: &DenominationSet, table: &mut SolutionTable)
        -> Result<SolveStats>;
}

/// Checks that `table` has one slot per denomination.
pub(crate) fn check_slots(denominations: &DenominationSet, table: &SolutionTable) -> Result<()> {
    if table.slots() != denominations.len() {
        return Err(Error::SlotMismatch {
            table: table.slots(),
            denominations: denominations.len(),
        });
    }
    Ok(())
}

/// The answer for one amount, read from the last row of a solved table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub amount: usize,
    pub total_coins: usize,
    /// Denomination value -> coins used. Zero counts are omitted.
    pub breakdown: BTreeMap<usize, usize>,
}

impl Solution {
    /// Reads row `table.amount()`.
    ///
    /// Fails with [`Error::NoFeasibleSolution`] if that row was never solved.
    pub fn from_table(denominations: &DenominationSet, table: &SolutionTable) -> Result<Self> {
        let amount = table.amount();
        let total_coins = table
            .total(amount)
            .ok_or(Error::NoFeasibleSolution { amount })?;

        let mut breakdown = BTreeMap::new();
        for (slot, coin) in denominations.iter().enumerate() {
            let count = table.count(amount, slot);
            if count > 0 {
                *breakdown.entry(coin).or_insert(0) += count;
            }
        }

        Ok(Self {
            amount,
            total_coins,
            breakdown,
        })
    }

    /// Sum of `denomination * count` over the breakdown.
    pub fn value(&self) -> usize {
        self.breakdown.iter().map(|(coin, count)| coin * count).sum()
    }

    /// Breakdown entries, largest denomination first.
    pub fn largest_first(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.breakdown.iter().rev().map(|(&coin, &count)| (coin, count))
    }
}

/// Solves `amount` with `solver` on a fresh table.
pub fn solve<S>(solver: &S, denominations: &DenominationSet, amount: i64) -> Result<Solution>
where
    S: ChangeSolver + ?Sized,
{
    solve_with_stats(solver, denominations, amount).map(|(solution, _)| solution)
}

/// Like [`solve`], also returning the strategy's work counters.
pub fn solve_with_stats<S>(
    solver: &S,
    denominations: &DenominationSet,
    amount: i64,
) -> Result<(Solution, SolveStats)>
where
    S: ChangeSolver + ?Sized,
{
    let amount = usize::try_from(amount).map_err(|_| Error::InvalidAmount(amount))?;
    solver.check_amount(amount)?;
    let mut table = SolutionTable::try_allocate(amount, denominations.len())?;

    debug!(
        "{}: solving amount {} with {} denominations",
        solver.name(),
        amount,
        denominations.len()
    );
    let stats = solver.fill(denominations, &mut table)?;
    debug!(
        "{}: amount {} done, {} rows solved, {} candidates adopted",
        solver.name(),
        amount,
        stats.rows_solved,
        stats.candidates_adopted
    );

    let solution = Solution::from_table(denominations, &table)?;
    Ok((solution, stats))
}

/// Solves every amount independently, timing each solve.
///
/// With the `parallel` feature the amounts are spread over the rayon pool.
/// Results keep the order of `amounts`.
pub fn solve_all<S>(
    solver: &S,
    denominations: &DenominationSet,
    amounts: &[i64],
) -> Vec<Timed<Result<Solution>>>
where
    S: ChangeSolver + ?Sized,
{
    #[cfg(feature = "parallel")]
    {
        amounts
            .par_iter()
            .map(|&amount| timed(|| solve(solver, denominations, amount)))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        amounts
            .iter()
            .map(|&amount| timed(|| solve(solver, denominations, amount)))
            .collect()
    }
}

/// Run-time choice of strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BottomUp(SlotScan),
    Memoized,
    Naive,
}

impl Strategy {
    /// Builds the solver for this strategy.
    pub fn solver(self, config: RecursionConfig) -> Box<dyn ChangeSolver> {
        match self {
            Strategy::BottomUp(scan) => Box::new(BottomUpTabulation::new(scan)),
            Strategy::Memoized => Box::new(MemoizedRecursion::new(config)),
            Strategy::Naive => Box::new(NaiveRecursion::new(config)),
        }
    }

    pub fn requires_sorted_input(self) -> bool {
        matches!(self, Strategy::BottomUp(SlotScan::StopAtOvershoot))
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::BottomUp(SlotScan::default())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::BottomUp(SlotScan::StopAtOvershoot) => "bottom-up",
            Strategy::BottomUp(SlotScan::Exhaustive) => "bottom-up-exhaustive",
            Strategy::Memoized => "memoized",
            Strategy::Naive => "naive",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?}; expected bottom-up, bottom-up-exhaustive, memoized or naive")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "bottom-up" => Ok(Strategy::BottomUp(SlotScan::StopAtOvershoot)),
            "bottom-up-exhaustive" => Ok(Strategy::BottomUp(SlotScan::Exhaustive)),
            "memoized" => Ok(Strategy::Memoized),
            "naive" => Ok(Strategy::Naive),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}
