use log::{trace, warn};

use super::{check_slots, ChangeSolver, DenominationSet, SolutionTable, SolveStats};
use crate::error::Result;

/// What tabulation does when a denomination is larger than the amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotScan {
    /// Stop trying slots for this amount. Every later slot is assumed to be
    /// larger too, so this is only correct for ascending denominations.
    #[default]
    StopAtOvershoot,
    /// Skip just this slot and keep scanning. Correct in any order.
    Exhaustive,
}

/// Bottom-up tabulation: solves amounts `1..=N` in order, each from rows that
/// are already final.
///
/// Runs in O(N·D) time with no recursion.
///
/// # Examples
///
/// ```
/// use making_change::cs::dynamic::coin_change::{
///     solve, BottomUpTabulation, DenominationSet, SlotScan,
/// };
///
/// let coins = DenominationSet::new([1, 6, 10]).unwrap();
/// let solution = solve(&BottomUpTabulation::default(), &coins, 18).unwrap();
/// assert_eq!(solution.total_coins, 3);
///
/// // Early exit needs ascending input; the exhaustive scan does not.
/// let unsorted = DenominationSet::new([10, 1, 6]).unwrap();
/// let exhaustive = BottomUpTabulation::new(SlotScan::Exhaustive);
/// assert_eq!(solve(&exhaustive, &unsorted, 18).unwrap().total_coins, 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BottomUpTabulation {
    scan: SlotScan,
}

impl BottomUpTabulation {
    pub fn new(scan: SlotScan) -> Self {
        Self { scan }
    }

    pub fn scan(&self) -> SlotScan {
        self.scan
    }
}

impl ChangeSolver for BottomUpTabulation {
    fn name(&self) -> &'static str {
        match self.scan {
            SlotScan::StopAtOvershoot => "bottom-up",
            SlotScan::Exhaustive => "bottom-up-exhaustive",
        }
    }

    fn requires_sorted_input(&self) -> bool {
        self.scan == SlotScan::StopAtOvershoot
    }

    fn fill(
        &self,
        denominations: &DenominationSet,
        table: &mut SolutionTable,
    ) -> Result<SolveStats> {
        check_slots(denominations, table)?;
        if self.requires_sorted_input() && !denominations.is_sorted_ascending() {
            warn!(
                "{}: denominations {:?} are not ascending; amounts may be left unsolved",
                self.name(),
                denominations.as_slice()
            );
        }

        let mut stats = SolveStats::default();
        for amount in 1..=table.amount() {
            stats.rows_solved += 1;
            for (slot, coin) in denominations.iter().enumerate() {
                let Some(remainder) = amount.checked_sub(coin) else {
                    match self.scan {
                        SlotScan::StopAtOvershoot => break,
                        SlotScan::Exhaustive => continue,
                    }
                };
                if table.adopt(amount, remainder, slot) {
                    stats.candidates_adopted += 1;
                    trace!("amount {}: adopted {} + coin {}", amount, remainder, coin);
                }
            }
        }
        Ok(stats)
    }
}
