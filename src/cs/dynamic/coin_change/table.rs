use bitvec::prelude::*;
use ndarray::{s, Array2, ArrayView1};

use crate::error::{Error, Result};

/// Per-amount coin counts shared by every change-making strategy.
///
/// Rows are amounts `0..=N`. Columns `0..D` hold how many coins of each
/// denomination slot the row's best known solution uses; column `D` holds the
/// total. Each row also carries a solved flag, so an untouched row is never
/// mistaken for a zero-coin answer. Row 0 is solved from the start.
#[derive(Debug, Clone)]
pub struct SolutionTable {
    cells: Array2<usize>,
    solved: BitVec,
}

impl SolutionTable {
    /// Allocates `amount + 1` rows of `slots + 1` zeroed cells.
    ///
    /// # Panics
    ///
    /// Panics if the table cannot be allocated; see [`Self::try_allocate`].
    pub fn allocate(amount: usize, slots: usize) -> Self {
        Self::try_allocate(amount, slots).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Allocates `amount + 1` rows of `slots + 1` zeroed cells, failing with
    /// [`Error::TableTooLarge`] when the size overflows or memory is refused.
    pub fn try_allocate(amount: usize, slots: usize) -> Result<Self> {
        let too_large = || Error::TableTooLarge { amount };
        let rows = amount.checked_add(1).ok_or_else(too_large)?;
        let cols = slots.checked_add(1).ok_or_else(too_large)?;
        let len = rows.checked_mul(cols).ok_or_else(too_large)?;
        let bytes = len
            .checked_mul(std::mem::size_of::<usize>())
            .ok_or_else(too_large)?;
        if bytes > isize::MAX as usize || rows > BitSlice::<usize, Lsb0>::MAX_BITS {
            return Err(too_large());
        }

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| too_large())?;
        data.resize(len, 0);
        let cells = Array2::from_shape_vec((rows, cols), data).map_err(|_| too_large())?;

        let mut solved = BitVec::repeat(false, rows);
        solved.set(0, true);
        Ok(Self { cells, solved })
    }

    /// Target amount, i.e. the index of the last row.
    #[inline]
    pub fn amount(&self) -> usize {
        self.cells.nrows() - 1
    }

    /// Number of denomination slots (excluding the total column).
    #[inline]
    pub fn slots(&self) -> usize {
        self.cells.ncols() - 1
    }

    #[inline]
    pub fn is_solved(&self, row: usize) -> bool {
        self.solved[row]
    }

    /// Total coin count for `row`, or `None` while the row is unsolved.
    #[inline]
    pub fn total(&self, row: usize) -> Option<usize> {
        self.is_solved(row).then(|| self.cells[[row, self.slots()]])
    }

    /// Coins of `slot` used by `row`.
    #[inline]
    pub fn count(&self, row: usize, slot: usize) -> usize {
        self.cells[[row, slot]]
    }

    /// All `D + 1` cells of `row`, total last.
    pub fn row(&self, row: usize) -> ArrayView1<'_, usize> {
        self.cells.row(row)
    }

    /// Copies every cell of row `src` into row `dst`.
    pub fn copy_row(&mut self, dst: usize, src: usize) {
        if dst == src {
            return;
        }
        let (mut to, from) = self.cells.multi_slice_mut((s![dst, ..], s![src, ..]));
        to.assign(&from);
    }

    /// Adds one coin of `slot` to `row`, keeping the total in step.
    pub fn increment_slot(&mut self, row: usize, slot: usize) {
        let total = self.slots();
        self.cells[[row, slot]] += 1;
        self.cells[[row, total]] += 1;
    }

    /// Offers "the solution of `src` plus one coin of `slot`" as a candidate
    /// for `row`.
    ///
    /// The candidate is adopted when `src` is solved and `row` is either
    /// unsolved or needs strictly more coins. Ties keep the earlier candidate.
    /// Returns whether the row changed.
    pub fn adopt(&mut self, row: usize, src: usize, slot: usize) -> bool {
        let Some(remainder_total) = self.total(src) else {
            return false;
        };
        let candidate = remainder_total + 1;
        if let Some(current) = self.total(row) {
            if candidate >= current {
                return false;
            }
        }
        self.copy_row(row, src);
        self.increment_slot(row, slot);
        self.solved.set(row, true);
        true
    }

    /// Forgets everything known about `row` so it can be solved again.
    pub fn reset_row(&mut self, row: usize) {
        debug_assert!(row != 0, "row 0 is the fixed zero-coin base case");
        self.cells.row_mut(row).fill(0);
        self.solved.set(row, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_shape_and_base_case() {
        let table = SolutionTable::allocate(7, 3);
        assert_eq!(table.amount(), 7);
        assert_eq!(table.slots(), 3);
        assert_eq!(table.total(0), Some(0));
        for row in 1..=7 {
            assert!(!table.is_solved(row));
            assert_eq!(table.total(row), None);
            assert!(table.row(row).iter().all(|&c| c == 0));
        }
    }

    #[test]
    fn oversized_tables_are_refused() {
        assert!(matches!(
            SolutionTable::try_allocate(usize::MAX, 3),
            Err(Error::TableTooLarge { amount: usize::MAX })
        ));
        assert!(matches!(
            SolutionTable::try_allocate(1 << 60, 4),
            Err(Error::TableTooLarge { .. })
        ));
        let table = SolutionTable::try_allocate(3, 2).unwrap();
        assert_eq!(table.amount(), 3);
        assert_eq!(table.total(0), Some(0));
    }

    #[test]
    fn copy_and_increment_keep_total_consistent() {
        let mut table = SolutionTable::allocate(4, 2);
        table.increment_slot(1, 0);
        table.increment_slot(1, 1);
        table.copy_row(3, 1);
        table.increment_slot(3, 1);
        assert_eq!(table.row(3).to_vec(), vec![1, 2, 3]);
        // Copying a row onto itself is a no-op.
        table.copy_row(3, 3);
        assert_eq!(table.row(3).to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn adopt_first_candidate_then_only_strictly_better() {
        let mut table = SolutionTable::allocate(6, 2);
        // 1 = 1
        assert!(table.adopt(1, 0, 0));
        // 2 = 1 + 1
        assert!(table.adopt(2, 1, 0));
        // 3 = 2 + 1, three coins
        assert!(table.adopt(3, 2, 0));
        assert_eq!(table.total(3), Some(3));
        // 3 = 0 + 3, one coin, strictly better
        assert!(table.adopt(3, 0, 1));
        assert_eq!(table.total(3), Some(1));
        assert_eq!(table.count(3, 0), 0);
        assert_eq!(table.count(3, 1), 1);
        // 3 = 2 + 1 again is worse and rejected
        assert!(!table.adopt(3, 2, 0));
        assert_eq!(table.total(3), Some(1));
    }

    #[test]
    fn adopt_ignores_unsolved_remainders() {
        let mut table = SolutionTable::allocate(5, 1);
        assert!(!table.adopt(5, 2, 0));
        assert!(!table.is_solved(5));
    }

    #[test]
    fn adopt_keeps_earlier_candidate_on_tie() {
        // Both slots hold a 1.
        let mut table = SolutionTable::allocate(2, 2);
        assert!(table.adopt(1, 0, 0));
        assert!(table.adopt(2, 1, 0));
        assert!(!table.adopt(2, 1, 1));
        assert_eq!(table.count(2, 0), 2);
        assert_eq!(table.count(2, 1), 0);
    }

    #[test]
    fn reset_row_marks_unsolved() {
        let mut table = SolutionTable::allocate(3, 1);
        assert!(table.adopt(1, 0, 0));
        table.reset_row(1);
        assert!(!table.is_solved(1));
        assert!(table.row(1).iter().all(|&c| c == 0));
        assert!(table.is_solved(0));
    }
}
