use crate::error::{Error, Result};

/// An ordered sequence of positive coin values.
///
/// The position of a value in the set is its *slot*, which every solver uses
/// as a column index into the [`SolutionTable`](super::SolutionTable). The
/// caller's order is preserved; no strategy reorders the set on its own.
///
/// # Examples
///
/// ```
/// use making_change::cs::dynamic::coin_change::DenominationSet;
///
/// let coins = DenominationSet::new([10, 1, 5]).unwrap();
/// assert_eq!(coins.get(0), 10);
/// assert!(!coins.is_sorted_ascending());
/// assert_eq!(coins.sorted().as_slice(), &[1, 5, 10]);
///
/// assert!(DenominationSet::new([1, 0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenominationSet {
    values: Vec<usize>,
}

impl DenominationSet {
    /// Builds a set from caller-supplied values, rejecting any value `<= 0`.
    pub fn new<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let values = values
            .into_iter()
            .enumerate()
            .map(|(slot, value)| {
                if value <= 0 {
                    return Err(Error::InvalidDenomination { slot, value });
                }
                usize::try_from(value).map_err(|_| Error::InvalidDenomination { slot, value })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { values })
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Denomination stored in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= self.len()`.
    #[inline]
    pub fn get(&self, slot: usize) -> usize {
        self.values[slot]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.iter().copied()
    }

    /// True when every value is no larger than the one in the next slot.
    pub fn is_sorted_ascending(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    /// Returns an ascending copy of the set.
    ///
    /// This is the explicit sort step needed before running
    /// [`BottomUpTabulation`](super::BottomUpTabulation) with
    /// [`SlotScan::StopAtOvershoot`](super::SlotScan::StopAtOvershoot) on
    /// input of unknown order.
    pub fn sorted(&self) -> Self {
        let mut values = self.values.clone();
        values.sort_unstable();
        Self { values }
    }
}
