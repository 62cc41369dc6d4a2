//! Minimum-coin change making.
//!
//! The engine lives in [`cs::dynamic::coin_change`]: a shared
//! [`SolutionTable`] and three interchangeable strategies that fill it.
//! [`input`], [`report`] and [`timing`] are the thin layers the
//! `make_change` binary puts around it.

pub mod cs;
pub mod error;
pub mod input;
pub mod report;
pub mod timing;

pub use cs::dynamic;
pub use cs::dynamic::coin_change::{
    solve, solve_all, solve_with_stats, BottomUpTabulation, ChangeSolver, DenominationSet,
    MemoizedRecursion, NaiveRecursion, RecursionConfig, SlotScan, Solution, SolutionTable,
    Strategy,
};
pub use error::{Error, Result};
