pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{
    solve, solve_all, BottomUpTabulation, DenominationSet, MemoizedRecursion, NaiveRecursion,
    SolutionTable, Strategy,
};
