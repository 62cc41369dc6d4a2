//! Plain-text report of solved problem sets.

use std::io::{self, Write};

use crate::cs::dynamic::coin_change::Solution;
use crate::error::{Error, Result};
use crate::timing::Timed;

const ZERO_CASE: &str = "No coins are used for the zero case.";
const NO_SOLUTION: &str =
    "Error: No solution was found. Ensure you have pennies as a minimum denomination.";

/// Formats `value` with `,` between groups of three digits.
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// The `<amount> cents = ...` line for one solution.
pub fn solution_line(solution: &Solution) -> String {
    let amount = group_thousands(solution.amount as u128);
    if solution.total_coins == 0 {
        return format!("{} cents = {}", amount, ZERO_CASE);
    }
    let coins: Vec<String> = solution
        .largest_first()
        .map(|(coin, count)| format!("{}:{}", coin, count))
        .collect();
    format!("{} cents = {}", amount, coins.join(" "))
}

fn outcome_line(amount: i64, outcome: &Result<Solution>) -> String {
    match outcome {
        Ok(solution) => solution_line(solution),
        Err(Error::NoFeasibleSolution { amount }) => {
            format!("{} cents = {}", group_thousands(*amount as u128), NO_SOLUTION)
        }
        Err(err) => {
            let amount = match u128::try_from(amount) {
                Ok(amount) => group_thousands(amount),
                Err(_) => amount.to_string(),
            };
            format!("{} cents = Error: {}", amount, err)
        }
    }
}

/// Writes one problem set: a header, one block per amount, and a closing
/// `---` after the last amount.
///
/// `amounts` and `results` are parallel slices.
pub fn write_problem_set<W: Write>(
    out: &mut W,
    set_number: usize,
    amounts: &[i64],
    results: &[Timed<Result<Solution>>],
) -> io::Result<()> {
    writeln!(out, "--Problem Set #{}--", set_number)?;
    for (&amount, result) in amounts.iter().zip(results) {
        writeln!(out, "---")?;
        writeln!(out, "{}", outcome_line(amount, &result.value))?;
        writeln!(
            out,
            "Total Time: {} ns",
            group_thousands(result.elapsed.as_nanos())
        )?;
    }
    if !results.is_empty() {
        writeln!(out, "---")?;
    }
    writeln!(out)
}
