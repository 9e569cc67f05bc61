use chumsky::Parser;
use miette::*;

use crate::part1::{best_joltage, parser};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let total: u64 = banks.iter().map(|bank| best_joltage(bank, 12)).sum();

    Ok(total.to_string())
}
