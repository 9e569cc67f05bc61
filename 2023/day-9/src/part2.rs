use itertools::Itertools;
use miette::*;

use crate::part1::parse_histories;

/// Extrapolates the value preceding the sequence.
fn previous_value(sequence: &[i64]) -> i64 {
    if sequence.iter().all(|&v| v == 0) {
        return 0;
    }
    let diffs: Vec<i64> = sequence
        .iter()
        .tuple_windows()
        .map(|(a, b)| b - a)
        .collect();
    sequence.first().copied().unwrap_or(0) - previous_value(&diffs)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let histories = parse_histories(input)?;
    let sum: i64 = histories.iter().map(|h| previous_value(h)).sum();
    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45";
        assert_eq!("2", process(input)?);
        Ok(())
    }
}
