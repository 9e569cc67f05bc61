use itertools::Itertools;
use miette::*;

pub(crate) fn parse_histories(input: &str) -> Result<Vec<Vec<i64>>> {
    aoc_common::non_empty_lines(input)
        .map(aoc_common::ints::<i64>)
        .collect()
}

/// Extrapolates the value following the sequence by recursing on the
/// adjacent differences until they are all zero.
pub(crate) fn next_value(sequence: &[i64]) -> i64 {
    if sequence.iter().all(|&v| v == 0) {
        return 0;
    }
    let diffs: Vec<i64> = sequence
        .iter()
        .tuple_windows()
        .map(|(a, b)| b - a)
        .collect();
    sequence.last().copied().unwrap_or(0) + next_value(&diffs)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let histories = parse_histories(input)?;
    let sum: i64 = histories.iter().map(|h| next_value(h)).sum();
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
        assert_eq!("114", process(input)?);
        Ok(())
    }

    #[test]
    fn constant_sequence_continues() {
        assert_eq!(next_value(&[5, 5, 5]), 5);
    }
}
