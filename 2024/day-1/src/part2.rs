use chumsky::Parser;
use counter::Counter;
use miette::*;

use crate::part1::parser;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let pairs = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let histogram: Counter<i64> = pairs.iter().map(|&(_, right)| right).collect();

    // Similarity score: each left value weighted by how often it appears
    // in the right column.
    let score: i64 = pairs
        .iter()
        .map(|&(left, _)| left * histogram[&left] as i64)
        .sum();

    Ok(score.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "3   4
4   3
2   5
1   3
3   9
3   3";
        assert_eq!("31", process(input)?);
        Ok(())
    }
}
