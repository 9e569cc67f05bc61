use miette::*;
use rayon::prelude::*;

use crate::part1::{apply, parse_worksheet};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (rows, blocks) = parse_worksheet(input)?;
    let number_rows = &rows[..rows.len() - 1];

    let total: u64 = blocks
        .into_par_iter()
        .map(|block| {
            let operands = block.columns.iter().map(|&col| {
                number_rows
                    .iter()
                    .map(|row| row[col])
                    .filter(|c| c.is_ascii_digit())
                    .fold(0u64, |acc, digit| acc * 10 + digit.to_digit(10).unwrap() as u64)
            });
            apply(block.op, operands)
        })
        .sum::<Result<u64>>()?;

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "123 328  51 64
 45 64  387 23
  6 98  215 314
*   +   *   +  ";
        assert_eq!("3263827", process(input)?);
        Ok(())
    }
}
