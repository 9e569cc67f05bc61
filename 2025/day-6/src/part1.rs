use itertools::Itertools;
use miette::*;

/// A group of contiguous non-blank columns holding one problem.
pub(crate) struct Block {
    pub(crate) columns: Vec<usize>,
    pub(crate) op: char,
}

/// Splits the worksheet into padded rows and column-aligned blocks.
/// The last row carries the operator for each block.
pub(crate) fn parse_worksheet(input: &str) -> Result<(Vec<Vec<char>>, Vec<Block>)> {
    let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        bail!("worksheet needs at least one number row and an operator row");
    }

    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let rows: Vec<Vec<char>> = lines
        .iter()
        .map(|l| {
            let mut row: Vec<char> = l.chars().collect();
            row.resize(width, ' ');
            row
        })
        .collect();

    let is_blank = |col: usize| rows.iter().all(|row| row[col] == ' ');
    let op_row = &rows[rows.len() - 1];

    let grouped = (0..width).chunk_by(|&col| is_blank(col));
    let blocks = grouped
        .into_iter()
        .filter(|&(blank, _)| !blank)
        .map(|(_, group)| {
            let columns: Vec<usize> = group.collect();
            let op = columns
                .iter()
                .map(|&col| op_row[col])
                .find(|c| !c.is_whitespace())
                .ok_or_else(|| miette!("block without an operator"))?;
            Ok(Block { columns, op })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((rows, blocks))
}

pub(crate) fn apply(op: char, operands: impl Iterator<Item = u64>) -> Result<u64> {
    match op {
        '+' => Ok(operands.sum()),
        '*' => Ok(operands.product()),
        other => Err(miette!("unknown operator {:?}", other)),
    }
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (rows, blocks) = parse_worksheet(input)?;
    let number_rows = &rows[..rows.len() - 1];

    let total: u64 = blocks
        .iter()
        .map(|block| {
            let operands = number_rows.iter().filter_map(|row| {
                let text: String = block.columns.iter().map(|&col| row[col]).collect();
                text.trim().parse::<u64>().ok()
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
        assert_eq!("4277556", process(input)?);
        Ok(())
    }
}
