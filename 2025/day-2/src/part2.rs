use std::collections::BTreeSet;

use chumsky::Parser;
use miette::*;

use crate::part1::{digit_count, parser, select_digits};

/// True when `id` is some digit block repeated two or more times.
fn is_repeated_block(id: u64) -> bool {
    let digits = digit_count(id);

    (1..digits)
        .filter(|width| digits % width == 0)
        .any(|width| {
            let first = select_digits(id, digits - width, width);
            (0..digits)
                .step_by(width as usize)
                .all(|start| select_digits(id, start, width) == first)
        })
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let ranges = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    // 222222 matches both 22|22|22 and 222|222; a set keeps overlapping
    // ranges and multiple widths from double counting.
    let mut seen = BTreeSet::new();
    for (start, end) in ranges {
        for id in start..=end {
            if is_repeated_block(id) {
                seen.insert(id);
            }
        }
    }

    Ok(seen.iter().sum::<u64>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(99, true)]
    #[case(111, true)]
    #[case(999, true)]
    #[case(1010, true)]
    #[case(222222, true)]
    #[case(123123, true)]
    #[case(1001, false)]
    #[case(1012, false)]
    #[case(7, false)]
    fn detects_repeated_blocks(#[case] id: u64, #[case] expected: bool) {
        assert_eq!(is_repeated_block(id), expected);
    }

    #[test]
    fn it_works() -> Result<()> {
        // 99, 111, 999 and 1010 repeat a block inside these ranges.
        assert_eq!("2219", process("95-115,998-1012")?);
        Ok(())
    }
}
