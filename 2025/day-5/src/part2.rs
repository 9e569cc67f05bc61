use miette::*;

use crate::part1::parser;
use chumsky::Parser;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (mut ranges, _) = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    ranges.sort_unstable();

    let mut total = 0u64;
    let mut current: Option<(u64, u64)> = None;

    for (lo, hi) in ranges {
        match current {
            Some((_, ref mut end)) if lo <= *end => {
                *end = (*end).max(hi);
            }
            _ => {
                if let Some((start, end)) = current {
                    total += end - start + 1;
                }
                current = Some((lo, hi));
            }
        }
    }
    if let Some((start, end)) = current {
        total += end - start + 1;
    }

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "3-5
10-14
16-20
12-18

1
5
8
11
17
32";
        assert_eq!("14", process(input)?);
        Ok(())
    }
}
