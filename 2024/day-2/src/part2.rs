use chumsky::Parser;
use miette::*;

use crate::part1::{is_safe, parser};

/// Safe outright, or safe after removing any single level.
fn is_safe_with_dampener(report: &[i64]) -> bool {
    if is_safe(report) {
        return true;
    }

    (0..report.len()).any(|skip| {
        let shortened: Vec<i64> = report
            .iter()
            .enumerate()
            .filter(|&(idx, _)| idx != skip)
            .map(|(_, &level)| level)
            .collect();
        is_safe(&shortened)
    })
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let reports = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let safe = reports
        .iter()
        .filter(|report| is_safe_with_dampener(report))
        .count();

    Ok(safe.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9";
        assert_eq!("4", process(input)?);
        Ok(())
    }
}
