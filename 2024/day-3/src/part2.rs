use miette::*;

use crate::part1::scan;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    Ok(scan(input, true).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!("48", process(input)?);
        Ok(())
    }

    #[test]
    fn toggles_span_lines() -> Result<()> {
        let input = "mul(2,3)don't()\nmul(5,5)\ndo()mul(4,4)";
        assert_eq!("22", process(input)?);
        Ok(())
    }
}
