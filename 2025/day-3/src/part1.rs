use chumsky::prelude::*;
use miette::*;

pub(crate) fn parser<'a>() -> impl Parser<'a, &'a str, Vec<&'a str>, extra::Err<Rich<'a, char>>> {
    text::digits(10)
        .to_slice()
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// The largest `count`-digit number formed by picking digits in order.
///
/// Greedy scan: each pick takes the leftmost maximal digit while leaving
/// enough digits to the right to finish the number.
pub(crate) fn best_joltage(bank: &str, count: usize) -> u64 {
    let digits = bank.as_bytes();
    if digits.len() < count {
        return 0;
    }

    let mut result = 0u64;
    let mut start = 0;
    for picked in 0..count {
        let window_end = digits.len() - (count - picked) + 1;
        let (offset, &digit) = digits[start..window_end]
            .iter()
            .enumerate()
            .max_by_key(|&(idx, &d)| (d, std::cmp::Reverse(idx)))
            .unwrap_or((0, &b'0'));

        result = result * 10 + u64::from(digit - b'0');
        start += offset + 1;
    }

    result
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let banks = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let total: u64 = banks.iter().map(|bank| best_joltage(bank, 2)).sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_two_digits_in_order() {
        assert_eq!(best_joltage("31415", 2), 45);
        assert_eq!(best_joltage("2718", 2), 78);
        assert_eq!(best_joltage("987654321111111", 2), 98);
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = "31415
2718";
        assert_eq!("123", process(input)?);
        Ok(())
    }
}
