use chumsky::prelude::*;
use miette::*;

pub(crate) fn parser<'a>() -> impl Parser<'a, &'a str, Vec<(u64, u64)>, extra::Err<Rich<'a, char>>>
{
    let num = text::int(10).from_str::<u64>().unwrapped();
    let range = num.then_ignore(just('-')).then(num).padded();

    range.separated_by(just(',')).allow_trailing().collect()
}

pub(crate) fn digit_count(n: u64) -> u32 {
    if n == 0 {
        0
    } else {
        1 + digit_count(n / 10)
    }
}

pub(crate) fn pow10(exp: u32) -> u64 {
    10u64.pow(exp)
}

/// The `len` digits of `x` starting `start` digits from the right.
pub(crate) fn select_digits(x: u64, start: u32, len: u32) -> u64 {
    (x / pow10(start)) % pow10(len)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let ranges = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut sum: u64 = 0;
    for (mut id, end) in ranges {
        while id <= end {
            let digits = digit_count(id);

            // Odd-length ids can never split into two equal halves; jump
            // straight to the next power of ten.
            if digits % 2 != 0 {
                let next = pow10(digits);
                if next > end {
                    break;
                }
                id = next;
                continue;
            }

            let half = digits / 2;
            if select_digits(id, half, half) == select_digits(id, 0, half) {
                sum += id;
            }
            id += 1;
        }
    }

    Ok(sum.to_string())
}
