use chumsky::prelude::*;
use miette::*;

pub(crate) fn parser<'a>(
) -> impl Parser<'a, &'a str, Vec<(i64, i64)>, extra::Err<Rich<'a, char>>> {
    let num = text::int(10).from_str::<i64>().unwrapped();
    let pair = num
        .then_ignore(just(' ').repeated().at_least(1))
        .then(num);

    pair.separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let pairs = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let (mut left, mut right): (Vec<i64>, Vec<i64>) = pairs.into_iter().unzip();
    left.sort_unstable();
    right.sort_unstable();

    let total: i64 = left
        .iter()
        .zip(&right)
        .map(|(a, b)| (a - b).abs())
        .sum();

    Ok(total.to_string())
}
