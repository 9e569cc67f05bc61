use chumsky::prelude::*;
use miette::*;

/// Signed rotation: negative turns left, positive turns right.
pub(crate) fn parser<'a>() -> impl Parser<'a, &'a str, Vec<i64>, extra::Err<Rich<'a, char>>> {
    let rotation = one_of("LR")
        .then(text::int(10).from_str::<i64>().unwrapped())
        .map(|(dir, amount)| match dir {
            'L' => -amount,
            _ => amount,
        });

    rotation
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

pub(crate) const DIAL_START: i64 = 50;
pub(crate) const DIAL_SIZE: i64 = 100;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let rotations = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let mut position = DIAL_START;
    let mut zero_hits = 0;
    for rotation in rotations {
        position = (position + rotation).rem_euclid(DIAL_SIZE);
        if position == 0 {
            zero_hits += 1;
        }
    }

    Ok(zero_hits.to_string())
}
