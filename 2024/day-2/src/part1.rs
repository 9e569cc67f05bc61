use chumsky::prelude::*;
use itertools::Itertools;
use miette::*;

pub(crate) fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<i64>>, extra::Err<Rich<'a, char>>> {
    let num = text::int(10).from_str::<i64>().unwrapped();
    let report = num
        .separated_by(just(' ').repeated().at_least(1))
        .at_least(1)
        .collect::<Vec<_>>();

    report
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

/// A report is safe when its levels are strictly monotone with adjacent
/// steps between 1 and 3.
pub(crate) fn is_safe(report: &[i64]) -> bool {
    let diffs: Vec<i64> = report.iter().tuple_windows().map(|(a, b)| b - a).collect();
    diffs.iter().all(|d| (1..=3).contains(d)) || diffs.iter().all(|d| (-3..=-1).contains(d))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let reports = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let safe = reports.iter().filter(|report| is_safe(report)).count();

    Ok(safe.to_string())
}
