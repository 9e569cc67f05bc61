use chumsky::prelude::*;
use miette::*;

pub(crate) type Database = (Vec<(u64, u64)>, Vec<u64>);

pub(crate) fn parser<'a>() -> impl Parser<'a, &'a str, Database, extra::Err<Rich<'a, char>>> {
    let number = text::int(10).from_str::<u64>().unwrapped();
    let newline = just('\r').or_not().ignore_then(just('\n'));

    let range = number.then_ignore(just('-')).then(number);
    let ranges = range
        .separated_by(newline)
        .allow_trailing()
        .collect::<Vec<_>>();
    let ids = number
        .separated_by(newline)
        .allow_trailing()
        .collect::<Vec<_>>();

    ranges.then_ignore(newline).then(ids)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (ranges, ids) = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    let fresh = ids
        .iter()
        .filter(|&&id| ranges.iter().any(|&(lo, hi)| lo <= id && id <= hi))
        .count();

    Ok(fresh.to_string())
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
        assert_eq!("3", process(input)?);
        Ok(())
    }
}
