use chumsky::prelude::*;
use glam::I64Vec3;
use miette::*;

use crate::solver::Solver;

/// Steps the puzzle allots before reporting circuit sizes.
const STEP_BUDGET: usize = 1000;

pub(crate) fn parser<'a>() -> impl Parser<'a, &'a str, Vec<I64Vec3>, extra::Err<Rich<'a, char>>> {
    let coord = text::int(10).from_str::<i64>().unwrapped();

    let point = coord
        .then_ignore(just(','))
        .then(coord)
        .then_ignore(just(','))
        .then(coord)
        .map(|((x, y), z)| I64Vec3::new(x, y, z));

    point
        .separated_by(text::newline())
        .allow_trailing()
        .collect()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    if points.is_empty() {
        return Ok("0".to_string());
    }

    let mut solver = Solver::new(points);
    solver.solve(Some(STEP_BUDGET));

    let result: usize = solver.circuit_sizes().into_iter().take(3).product();

    Ok(result.to_string())
}
