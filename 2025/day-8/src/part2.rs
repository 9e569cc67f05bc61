use miette::*;

use crate::part1::parser;
use crate::solver::Solver;
use chumsky::Parser;

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))?;

    if points.len() < 2 {
        return Ok("0".to_string());
    }

    let mut solver = Solver::new(points);
    let last_edge = solver
        .solve(None)
        .ok_or_else(|| miette!("no connection was ever added"))?;

    let result = solver.points()[last_edge.a].x * solver.points()[last_edge.b].x;

    Ok(result.to_string())
}
