use aoc_common::Grid;
use miette::*;

use crate::part1::parse_grid;

fn is_cross_center(grid: &Grid<char>, x: usize, y: usize) -> bool {
    if grid[(x, y)] != 'A' {
        return false;
    }

    let x = x as isize;
    let y = y as isize;
    let diagonal = |a: (isize, isize), b: (isize, isize)| {
        matches!(
            (grid.get(x + a.0, y + a.1), grid.get(x + b.0, y + b.1)),
            (Some(&'M'), Some(&'S')) | (Some(&'S'), Some(&'M'))
        )
    };

    diagonal((-1, -1), (1, 1)) && diagonal((-1, 1), (1, -1))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = parse_grid(input)?;

    let count = grid
        .positions()
        .filter(|&(x, y)| is_cross_center(&grid, x, y))
        .count();

    Ok(count.to_string())
}
