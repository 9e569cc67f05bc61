use aoc_common::Grid;
use miette::*;

/// true = a paper roll ('@'), false = empty floor ('.').
pub(crate) fn parse_grid(input: &str) -> Result<Grid<bool>> {
    Grid::parse(input, |c| match c {
        '@' => Ok(true),
        '.' => Ok(false),
        other => Err(miette!("unexpected character {:?}", other)),
    })
}

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub(crate) fn occupied_neighbors(grid: &Grid<bool>, x: usize, y: usize) -> usize {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.get(x as isize + dx, y as isize + dy) == Some(&true))
        .count()
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = parse_grid(input)?;

    let accessible = grid
        .positions()
        .filter(|&(x, y)| grid[(x, y)] && occupied_neighbors(&grid, x, y) < 4)
        .count();

    Ok(accessible.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";
        assert_eq!("13", process(input)?);
        Ok(())
    }
}
