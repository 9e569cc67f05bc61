use aoc_common::Grid;
use miette::*;

pub(crate) fn parse_grid(input: &str) -> Result<Grid<char>> {
    Grid::parse(input, Ok)
}

const DIRECTIONS: [(isize, isize); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (1, -1),
    (-1, -1),
    (1, 1),
    (-1, 1),
];

fn matches_at(grid: &Grid<char>, x: usize, y: usize, dx: isize, dy: isize) -> bool {
    "XMAS".chars().enumerate().all(|(step, expected)| {
        let step = step as isize;
        grid.get(x as isize + dx * step, y as isize + dy * step) == Some(&expected)
    })
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid = parse_grid(input)?;

    let count: usize = grid
        .positions()
        .map(|(x, y)| {
            DIRECTIONS
                .iter()
                .filter(|&&(dx, dy)| matches_at(&grid, x, y, dx, dy))
                .count()
        })
        .sum();

    Ok(count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() -> Result<()> {
        let input = "MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";
        assert_eq!("18", process(input)?);
        Ok(())
    }

    #[test]
    fn counts_overlapping_directions() -> Result<()> {
        // The central X starts a match in four directions.
        let input = "S..S..S
.A.A.A.
..MMM..
SAMXMAS
..MMM..
.A.A.A.
S..S..S";
        assert_eq!("8", process(input)?);
        Ok(())
    }
}
