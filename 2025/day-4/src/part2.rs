use miette::*;

use crate::part1::{occupied_neighbors, parse_grid};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let mut grid = parse_grid(input)?;
    let mut removed = 0;

    loop {
        let accessible: Vec<_> = grid
            .positions()
            .filter(|&(x, y)| grid[(x, y)] && occupied_neighbors(&grid, x, y) < 4)
            .collect();

        if accessible.is_empty() {
            break;
        }

        removed += accessible.len();
        for (x, y) in accessible {
            grid[(x, y)] = false;
        }
    }

    Ok(removed.to_string())
}
