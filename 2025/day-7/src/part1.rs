use aoc_common::Grid;
use miette::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Tile {
    Empty,
    Start,
    Splitter,
}

pub(crate) fn parse_manifold(input: &str) -> Result<(Grid<Tile>, usize)> {
    let grid = Grid::parse(input, |c| match c {
        'S' => Ok(Tile::Start),
        '^' => Ok(Tile::Splitter),
        '.' => Ok(Tile::Empty),
        other => Err(miette!("unexpected character {:?}", other)),
    })?;

    let (start_x, _) = grid
        .positions()
        .find(|&pos| grid[pos] == Tile::Start)
        .ok_or_else(|| miette!("no start position 'S' in grid"))?;

    Ok((grid, start_x))
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (grid, start_x) = parse_manifold(input)?;

    let mut beams = vec![false; grid.width()];
    let mut next = vec![false; grid.width()];
    beams[start_x] = true;

    let mut splits = 0usize;

    for y in 0..grid.height() {
        next.fill(false);
        for x in 0..grid.width() {
            if !beams[x] {
                continue;
            }
            match grid[(x, y)] {
                Tile::Splitter => {
                    splits += 1;
                    if x > 0 {
                        next[x - 1] = true;
                    }
                    if x + 1 < grid.width() {
                        next[x + 1] = true;
                    }
                }
                Tile::Empty | Tile::Start => next[x] = true,
            }
        }
        std::mem::swap(&mut beams, &mut next);
    }

    Ok(splits.to_string())
}
