use miette::*;

use crate::part1::{parse_manifold, Tile};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let (grid, start_x) = parse_manifold(input)?;

    // Splitters double the path count, so this grows as 2^N.
    let mut counts: Vec<u128> = vec![0; grid.width()];
    let mut next: Vec<u128> = vec![0; grid.width()];
    counts[start_x] = 1;

    let mut exited: u128 = 0;

    for y in 0..grid.height() {
        next.fill(0);
        for x in 0..grid.width() {
            let count = counts[x];
            if count == 0 {
                continue;
            }
            match grid[(x, y)] {
                Tile::Splitter => {
                    if x > 0 {
                        next[x - 1] += count;
                    } else {
                        exited += count;
                    }
                    if x + 1 < grid.width() {
                        next[x + 1] += count;
                    } else {
                        exited += count;
                    }
                }
                Tile::Empty | Tile::Start => next[x] += count,
            }
        }
        std::mem::swap(&mut counts, &mut next);
    }

    // Everything still in flight falls out the bottom.
    exited += counts.iter().sum::<u128>();

    Ok(exited.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_manifold() -> Result<()> {
        let input = "..S..
.....
..^..
.....
.^.^.";
        assert_eq!("4", process(input)?);
        Ok(())
    }

    #[test]
    fn it_works() -> Result<()> {
        let input = ".......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............";
        assert_eq!("40", process(input)?);
        Ok(())
    }
}
