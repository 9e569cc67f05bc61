use std::ops::{Index, IndexMut};

use miette::{bail, Result};

/// A dense row-major 2D array parsed from character rows.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Parses a rectangular block of characters, converting each cell with
    /// `convert`. Fails on empty or ragged input.
    pub fn parse(input: &str, mut convert: impl FnMut(char) -> Result<T>) -> Result<Self> {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for line in input.lines().map(|l| l.trim_end_matches('\r')) {
            if line.is_empty() {
                continue;
            }
            if width == 0 {
                width = line.chars().count();
            } else if line.chars().count() != width {
                bail!("ragged grid: expected {} columns, got line {:?}", width, line);
            }
            for c in line.chars() {
                cells.push(convert(c)?);
            }
            height += 1;
        }

        if width == 0 || height == 0 {
            bail!("empty grid");
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at (x, y), or `None` when out of bounds. Signed
    /// coordinates so callers can probe neighbor offsets directly.
    pub fn get(&self, x: isize, y: isize) -> Option<&T> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(&self.cells[y as usize * self.width + x as usize])
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        &self.cells[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        &mut self.cells[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(input: &str) -> Result<Grid<u32>> {
        Grid::parse(input, |c| {
            c.to_digit(10)
                .ok_or_else(|| miette::miette!("not a digit: {c:?}"))
        })
    }

    #[test]
    fn parses_rectangular_input() -> Result<()> {
        let grid = digits("123\n456\n")?;
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid[(2, 1)], 6);
        Ok(())
    }

    #[test]
    fn get_handles_out_of_bounds() -> Result<()> {
        let grid = digits("12\n34")?;
        assert_eq!(grid.get(1, 1), Some(&4));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, 2), None);
        Ok(())
    }

    #[test]
    fn rejects_ragged_input() {
        assert!(digits("123\n45").is_err());
        assert!(digits("").is_err());
    }
}
