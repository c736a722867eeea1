use fxhash::FxHashMap;
use tracing::debug;

use super::PuzzleError;
use crate::{
    big_decimal::BigDecimal,
    parser_combinators::{complete, decimal, separated_pair, tag},
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Tile {
    x: BigDecimal,
    y: BigDecimal,
}

/// Tiles with the index of the line they came from.
fn parse(lines: &[&str]) -> Result<Vec<(usize, Tile)>, PuzzleError> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, &line)| {
            let (x, y) = complete(separated_pair(decimal, tag(","), decimal), i, line)?;
            Ok((i, Tile { x, y }))
        })
        .collect()
}

/// Tiles count both corners, so a single tile has area 1.
fn area(a: &Tile, b: &Tile) -> BigDecimal {
    let width = a.x.abs_diff(&b.x).increment();
    let height = a.y.abs_diff(&b.y).increment();
    width.multiply(&height)
}

fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i..n).map(move |j| (i, j)))
}

/// Maps coordinates onto a dense range of cells. Every coordinate gets a
/// cell of its own, a gap between two coordinates gets one shared cell, and
/// there is an extra cell before the first and after the last coordinate.
struct Axis {
    cells: FxHashMap<BigDecimal, usize>,
    len: usize,
}

impl Axis {
    fn new<'t>(values: impl Iterator<Item = &'t BigDecimal>) -> Self {
        let mut values = values.collect::<Vec<_>>();
        values.sort();
        values.dedup();

        let mut cells = FxHashMap::default();
        let mut len = 1;

        for (k, &value) in values.iter().enumerate() {
            cells.insert(value.clone(), len);
            len += 1;

            if let Some(next) = values.get(k + 1) {
                if value.increment().is_less(next) {
                    len += 1;
                }
            }
        }

        Axis { cells, len: len + 1 }
    }

    fn cell(&self, value: &BigDecimal) -> usize {
        self.cells[value]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Open,
    Edge,
    Outside,
}

/// The compressed floor with the loop drawn in and the outside flooded.
struct Floor {
    xs: Axis,
    ys: Axis,
    /// `outside[y][x]` counts outside cells above and left of `(y, x)`.
    outside: Vec<Vec<usize>>,
}

impl Floor {
    fn new(lines: &[&str], tiles: &[(usize, Tile)]) -> Result<Self, PuzzleError> {
        let xs = Axis::new(tiles.iter().map(|(_, tile)| &tile.x));
        let ys = Axis::new(tiles.iter().map(|(_, tile)| &tile.y));
        let mut grid = vec![vec![Cell::Open; xs.len]; ys.len];

        // consecutive tiles, wrapping around, are joined by straight edges
        for (k, (line, a)) in tiles.iter().enumerate() {
            let (_, b) = &tiles[(k + 1) % tiles.len()];
            let (ax, ay, bx, by) = (xs.cell(&a.x), ys.cell(&a.y), xs.cell(&b.x), ys.cell(&b.y));

            if ax == bx {
                for row in &mut grid[ay.min(by)..=ay.max(by)] {
                    row[ax] = Cell::Edge;
                }
            } else if ay == by {
                for cell in &mut grid[ay][ax.min(bx)..=ax.max(bx)] {
                    *cell = Cell::Edge;
                }
            } else {
                return Err(PuzzleError::malformed(
                    *line,
                    lines[*line],
                    "the next tile is not in the same row or column",
                ));
            }
        }

        Self::flood_outside(&mut grid);
        debug!(width = xs.len, height = ys.len, "floor compressed");

        let mut outside = vec![vec![0; xs.len + 1]; ys.len + 1];
        for (y, row) in grid.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                outside[y + 1][x + 1] = outside[y][x + 1] + outside[y + 1][x]
                    + usize::from(cell == Cell::Outside)
                    - outside[y][x];
            }
        }

        Ok(Floor { xs, ys, outside })
    }

    /// The padding cell at the origin is always outside the loop.
    fn flood_outside(grid: &mut [Vec<Cell>]) {
        grid[0][0] = Cell::Outside;
        let mut stack = vec![(0usize, 0usize)];

        while let Some((y, x)) = stack.pop() {
            for (dy, dx) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let (Some(ny), Some(nx)) = (y.checked_add_signed(dy), x.checked_add_signed(dx))
                else {
                    continue;
                };

                if let Some(cell) = grid.get_mut(ny).and_then(|row| row.get_mut(nx)) {
                    if *cell == Cell::Open {
                        *cell = Cell::Outside;
                        stack.push((ny, nx));
                    }
                }
            }
        }
    }

    fn is_inside(&self, a: &Tile, b: &Tile) -> bool {
        let (x1, x2) = (self.xs.cell(&a.x), self.xs.cell(&b.x));
        let (y1, y2) = (self.ys.cell(&a.y), self.ys.cell(&b.y));
        let (left, right) = (x1.min(x2), x1.max(x2) + 1);
        let (top, bottom) = (y1.min(y2), y1.max(y2) + 1);

        let p = &self.outside;
        p[bottom][right] + p[top][left] - p[top][right] - p[bottom][left] == 0
    }
}

fn largest(
    tiles: &[(usize, Tile)],
    mut allowed: impl FnMut(&Tile, &Tile) -> bool,
) -> Result<BigDecimal, PuzzleError> {
    pairs(tiles.len())
        .map(|(i, j)| (&tiles[i].1, &tiles[j].1))
        .filter(|&(a, b)| allowed(a, b))
        .map(|(a, b)| area(a, b))
        .max()
        .ok_or(PuzzleError::NoSolution("no red tiles"))
}

pub fn solve(lines: &[&str]) -> Result<BigDecimal, PuzzleError> {
    let tiles = parse(lines)?;

    largest(&tiles, |_, _| true)
}

pub fn bonus(lines: &[&str]) -> Result<BigDecimal, PuzzleError> {
    let tiles = parse(lines)?;
    if tiles.is_empty() {
        return Err(PuzzleError::NoSolution("no red tiles"));
    }

    let floor = Floor::new(lines, &tiles)?;

    largest(&tiles, |a, b| floor.is_inside(a, b))
}
