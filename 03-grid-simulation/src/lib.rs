// Toroidal grid for Conway's Game of Life.
//
// Coordinates wrap modulo the grid dimensions, so any (row, col) pair is
// valid, including negatives. That makes the fixed-size grid behave like an
// infinite looping space and leaves the stepper with no error conditions.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    Alive,
    #[default]
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Alive => write!(f, "*"),
            Cell::Empty => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    // Dimensions are fixed for the lifetime of the grid
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "grid dimensions must be non-zero");
        Grid {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    // rem_euclid keeps negative coordinates wrapping the same way Python's
    // modulo does, so (-1, -1) is the bottom-right corner
    fn index(&self, row: isize, col: isize) -> usize {
        let row = row.rem_euclid(self.height as isize) as usize;
        let col = col.rem_euclid(self.width as isize) as usize;
        row * self.width + col
    }

    pub fn get(&self, row: isize, col: isize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: isize, col: isize, cell: Cell) {
        let index = self.index(row, col);
        self.cells[index] = cell;
    }

    // Live cells among the eight wrapped neighbors
    pub fn count_neighbors(&self, row: isize, col: isize) -> usize {
        const OFFSETS: [(isize, isize); 8] = [
            (-1, 0),  // north
            (-1, 1),  // northeast
            (0, 1),   // east
            (1, 1),   // southeast
            (1, 0),   // south
            (1, -1),  // southwest
            (0, -1),  // west
            (-1, -1), // northwest
        ];

        OFFSETS
            .iter()
            .filter(|(dr, dc)| self.get(row + dr, col + dc) == Cell::Alive)
            .count()
    }

    /// Produce the next generation. The current grid is only read during the
    /// pass; results go into a freshly allocated grid, so a cell's update
    /// never sees a neighbor that has already stepped.
    pub fn advance(&self) -> Grid {
        let mut next = Grid::new(self.height, self.width);

        for row in 0..self.height as isize {
            for col in 0..self.width as isize {
                let neighbors = self.count_neighbors(row, col);
                next.set(row, col, next_cell(self.get(row, col), neighbors));
            }
        }
        next
    }

    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .filter(|&(row, col)| self.get(row as isize, col as isize) == Cell::Alive)
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "{}", self.get(row as isize, col as isize))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The rule table: die below two or above three live neighbors, regenerate
/// an empty cell on exactly three, otherwise carry the state over.
pub fn next_cell(cell: Cell, neighbors: usize) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 0 | 1) => Cell::Empty, // too few
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Alive, _) => Cell::Empty, // too many
        (Cell::Empty, 3) => Cell::Alive, // regenerate
        (Cell::Empty, _) => Cell::Empty,
    }
}

/// The classic glider, used by the demo and the tests: five live cells that
/// translate one cell diagonally every two generations.
pub fn seed_glider(grid: &mut Grid) {
    grid.set(0, 3, Cell::Alive);
    grid.set(1, 4, Cell::Alive);
    grid.set(2, 2, Cell::Alive);
    grid.set(2, 3, Cell::Alive);
    grid.set(2, 4, Cell::Alive);
}

#[cfg(test)]
mod tests {
    use super::*;

    mod rule_table {
        use super::*;

        #[test]
        fn live_cell_dies_of_isolation() {
            assert_eq!(next_cell(Cell::Alive, 0), Cell::Empty);
            assert_eq!(next_cell(Cell::Alive, 1), Cell::Empty);
        }

        #[test]
        fn live_cell_survives_with_two_or_three() {
            assert_eq!(next_cell(Cell::Alive, 2), Cell::Alive);
            assert_eq!(next_cell(Cell::Alive, 3), Cell::Alive);
        }

        #[test]
        fn live_cell_dies_of_overcrowding() {
            for neighbors in 4..=8 {
                assert_eq!(next_cell(Cell::Alive, neighbors), Cell::Empty);
            }
        }

        #[test]
        fn empty_cell_regenerates_on_exactly_three() {
            assert_eq!(next_cell(Cell::Empty, 3), Cell::Alive);
        }

        #[test]
        fn empty_cell_otherwise_stays_empty() {
            for neighbors in [0, 1, 2, 4, 5, 6, 7, 8] {
                assert_eq!(next_cell(Cell::Empty, neighbors), Cell::Empty);
            }
        }
    }

    mod wraparound {
        use super::*;

        #[test]
        fn negative_coordinates_wrap_to_far_edge() {
            let mut grid = Grid::new(5, 9);
            grid.set(4, 8, Cell::Alive);

            assert_eq!(grid.get(-1, -1), Cell::Alive);
        }

        #[test]
        fn coordinates_past_the_edge_wrap_to_zero() {
            let mut grid = Grid::new(5, 9);
            grid.set(0, 0, Cell::Alive);

            assert_eq!(grid.get(5, 9), Cell::Alive);
            assert_eq!(grid.get(10, 18), Cell::Alive);
        }

        #[test]
        fn set_through_wrapped_coordinates() {
            let mut grid = Grid::new(5, 9);
            grid.set(-1, -1, Cell::Alive);

            assert_eq!(grid.get(4, 8), Cell::Alive);
        }

        #[test]
        fn neighbor_count_crosses_edges() {
            // Corner cell with neighbors on the three other corners
            let mut grid = Grid::new(5, 9);
            grid.set(0, 8, Cell::Alive);
            grid.set(4, 0, Cell::Alive);
            grid.set(4, 8, Cell::Alive);

            assert_eq!(grid.count_neighbors(0, 0), 3);
        }
    }

    mod stepping {
        use super::*;

        fn live_set(grid: &Grid) -> Vec<(usize, usize)> {
            grid.live_cells()
        }

        #[test]
        fn glider_first_generation_matches_known_shape() {
            let mut grid = Grid::new(5, 9);
            seed_glider(&mut grid);

            let next = grid.advance();
            assert_eq!(
                next.to_string(),
                "---------\n\
                 --*-*----\n\
                 ---**----\n\
                 ---*-----\n\
                 ---------\n"
            );
        }

        #[test]
        fn glider_translates_diagonally_every_two_generations() {
            let mut grid = Grid::new(5, 9);
            seed_glider(&mut grid);
            let seed = live_set(&grid);

            let mut current = grid;
            for _ in 0..4 {
                current = current.advance();
            }

            // One cell down and one right per two generations
            let expected: Vec<(usize, usize)> =
                seed.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
            let mut moved = live_set(&current);
            moved.sort_unstable();
            let mut expected = expected;
            expected.sort_unstable();
            assert_eq!(moved, expected);
        }

        #[test]
        fn blinker_oscillates_across_the_wrapped_edge() {
            // Horizontal triple spanning the right/left seam of row 0
            let mut grid = Grid::new(5, 9);
            grid.set(0, 8, Cell::Alive);
            grid.set(0, 0, Cell::Alive);
            grid.set(0, 1, Cell::Alive);

            let next = grid.advance();
            let mut live = live_set(&next);
            live.sort_unstable();
            assert_eq!(live, vec![(0, 0), (1, 0), (4, 0)]);

            // And back again
            assert_eq!(next.advance(), grid);
        }

        #[test]
        fn empty_grid_stays_empty() {
            let grid = Grid::new(5, 9);
            assert_eq!(grid.advance(), grid);
        }

        #[test]
        fn advance_leaves_the_source_grid_untouched() {
            let mut grid = Grid::new(5, 9);
            seed_glider(&mut grid);
            let before = grid.clone();

            let _ = grid.advance();
            assert_eq!(grid, before);
        }
    }
}
