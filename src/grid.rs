use rand::Rng;

/// A fixed size toroidal grid of cells, stored row-major.
///
/// There are no edges: the last row is adjacent to the first, and so is the last column. Only
/// neighbor counting and pattern loading wrap coordinates; [`Grid::get`] and [`Grid::set`] expect
/// them in bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,

    rows: usize,

    cols: usize,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "grid needs at least one row");
        assert!(cols > 0, "grid needs at least one column");

        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, r: usize, c: usize) -> bool {
        self.cells[self.index(r, c)]
    }

    pub fn set(&mut self, r: usize, c: usize, alive: bool) {
        let i = self.index(r, c);
        self.cells[i] = alive;
    }

    /// The cells of row `r`, left to right
    pub fn row(&self, r: usize) -> &[bool] {
        assert!(r < self.rows, "r is out of bounds");

        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Counts the live cells of the Moore neighborhood of `(r, c)`, wrapping around every edge.
    /// Every cell has exactly 8 neighbors, corners included.
    ///
    /// On grids with fewer than 3 rows or columns, the same cell can show up more than once in
    /// a neighborhood, and is counted each time.
    pub fn count_alive_neighbors(&self, r: usize, c: usize) -> u8 {
        let (rows, cols) = (self.rows, self.cols);
        let mut count = 0;

        // Offsets of `-1` are taken as `rows - 1` and `cols - 1` to stay unsigned
        for (i, dr) in [rows - 1, 0, 1].into_iter().enumerate() {
            for (j, dc) in [cols - 1, 0, 1].into_iter().enumerate() {
                if i == 1 && j == 1 {
                    continue;
                }

                let nr = (r + dr) % rows;
                let nc = (c + dc) % cols;

                count += self.get(nr, nc) as u8;
            }
        }

        count
    }

    /// Sets every cell alive independently with probability `alive_probability`, clamped to
    /// `0.0..=1.0`.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, alive_probability: f64, rng: &mut R) {
        let p = alive_probability.clamp(0.0, 1.0);

        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(p);
        }
    }

    /// Clears the grid, then sets every listed cell alive. Coordinates wrap onto the torus.
    pub fn load_pattern<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.clear();

        for (r, c) in cells {
            self.set(r % self.rows, c % self.cols, true);
        }
    }

    /// Every live cell, in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(n, _)| self.xy_to(n))
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n / self.cols, n % self.cols)
    }

    fn index(&self, r: usize, c: usize) -> usize {
        assert!(r < self.rows, "r is out of bounds");
        assert!(c < self.cols, "c is out of bounds");

        r * self.cols + c
    }
}
