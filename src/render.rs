use std::fmt::Write;

use crate::Generation;
use crate::grid::Grid;

/// Glyph of a live cell
pub const ALIVE: char = 'O';

/// Glyph of a dead cell
pub const DEAD: char = '.';

const BORDER_H: char = '-';
const BORDER_V: char = '|';

/// Formats grids as bordered text frames, reusing one frame buffer across calls.
///
/// A frame for a `rows x cols` grid looks like
/// ```notrust
/// GENERATION: <n>  (Press Ctrl+C to stop)
/// ---------- (cols + 2 dashes)
/// |.O..  ..|  (rows lines)
/// ----------
/// ```
#[derive(Default)]
pub struct Renderer {
    /// The frame buffer.
    fb: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, grid: &Grid, generation: Generation) -> &str {
        self.fb.clear();

        // Header, borders and one line per row, each with its newline
        let line = grid.cols() + 3;
        self.fb.reserve(64 + line * (grid.rows() + 2));

        // Writing to a `String` can't fail
        let _ = writeln!(self.fb, "GENERATION: {generation}  (Press Ctrl+C to stop)");

        self.push_border(grid.cols());

        for r in 0..grid.rows() {
            self.fb.push(BORDER_V);
            self.fb
                .extend(grid.row(r).iter().map(|&alive| if alive { ALIVE } else { DEAD }));
            self.fb.push(BORDER_V);
            self.fb.push('\n');
        }

        self.push_border(grid.cols());

        &self.fb
    }

    fn push_border(&mut self, cols: usize) {
        self.fb.extend(std::iter::repeat_n(BORDER_H, cols + 2));
        self.fb.push('\n');
    }
}

/// Render a single frame
pub fn render(grid: &Grid, generation: Generation) -> String {
    Renderer::new().render(grid, generation).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::GLIDER;

    #[test]
    fn full_two_by_two() {
        let mut grid = Grid::new(2, 2);
        grid.load_pattern([(0, 0), (0, 1), (1, 0), (1, 1)]);

        let frame = render(&grid, 0);
        let lines: Vec<_> = frame.lines().collect();

        assert_eq!(
            lines,
            [
                "GENERATION: 0  (Press Ctrl+C to stop)",
                "----",
                "|OO|",
                "|OO|",
                "----",
            ]
        );
    }

    #[test]
    fn glider_frame() {
        let mut grid = Grid::new(5, 6);
        grid.load_pattern(GLIDER.cells());

        insta::assert_snapshot!(render(&grid, 12), @r"
        GENERATION: 12  (Press Ctrl+C to stop)
        --------
        |......|
        |..O...|
        |...O..|
        |.OOO..|
        |......|
        --------
        ");
    }

    #[test]
    fn reuses_buffer() {
        let mut renderer = Renderer::new();
        let big = Grid::new(10, 10);
        let small = Grid::new(1, 1);

        renderer.render(&big, 1);
        let frame = renderer.render(&small, 2);

        assert_eq!(frame, "GENERATION: 2  (Press Ctrl+C to stop)\n---\n|.|\n---\n");
    }

    #[test]
    fn render_leaves_grid_untouched() {
        let mut grid = Grid::new(4, 4);
        grid.load_pattern(GLIDER.cells());
        let before = grid.clone();

        render(&grid, 3);
        assert_eq!(grid, before);
    }
}
