use crate::hex::HexMetrics;

/// One hexagonal cell: a fixed center position and a selection flag.
#[derive(Debug, Clone)]
pub struct HexCell {
    pub center_x: f32,
    pub center_y: f32,
    pub selected: bool,
}

/// Fixed grid of hexagonal cells in a brick-like offset layout.
///
/// Cell membership and positions are computed once at construction; only
/// each cell's selection flag changes afterwards. Cells are stored in
/// row-major order and identified by index.
#[derive(Debug)]
pub struct HexGrid {
    metrics: HexMetrics,
    rows: u32,
    cols: u32,
    cells: Vec<HexCell>,
    needs_redraw: bool,
}

impl HexGrid {
    pub fn new(radius: f32, rows: u32, cols: u32) -> Self {
        let metrics = HexMetrics::new(radius);
        let mut cells = Vec::new();

        for row in 0..rows {
            // Even rows hold `cols` cells; odd rows hold one fewer, shifted
            // right by half a cell width.
            let cells_in_row = if row % 2 == 0 { cols } else { cols - 1 };
            let row_offset = if row % 2 == 0 {
                0.0
            } else {
                metrics.width() / 2.0
            };

            for col in 0..cells_in_row {
                cells.push(HexCell {
                    center_x: metrics.width() / 2.0 + col as f32 * metrics.width() + row_offset,
                    center_y: radius + row as f32 * metrics.vertical_spacing(),
                    selected: false,
                });
            }
        }

        Self {
            metrics,
            rows,
            cols,
            cells,
            // The first frame is pending until the host draws it.
            needs_redraw: true,
        }
    }

    pub fn metrics(&self) -> HexMetrics {
        self.metrics
    }

    pub fn cells(&self) -> &[HexCell] {
        &self.cells
    }

    /// First cell in layout order within hit range of the point, if any.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| self.metrics.hit(cell.center_x, cell.center_y, x, y))
    }

    /// Toggles the cell under the pointer and requests a repaint. Returns
    /// whether a cell was affected, so the host can decide default event
    /// handling.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> bool {
        match self.hit_test(x, y) {
            Some(index) => {
                self.cells[index].selected = !self.cells[index].selected;
                self.needs_redraw = true;
                true
            }
            None => false,
        }
    }

    /// Clears every selection and requests a repaint.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.selected = false;
        }
        self.needs_redraw = true;
    }

    /// Minimum content size in pixels.
    pub fn measure(&self) -> (u32, u32) {
        let min_width = self.cols as f32 * self.metrics.width() + self.metrics.width() / 2.0;
        let min_height = self.rows as f32 * self.metrics.vertical_spacing() + self.metrics.radius;
        (min_width.ceil() as u32, min_height.ceil() as u32)
    }

    /// Returns and clears the pending repaint request. State-changing
    /// operations raise it; the host polls once per event-loop turn.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADIUS: f32 = 80.0;
    const ROWS: u32 = 8;
    const COLS: u32 = 6;

    fn grid() -> HexGrid {
        HexGrid::new(RADIUS, ROWS, COLS)
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{} != {}", a, b);
    }

    #[test]
    fn layout_produces_44_cells() {
        // Four even rows of 6 and four odd rows of 5.
        assert_eq!(grid().cells().len(), 44);
    }

    #[test]
    fn even_and_odd_rows_alternate_cell_counts() {
        let grid = grid();
        for row in 0..ROWS {
            let center_y = RADIUS + row as f32 * grid.metrics().vertical_spacing();
            let count = grid
                .cells()
                .iter()
                .filter(|cell| (cell.center_y - center_y).abs() < 1e-3)
                .count();
            let expected = if row % 2 == 0 { 6 } else { 5 };
            assert_eq!(count, expected, "row {}", row);
        }
    }

    #[test]
    fn first_cell_sits_half_a_width_in() {
        let grid = grid();
        let first = &grid.cells()[0];
        assert_close(first.center_x, grid.metrics().width() / 2.0);
        assert_close(first.center_y, 80.0);
    }

    #[test]
    fn odd_rows_are_offset_half_a_width() {
        let grid = grid();
        // Row 1 starts at index 6, after the six cells of row 0.
        let cell = &grid.cells()[6];
        assert_close(cell.center_x, grid.metrics().width());
        assert_close(cell.center_y, 200.0);
    }

    #[test]
    fn relayout_is_deterministic() {
        let a = grid();
        let b = grid();
        for (left, right) in a.cells().iter().zip(b.cells()) {
            assert_eq!(left.center_x, right.center_x);
            assert_eq!(left.center_y, right.center_y);
            assert!(!left.selected);
        }
    }

    #[test]
    fn double_toggle_returns_to_unselected() {
        let mut grid = grid();
        let (x, y) = (grid.cells()[10].center_x, grid.cells()[10].center_y);
        assert!(grid.on_pointer_down(x, y));
        assert!(grid.cells()[10].selected);
        assert!(grid.on_pointer_down(x, y));
        assert!(!grid.cells()[10].selected);
    }

    #[test]
    fn center_tap_hits_exactly_that_cell() {
        let grid = grid();
        for (index, cell) in grid.cells().iter().enumerate() {
            assert_eq!(grid.hit_test(cell.center_x, cell.center_y), Some(index));
        }
    }

    #[test]
    fn far_miss_leaves_state_unchanged() {
        let mut grid = grid();
        assert!(!grid.on_pointer_down(-1000.0, -1000.0));
        assert!(grid.cells().iter().all(|cell| !cell.selected));
    }

    #[test]
    fn reset_clears_everything_and_is_idempotent() {
        let mut grid = grid();
        let centers: Vec<(f32, f32)> = grid
            .cells()
            .iter()
            .take(3)
            .map(|cell| (cell.center_x, cell.center_y))
            .collect();
        for (x, y) in centers {
            assert!(grid.on_pointer_down(x, y));
        }
        grid.reset();
        assert!(grid.cells().iter().all(|cell| !cell.selected));
        grid.reset();
        assert!(grid.cells().iter().all(|cell| !cell.selected));
    }

    #[test]
    fn measured_size_covers_the_grid() {
        assert_eq!(grid().measure(), (901, 1040));
    }

    #[test]
    fn mutations_raise_the_redraw_request() {
        let mut grid = grid();
        // Construction leaves the initial frame pending.
        assert!(grid.take_redraw_request());
        assert!(!grid.take_redraw_request());

        let (x, y) = (grid.cells()[0].center_x, grid.cells()[0].center_y);
        grid.on_pointer_down(x, y);
        assert!(grid.take_redraw_request());

        // A miss requests nothing.
        grid.on_pointer_down(-1000.0, -1000.0);
        assert!(!grid.take_redraw_request());

        grid.reset();
        assert!(grid.take_redraw_request());
    }
}
