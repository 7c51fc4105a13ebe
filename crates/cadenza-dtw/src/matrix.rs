//! Accumulated-distance matrix for one alignment run.

/// Dense `(frames_x + 1) x (frames_y + 1)` accumulated-distance matrix,
/// stored as a flat row-major vector.
///
/// Cell `(0, 0)` is zero; the rest of row 0 and column 0 are `+INF`, which
/// forces every monotone path to start at the origin. Interior cells start
/// at zero and are overwritten by the forward fill. Owned exclusively by one
/// alignment run and dropped when it returns.
#[derive(Debug)]
pub(crate) struct AccMatrix {
    frames_x: usize,
    frames_y: usize,
    cells: Vec<f64>,
}

impl AccMatrix {
    /// Allocate and initialize the matrix for `frames_x` by `frames_y`
    /// signals. Callers must have passed the memory guard first.
    pub(crate) fn new(frames_x: usize, frames_y: usize) -> Self {
        let cols = frames_y + 1;
        let mut cells = vec![0.0; (frames_x + 1) * cols];
        for x in 1..=frames_x {
            cells[x * cols] = f64::INFINITY;
        }
        for y in 1..=frames_y {
            cells[y] = f64::INFINITY;
        }
        Self { frames_x, frames_y, cells }
    }

    pub(crate) fn frames_x(&self) -> usize {
        self.frames_x
    }

    pub(crate) fn frames_y(&self) -> usize {
        self.frames_y
    }

    /// Return the accumulated cost at `(x, y)`.
    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> f64 {
        self.cells[x * (self.frames_y + 1) + y]
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, value: f64) {
        self.cells[x * (self.frames_y + 1) + y] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_zero() {
        let m = AccMatrix::new(3, 2);
        assert_eq!(m.get(0, 0), 0.0);
    }

    #[test]
    fn boundary_row_and_column_are_infinite() {
        let m = AccMatrix::new(3, 2);
        for x in 1..=3 {
            assert_eq!(m.get(x, 0), f64::INFINITY, "column 0, row {x}");
        }
        for y in 1..=2 {
            assert_eq!(m.get(0, y), f64::INFINITY, "row 0, column {y}");
        }
    }

    #[test]
    fn interior_starts_at_zero() {
        let m = AccMatrix::new(3, 2);
        for x in 1..=3 {
            for y in 1..=2 {
                assert_eq!(m.get(x, y), 0.0, "interior cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut m = AccMatrix::new(2, 2);
        m.set(1, 2, 7.5);
        assert_eq!(m.get(1, 2), 7.5);
        assert_eq!(m.get(2, 1), 0.0);
    }

    #[test]
    fn dimensions_reported() {
        let m = AccMatrix::new(5, 3);
        assert_eq!(m.frames_x(), 5);
        assert_eq!(m.frames_y(), 3);
    }
}
