//! Generic rectangular grid of typed cells.
//!
//! The rendering pipeline keeps several per-pixel buffers (depth, normal,
//! material, color) that share nothing but their addressing scheme. `Grid<T>`
//! gives all of them the same row-major storage with signed coordinates, so
//! rasterized pixels slightly outside the target can be tested cheaply.

/// A width x height grid of `T` cells, addressed by `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `fill`.
    ///
    /// # Panics
    /// Panics if either dimension is negative.
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        assert!(width >= 0 && height >= 0, "grid dimensions must be >= 0");
        Self {
            width,
            height,
            cells: vec![fill; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// True if `(x, y)` addresses a cell.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Returns the cell at `(x, y)`, or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        if self.contains(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// In-bounds cell access for loops that already iterate the grid's own
    /// dimensions.
    ///
    /// # Panics
    /// Panics out of bounds.
    #[inline]
    pub fn at(&self, x: i32, y: i32) -> &T {
        assert!(self.contains(x, y), "grid access out of bounds");
        &self.cells[self.index(x, y)]
    }

    /// Mutable counterpart of [`Grid::at`].
    #[inline]
    pub fn at_mut(&mut self, x: i32, y: i32) -> &mut T {
        assert!(self.contains(x, y), "grid access out of bounds");
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    /// Writes `value` at `(x, y)`; out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if self.contains(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = value;
        }
    }

    /// Overwrites every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_construction() {
        let g = Grid::new(3, 2, 7u8);
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(*g.at(x, y), 7);
            }
        }
    }

    #[test]
    fn test_independent_cells() {
        let mut g = Grid::new(2, 2, 0i32);
        g.set(1, 0, 5);
        assert_eq!(*g.at(1, 0), 5);
        assert_eq!(*g.at(0, 0), 0);
        assert_eq!(*g.at(0, 1), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut g = Grid::new(2, 2, 0i32);
        assert!(g.get(-1, 0).is_none());
        assert!(g.get(0, 2).is_none());
        g.set(5, 5, 9); // silently dropped
        assert_eq!(*g.at(1, 1), 0);
    }

    #[test]
    fn test_refill() {
        let mut g = Grid::new(2, 1, 1u32);
        g.set(0, 0, 3);
        g.fill(2);
        assert_eq!(*g.at(0, 0), 2);
        assert_eq!(*g.at(1, 0), 2);
    }
}
