//! Flat character grid and coordinate classification.
//!
//! The grid is a fixed-size rectangle of `char` cells backed by a flat
//! `Vec` in row-major order (y * WIDTH + x), the same layout the terminal
//! prints in. Coordinates: (x, y) with x growing right and y growing down;
//! (0, 0) is the top-left cell.

/// Fixed-size 2D character buffer with flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Grid {
    /// The character an "empty" cell holds. Blankness drives text
    /// placement and clearing.
    pub const BLANK: char = ' ';

    /// Create a grid with every cell blank.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Self::BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Flat cell slice in row-major order.
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Calculate the flat index for (x, y), or `None` when out of bounds.
    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn is_valid(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Checked read. Returns `None` when out of bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Read the cell at (x, y).
    ///
    /// Panics on an out-of-range coordinate; callers pre-validate with
    /// [`Grid::is_valid`] or use [`Grid::get`].
    pub fn value_at(&self, x: u16, y: u16) -> char {
        assert!(self.is_valid(x, y), "coordinate ({x}, {y}) out of range");
        self.cells[(y as usize) * (self.width as usize) + (x as usize)]
    }

    pub fn is_blank(&self, x: u16, y: u16) -> bool {
        self.value_at(x, y) == Self::BLANK
    }

    pub(crate) fn set(&mut self, x: u16, y: u16, c: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = c;
        }
    }

    pub fn is_top_border(&self, _x: u16, y: u16) -> bool {
        y == 0
    }

    pub fn is_bottom_border(&self, _x: u16, y: u16) -> bool {
        y == self.height - 1
    }

    pub fn is_horizontal_border(&self, x: u16, y: u16) -> bool {
        self.is_top_border(x, y) || self.is_bottom_border(x, y)
    }

    pub fn is_left_border(&self, x: u16, _y: u16) -> bool {
        x == 0
    }

    pub fn is_right_border(&self, x: u16, _y: u16) -> bool {
        x == self.width - 1
    }

    pub fn is_vertical_border(&self, x: u16, y: u16) -> bool {
        self.is_left_border(x, y) || self.is_right_border(x, y)
    }

    pub fn is_border(&self, x: u16, y: u16) -> bool {
        self.is_horizontal_border(x, y) || self.is_vertical_border(x, y)
    }

    pub fn is_top_left_corner(&self, x: u16, y: u16) -> bool {
        self.is_top_border(x, y) && self.is_left_border(x, y)
    }

    pub fn is_top_right_corner(&self, x: u16, y: u16) -> bool {
        self.is_top_border(x, y) && self.is_right_border(x, y)
    }

    pub fn is_bottom_left_corner(&self, x: u16, y: u16) -> bool {
        self.is_bottom_border(x, y) && self.is_left_border(x, y)
    }

    pub fn is_bottom_right_corner(&self, x: u16, y: u16) -> bool {
        self.is_bottom_border(x, y) && self.is_right_border(x, y)
    }

    pub fn is_corner(&self, x: u16, y: u16) -> bool {
        self.is_top_left_corner(x, y)
            || self.is_top_right_corner(x, y)
            || self.is_bottom_left_corner(x, y)
            || self.is_bottom_right_corner(x, y)
    }

    /// Strict row-major order: (x1, y1) comes before (x2, y2) in the order
    /// cells are swept and printed.
    pub fn is_before(&self, x1: u16, y1: u16, x2: u16, y2: u16) -> bool {
        y1 < y2 || (y1 == y2 && x1 < x2)
    }

    /// Count the consecutive blank cells starting at (x, y), walking the
    /// flat buffer index.
    ///
    /// The walk follows storage order, so a run that reaches the end of a
    /// row continues into the start of the next one. Word layout depends on
    /// this exact behavior; see `text`.
    pub(crate) fn blank_run(&self, x: u16, y: u16) -> usize {
        let Some(start) = self.idx(x, y) else {
            return 0;
        };
        self.cells[start..]
            .iter()
            .take_while(|&&c| c == Self::BLANK)
            .count()
    }
}
