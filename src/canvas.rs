//! Canvas: a grid plus the batch diff/repaint primitive.
//!
//! Every mutation funnels through [`Canvas::write_batch`]: a visitor is
//! asked for the next value of every cell in row-major order, the full
//! next frame is built, and only when at least one cell differs does the
//! canvas repaint the terminal and commit. Higher-level drawing (`draw`,
//! `text`) is built entirely on top of this primitive.

use anyhow::Result;

use crate::grid::Grid;
use crate::render::{NullPresenter, Presenter, TermPresenter};

/// Per-cell value producer for a batch pass.
///
/// `visit` is called exactly once per coordinate, in row-major order, and
/// returns the cell's next value. The grid handed in holds the pre-pass
/// values for every cell, including cells the sweep already passed.
/// Progression state (cursors, done flags) lives in the visitor itself.
pub trait CellVisitor {
    fn visit(&mut self, grid: &Grid, x: u16, y: u16) -> char;
}

/// Adapter turning a closure into a [`CellVisitor`].
pub struct VisitFn<F>(pub F);

impl<F> CellVisitor for VisitFn<F>
where
    F: FnMut(&Grid, u16, u16) -> char,
{
    fn visit(&mut self, grid: &Grid, x: u16, y: u16) -> char {
        (self.0)(grid, x, y)
    }
}

/// Fixed-size character canvas that repaints a terminal on change.
///
/// The canvas exclusively owns its cell buffer; callers hold the canvas
/// and pass references where needed. There is no shared global instance.
pub struct Canvas {
    grid: Grid,
    presenter: Box<dyn Presenter>,
    repaints: u64,
}

impl Canvas {
    pub const DEFAULT_WIDTH: u16 = 30;
    pub const DEFAULT_HEIGHT: u16 = 20;

    /// Canvas at the default 30x20 size.
    pub fn new(presenter: Box<dyn Presenter>) -> Self {
        Self::with_size(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT, presenter)
    }

    /// Canvas with explicit dimensions. Dimensions must be positive; zero
    /// is not validated.
    pub fn with_size(width: u16, height: u16, presenter: Box<dyn Presenter>) -> Self {
        Self {
            grid: Grid::new(width, height),
            presenter,
            repaints: 0,
        }
    }

    /// Canvas wired to the real terminal.
    pub fn stdout(width: u16, height: u16) -> Self {
        Self::with_size(width, height, Box::new(TermPresenter::new()))
    }

    /// Canvas that never touches a terminal.
    pub fn headless(width: u16, height: u16) -> Self {
        Self::with_size(width, height, Box::new(NullPresenter))
    }

    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Read-only view of the underlying grid and its predicates.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of terminal repaints performed so far.
    ///
    /// A mutation that changes nothing does not repaint, so this doubles
    /// as a convergence probe.
    pub fn repaints(&self) -> u64 {
        self.repaints
    }

    pub fn is_valid(&self, x: u16, y: u16) -> bool {
        self.grid.is_valid(x, y)
    }

    pub fn is_blank(&self, x: u16, y: u16) -> bool {
        self.grid.is_blank(x, y)
    }

    /// See [`Grid::value_at`]. Panics on an out-of-range coordinate.
    pub fn value_at(&self, x: u16, y: u16) -> char {
        self.grid.value_at(x, y)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.grid.get(x, y)
    }

    /// Run one batch pass: evaluate the visitor over every cell, repaint
    /// and commit only if at least one cell changed.
    ///
    /// The whole next frame is materialized before anything is committed,
    /// so the visitor always reads pre-pass values. A pass that changes
    /// nothing leaves the buffer and the terminal untouched.
    pub fn write_batch(&mut self, mut visitor: impl CellVisitor) -> Result<()> {
        let (w, h) = (self.grid.width(), self.grid.height());
        let mut next = Vec::with_capacity(self.grid.cells().len());
        let mut changed = false;

        for y in 0..h {
            for x in 0..w {
                let c = visitor.visit(&self.grid, x, y);
                changed |= c != self.grid.value_at(x, y);
                next.push(c);
            }
        }

        if !changed {
            return Ok(());
        }

        self.presenter.present(w, &next)?;
        self.repaints += 1;

        // Commit only the cells that actually changed.
        for y in 0..h {
            for x in 0..w {
                let c = next[(y as usize) * (w as usize) + (x as usize)];
                if c != self.grid.value_at(x, y) {
                    self.grid.set(x, y, c);
                }
            }
        }

        Ok(())
    }

    /// Write a single cell. No-op (no repaint) when the value is already
    /// in place.
    pub fn write(&mut self, x: u16, y: u16, c: char) -> Result<()> {
        if c == self.grid.value_at(x, y) {
            return Ok(());
        }

        self.write_batch(VisitFn(move |grid: &Grid, cx: u16, cy: u16| {
            if cx == x && cy == y {
                c
            } else {
                grid.value_at(cx, cy)
            }
        }))
    }

    /// Set every cell to `c`.
    pub fn write_all(&mut self, c: char) -> Result<()> {
        self.write_batch(VisitFn(move |_: &Grid, _: u16, _: u16| c))
    }

    /// Blank the whole canvas.
    pub fn clear(&mut self) -> Result<()> {
        self.write_all(Grid::BLANK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: u16, h: u16) -> Canvas {
        Canvas::headless(w, h)
    }

    #[test]
    fn starts_blank_and_clear_restores_blank() {
        let mut c = canvas(5, 4);
        for y in 0..4 {
            for x in 0..5 {
                assert!(c.is_blank(x, y));
            }
        }

        c.write_all('z').unwrap();
        c.clear().unwrap();
        for y in 0..4 {
            for x in 0..5 {
                assert!(c.is_blank(x, y));
            }
        }
    }

    #[test]
    fn write_round_trips_and_rewriting_is_silent() {
        let mut c = canvas(3, 3);
        c.write(1, 2, '@').unwrap();
        assert_eq!(c.value_at(1, 2), '@');
        assert_eq!(c.repaints(), 1);

        // Same value again: no repaint.
        c.write(1, 2, '@').unwrap();
        assert_eq!(c.repaints(), 1);

        c.write(1, 2, '%').unwrap();
        assert_eq!(c.value_at(1, 2), '%');
        assert_eq!(c.repaints(), 2);
    }

    #[test]
    fn unchanged_batch_pass_does_not_repaint() {
        let mut c = canvas(4, 2);
        c.write_batch(VisitFn(|grid: &Grid, x: u16, y: u16| grid.value_at(x, y)))
            .unwrap();
        assert_eq!(c.repaints(), 0);
    }

    #[test]
    fn visitor_reads_pre_pass_values_for_visited_cells() {
        let mut c = canvas(3, 1);
        c.write(0, 0, 'a').unwrap();

        // Cell (2, 0) is computed from (0, 0)'s value even though the
        // sweep rewrites (0, 0) first in the same pass.
        c.write_batch(VisitFn(|grid: &Grid, x: u16, _y: u16| match x {
            0 => 'x',
            2 => grid.value_at(0, 0),
            _ => grid.value_at(x, 0),
        }))
        .unwrap();

        assert_eq!(c.value_at(0, 0), 'x');
        assert_eq!(c.value_at(2, 0), 'a');
    }

    #[test]
    fn write_all_is_idempotent_on_repaints() {
        let mut c = canvas(4, 4);
        c.write_all('#').unwrap();
        assert_eq!(c.repaints(), 1);
        c.write_all('#').unwrap();
        assert_eq!(c.repaints(), 1);
    }

    #[test]
    fn clear_on_fresh_canvas_does_not_repaint() {
        let mut c = canvas(4, 4);
        c.clear().unwrap();
        assert_eq!(c.repaints(), 0);
    }
}
