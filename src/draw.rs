//! Shape drawing: border outline, rectangles, lines.
//!
//! Every operation is a single batch pass over the canvas; the shape
//! membership tests lean on the grid's coordinate predicates.

use anyhow::Result;

use crate::canvas::{Canvas, CellVisitor, VisitFn};
use crate::grid::Grid;

/// Paints a pre-generated point sequence during a batch pass.
///
/// Points are consumed in generation order and matched against the
/// row-major cell sweep, so the sequence must itself be ordered the way
/// the sweep visits cells. The rasterizer below produces such sequences
/// for its supported slope range.
struct LineStroke {
    ch: char,
    points: Vec<(i32, i32)>,
    next: usize,
    done: bool,
}

impl CellVisitor for LineStroke {
    fn visit(&mut self, grid: &Grid, x: u16, y: u16) -> char {
        let old = grid.value_at(x, y);
        if self.done || self.points[self.next] != (i32::from(x), i32::from(y)) {
            return old;
        }

        self.next += 1;
        if self.next >= self.points.len() {
            self.done = true;
        }
        self.ch
    }
}

/// Generate the points of a line with an incremental slope-error walk.
///
/// Precondition: `x1 <= x2` and the slope lies in [0, 1]. x always steps
/// by one and y by zero or one per column; other octants are out of the
/// supported range and produce a sequence that will not match the sweep.
fn points_on_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();

    let m = 2 * (y2 - y1);
    let mut slope_error = m - (x2 - x1);

    let mut y = y1;
    let mut x = x1;
    while x <= x2 {
        points.push((x, y));

        slope_error += m;
        if slope_error >= 0 {
            y += 1;
            slope_error -= 2 * (x2 - x1);
        }
        x += 1;
    }

    points
}

impl Canvas {
    /// Draw the canvas border: `corner` on the four corners, `h` along the
    /// top and bottom rows, `v` along the left and right columns.
    pub fn outline(&mut self, corner: char, h: char, v: char) -> Result<()> {
        self.write_batch(VisitFn(move |grid: &Grid, x: u16, y: u16| {
            if grid.is_corner(x, y) {
                corner
            } else if grid.is_horizontal_border(x, y) {
                h
            } else if grid.is_vertical_border(x, y) {
                v
            } else {
                grid.value_at(x, y)
            }
        }))
    }

    /// Draw an axis-aligned rectangle spanned by two corners, given in
    /// either order. Filled paints the whole span, unfilled only the
    /// perimeter. Coincident corners paint a single cell.
    pub fn rect(&mut self, c: char, x1: u16, y1: u16, x2: u16, y2: u16, fill: bool) -> Result<()> {
        self.write_batch(VisitFn(move |grid: &Grid, x: u16, y: u16| {
            let in_x = (x >= x1 && x <= x2) || (x >= x2 && x <= x1);
            let in_y = (y >= y1 && y <= y2) || (y >= y2 && y <= y1);

            let hit = if fill {
                in_x && in_y
            } else {
                ((x == x1 || x == x2) && in_y) || ((y == y1 || y == y2) && in_x)
            };

            if hit {
                c
            } else {
                grid.value_at(x, y)
            }
        }))
    }

    /// Rasterize and paint a line from (x1, y1) to (x2, y2).
    ///
    /// Precondition (deliberately not corrected): `x1 <= x2` and slope in
    /// [0, 1]. Outside that range the point sequence falls out of sweep
    /// order and cells are silently skipped. Points landing off-canvas are
    /// clipped. A zero-length line paints one cell.
    pub fn line(&mut self, c: char, x1: u16, y1: u16, x2: u16, y2: u16) -> Result<()> {
        let points = points_on_line(
            i32::from(x1),
            i32::from(y1),
            i32::from(x2),
            i32::from(y2),
        );

        if points.is_empty() {
            return Ok(());
        }

        self.write_batch(LineStroke {
            ch: c,
            points,
            next: 0,
            done: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_line_stays_on_one_row() {
        let pts = points_on_line(1, 5, 6, 5);
        assert_eq!(
            pts,
            vec![(1, 5), (2, 5), (3, 5), (4, 5), (5, 5), (6, 5)]
        );
    }

    #[test]
    fn unit_slope_line_steps_down_every_column() {
        let pts = points_on_line(0, 0, 3, 3);
        assert_eq!(pts.len(), 4);
        for (i, &(x, y)) in pts.iter().enumerate() {
            assert_eq!((x, y), (i as i32, i as i32));
        }
    }

    #[test]
    fn shallow_line_never_skips_a_column_or_a_row() {
        let pts = points_on_line(0, 0, 9, 4);
        assert_eq!(pts.len(), 10);
        for pair in pts.windows(2) {
            assert_eq!(pair[1].0, pair[0].0 + 1);
            let dy = pair[1].1 - pair[0].1;
            assert!(dy == 0 || dy == 1);
        }
        assert_eq!(pts.last(), Some(&(9, 4)));
    }

    #[test]
    fn zero_length_line_is_a_single_point() {
        assert_eq!(points_on_line(4, 2, 4, 2), vec![(4, 2)]);
    }

    #[test]
    fn line_paints_exactly_its_points() {
        let mut c = Canvas::headless(10, 6);
        c.line('*', 1, 2, 8, 2).unwrap();
        for x in 1..=8 {
            assert_eq!(c.value_at(x, 2), '*');
        }
        assert!(c.is_blank(0, 2));
        assert!(c.is_blank(9, 2));
        assert!(c.is_blank(4, 1));
        assert!(c.is_blank(4, 3));
    }

    #[test]
    fn diagonal_line_off_canvas_tail_is_clipped() {
        let mut c = Canvas::headless(6, 4);
        // Slope 1 from (2, 2): points (4, 4) and (5, 5) fall below the
        // canvas and are dropped.
        c.line('*', 2, 2, 5, 5).unwrap();
        assert_eq!(c.value_at(2, 2), '*');
        assert_eq!(c.value_at(3, 3), '*');
        let painted: usize = c
            .grid()
            .cells()
            .iter()
            .filter(|&&ch| ch == '*')
            .count();
        assert_eq!(painted, 2);
    }

    #[test]
    fn unfilled_rect_paints_perimeter_only() {
        let mut c = Canvas::headless(10, 14);
        c.rect('x', 1, 10, 5, 12, false).unwrap();

        for x in 1..=5 {
            assert_eq!(c.value_at(x, 10), 'x');
            assert_eq!(c.value_at(x, 12), 'x');
        }
        for y in 10..=12 {
            assert_eq!(c.value_at(1, y), 'x');
            assert_eq!(c.value_at(5, y), 'x');
        }
        assert!(c.is_blank(3, 11));
    }

    #[test]
    fn filled_rect_paints_the_whole_span() {
        let mut c = Canvas::headless(12, 15);
        c.rect('#', 7, 12, 10, 13, true).unwrap();
        for y in 12..=13 {
            for x in 7..=10 {
                assert_eq!(c.value_at(x, y), '#');
            }
        }
        assert!(c.is_blank(6, 12));
        assert!(c.is_blank(11, 13));
    }

    #[test]
    fn rect_accepts_corners_in_either_order() {
        let mut a = Canvas::headless(8, 8);
        let mut b = Canvas::headless(8, 8);
        a.rect('o', 2, 2, 5, 6, true).unwrap();
        b.rect('o', 5, 6, 2, 2, true).unwrap();
        assert_eq!(a.grid().cells(), b.grid().cells());
    }

    #[test]
    fn degenerate_rect_is_a_single_cell() {
        let mut c = Canvas::headless(5, 5);
        c.rect('!', 2, 3, 2, 3, false).unwrap();
        assert_eq!(c.value_at(2, 3), '!');
        let painted: usize = c
            .grid()
            .cells()
            .iter()
            .filter(|&&ch| ch == '!')
            .count();
        assert_eq!(painted, 1);
    }

    #[test]
    fn outline_marks_corners_edges_and_leaves_interior() {
        let mut c = Canvas::headless(6, 4);
        c.write(2, 2, 'i').unwrap();
        c.outline('+', '-', '|').unwrap();

        assert_eq!(c.value_at(0, 0), '+');
        assert_eq!(c.value_at(5, 0), '+');
        assert_eq!(c.value_at(0, 3), '+');
        assert_eq!(c.value_at(5, 3), '+');
        for x in 1..5 {
            assert_eq!(c.value_at(x, 0), '-');
            assert_eq!(c.value_at(x, 3), '-');
        }
        for y in 1..3 {
            assert_eq!(c.value_at(0, y), '|');
            assert_eq!(c.value_at(5, y), '|');
        }
        assert_eq!(c.value_at(2, 2), 'i');
    }

    #[test]
    fn drawing_twice_converges_without_a_second_repaint() {
        let mut c = Canvas::headless(8, 8);
        c.rect('r', 1, 1, 6, 6, false).unwrap();
        let frame = c.grid().cells().to_vec();
        let repaints = c.repaints();

        c.rect('r', 1, 1, 6, 6, false).unwrap();
        assert_eq!(c.grid().cells(), &frame[..]);
        assert_eq!(c.repaints(), repaints);
    }
}
