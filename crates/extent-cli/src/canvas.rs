// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! A character-grid drawing surface for terminal output.

use extent_core::{
    draw::DrawingSurface,
    math::{interval::Interval1D, rect::Interval2D},
};

const EMPTY: char = ' ';
const EDGE: char = '#';
const DOT: char = '.';

/// A fixed-size grid of characters covering a rectangular viewport.
///
/// Rectangles are drawn as outlines, points as dots. Anything outside the
/// viewport is clipped.
#[derive(Debug, Clone)]
pub struct CharCanvas {
    width: usize,
    height: usize,
    viewport: Interval2D,
    cells: Vec<char>,
}

impl CharCanvas {
    /// Creates a blank canvas of `width × height` cells showing `viewport`.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is smaller than 2.
    pub fn new(width: usize, height: usize, viewport: Interval2D) -> Self {
        assert!(
            width >= 2 && height >= 2,
            "CharCanvas needs at least 2x2 cells, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            viewport,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the character at `(col, row)`, row 0 being the top line.
    #[cfg(test)]
    pub fn cell(&self, col: usize, row: usize) -> char {
        self.cells[row * self.width + col]
    }

    /// Maps `value` on `axis` to a cell index in `0..cells`.
    fn to_cell(value: f64, axis: &Interval1D, cells: usize) -> usize {
        if axis.length() == 0.0 {
            return 0;
        }
        let t = (value - axis.min()) / axis.length();
        let idx = (t * (cells - 1) as f64).round();
        idx.clamp(0.0, (cells - 1) as f64) as usize
    }

    fn column(&self, x: f64) -> usize {
        Self::to_cell(x, &self.viewport.x(), self.width)
    }

    fn row(&self, y: f64) -> usize {
        // y grows upwards, rows grow downwards.
        self.height - 1 - Self::to_cell(y, &self.viewport.y(), self.height)
    }

    fn set(&mut self, col: usize, row: usize, c: char) {
        let cell = &mut self.cells[row * self.width + col];
        if *cell != EDGE {
            *cell = c;
        }
    }

    /// Renders the grid, one line per row, with trailing blanks trimmed.
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DrawingSurface<f64> for CharCanvas {
    fn rectangle(&mut self, center_x: f64, center_y: f64, half_width: f64, half_height: f64) {
        let (x0, x1) = (center_x - half_width, center_x + half_width);
        let (y0, y1) = (center_y - half_height, center_y + half_height);
        let vx = self.viewport.x();
        let vy = self.viewport.y();
        if x1 < vx.min() || x0 > vx.max() || y1 < vy.min() || y0 > vy.max() {
            return;
        }

        let (left, right) = (self.column(x0), self.column(x1));
        let (top, bottom) = (self.row(y1), self.row(y0));
        // Edges outside the viewport are clipped, not pulled onto its border.
        if vy.contains(y1) {
            for col in left..=right {
                self.cells[top * self.width + col] = EDGE;
            }
        }
        if vy.contains(y0) {
            for col in left..=right {
                self.cells[bottom * self.width + col] = EDGE;
            }
        }
        if vx.contains(x0) {
            for row in top..=bottom {
                self.cells[row * self.width + left] = EDGE;
            }
        }
        if vx.contains(x1) {
            for row in top..=bottom {
                self.cells[row * self.width + right] = EDGE;
            }
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        if !self.viewport.x().contains(x) || !self.viewport.y().contains(y) {
            return;
        }
        let (col, row) = (self.column(x), self.row(y));
        self.set(col, row, DOT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extent_core::math::rect::Point2D;

    fn unit() -> Interval2D {
        let u = Interval1D::new(0.0, 1.0).unwrap();
        Interval2D::new(u, u)
    }

    fn rect(x: (f64, f64), y: (f64, f64)) -> Interval2D {
        Interval2D::new(
            Interval1D::new(x.0, x.1).unwrap(),
            Interval1D::new(y.0, y.1).unwrap(),
        )
    }

    #[test]
    fn test_blank_canvas_renders_empty_lines() {
        let canvas = CharCanvas::new(4, 3, unit());
        assert_eq!(canvas.render(), "\n\n");
    }

    #[test]
    fn test_full_viewport_rectangle_outlines_border() {
        let mut canvas = CharCanvas::new(5, 4, unit());
        unit().draw(&mut canvas);
        assert_eq!(canvas.render(), "#####\n#   #\n#   #\n#####");
    }

    #[test]
    fn test_point_orientation() {
        let mut canvas = CharCanvas::new(3, 3, unit());
        Point2D::new(0.0, 1.0).draw(&mut canvas);
        Point2D::new(1.0, 0.0).draw(&mut canvas);
        assert_eq!(canvas.cell(0, 0), '.');
        assert_eq!(canvas.cell(2, 2), '.');
        assert_eq!(canvas.cell(1, 1), ' ');
    }

    #[test]
    fn test_points_do_not_overwrite_edges() {
        let mut canvas = CharCanvas::new(5, 5, unit());
        unit().draw(&mut canvas);
        Point2D::new(0.0, 0.0).draw(&mut canvas);
        assert_eq!(canvas.cell(0, 4), '#');
    }

    #[test]
    fn test_outside_is_clipped() {
        let mut canvas = CharCanvas::new(5, 5, unit());
        rect((2.0, 3.0), (2.0, 3.0)).draw(&mut canvas);
        Point2D::new(-1.0, 0.5).draw(&mut canvas);
        assert_eq!(canvas.render(), "\n\n\n\n");
    }

    #[test]
    fn test_partially_visible_rectangle_skips_hidden_edges() {
        let mut canvas = CharCanvas::new(5, 5, unit());
        rect((0.5, 2.0), (0.25, 0.75)).draw(&mut canvas);
        assert_eq!(canvas.render(), "\n  ###\n  #\n  ###\n");
        assert_eq!(canvas.cell(4, 2), ' ');
    }

    #[test]
    fn test_enclosing_rectangle_draws_nothing() {
        let mut canvas = CharCanvas::new(5, 5, unit());
        rect((-1.0, 2.0), (-1.0, 2.0)).draw(&mut canvas);
        assert_eq!(canvas.render(), "\n\n\n\n");
    }

    #[test]
    #[should_panic(expected = "at least 2x2")]
    fn test_too_small_panics() {
        CharCanvas::new(1, 5, unit());
    }
}
