// Copyright (c) 2026 rezky_nightky

use crate::cell::Cell;

/// Something glyphs can be painted onto. Coordinates are signed so shapes
/// that straddle an edge are clipped rather than wrapped.
pub trait Canvas {
    fn size(&self) -> (u16, u16);
    fn set_cell(&mut self, x: i32, y: i32, cell: Cell);
    fn clear(&mut self);
}

#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; len],
        }
    }

    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[allow(dead_code)]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Canvas for Frame {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_makes_cells_blank() {
        let mut f = Frame::new(2, 2);
        f.set_cell(0, 0, Cell::bold('x'));
        assert_eq!(f.get(0, 0).unwrap().ch, 'x');
        f.clear();
        assert_eq!(f.get(0, 0), Some(&Cell::BLANK));
    }

    #[test]
    fn out_of_bounds_writes_are_clipped() {
        let mut f = Frame::new(3, 2);
        f.set_cell(-1, 0, Cell::bold('x'));
        f.set_cell(3, 1, Cell::bold('x'));
        f.set_cell(0, 2, Cell::bold('x'));
        assert!(f.cells().iter().all(|c| *c == Cell::BLANK));
    }
}
