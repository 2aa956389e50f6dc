// Copyright (c) 2026 rezky_nightky

use std::io::Result;

use crate::cell::Cell;
use crate::config::RAIN_COLOR;
use crate::droplet::Droplet;
use crate::frame::{Canvas, Frame};
use crate::terminal::Backend;
use crate::terrain::grid;

/// Glyphs for a droplet of the given age, as (column offset, char) pairs.
/// Young droplets are still falling and old ones have already soaked in.
pub fn shape(age: u32) -> &'static [(i32, char)] {
    match age {
        4 => &[(0, '.')],
        5 => &[(0, '-')],
        6 => &[(0, 'o')],
        7 => &[(0, 'O')],
        8 => &[(0, '('), (2, ')')],
        9 => &[(-2, '('), (2, ')')],
        _ => &[],
    }
}

pub fn render_droplet<C: Canvas>(canvas: &mut C, d: &Droplet) {
    let x = grid(d.x);
    for &(dx, ch) in shape(d.age) {
        canvas.set_cell(x + dx, d.y, Cell::glyph(ch, RAIN_COLOR));
    }
}

/// Paints every droplet, ages each by one and presents the frame.
pub fn render_rain<B: Backend>(
    frame: &mut Frame,
    backend: &mut B,
    drops: &mut [Droplet],
) -> Result<()> {
    for d in drops.iter_mut() {
        render_droplet(frame, d);
        d.age += 1;
    }
    backend.present(frame)
}
