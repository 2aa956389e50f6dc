// Copyright (c) 2026 rezky_nightky

use crate::cell::Cell;
use crate::config::{FLAT_BELOW, GROUND_COLOR, LEAF_BELOW, PEBBLE_BELOW, TITLE};
use crate::frame::Canvas;
use crate::noise::NoiseField;

/// Snaps odd columns onto the even grid the ground and rain are drawn on.
pub fn grid(x: i32) -> i32 {
    if x % 2 == 0 {
        x
    } else {
        x + 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ground {
    Pebble,
    Flat,
    Leaf,
}

impl Ground {
    /// Bands: below 0 pebble, then flat, then leaf; 0.4 and up is bare.
    pub fn from_noise(n: f32) -> Option<Self> {
        if n < PEBBLE_BELOW {
            Some(Ground::Pebble)
        } else if n < FLAT_BELOW {
            Some(Ground::Flat)
        } else if n < LEAF_BELOW {
            Some(Ground::Leaf)
        } else {
            None
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Ground::Pebble => '.',
            Ground::Flat => '_',
            Ground::Leaf => ',',
        }
    }
}

struct Patch {
    x: i32,
    y: i32,
    ground: Ground,
}

/// Paints the ground and title. The ground only depends on the screen size,
/// so the painted cells are kept until the size changes.
pub struct Terrain {
    field: NoiseField,
    size: Option<(u16, u16)>,
    patches: Vec<Patch>,
}

impl Terrain {
    pub fn new(field: NoiseField) -> Self {
        Self {
            field,
            size: None,
            patches: Vec::new(),
        }
    }

    fn rebuild(&mut self, width: u16, height: u16) {
        self.patches.clear();
        let (w, h) = (width as i32, height as i32);
        for y in 1..h - 2 {
            for x in 1..w - 3 {
                let gx = grid(x);
                if let Some(ground) = Ground::from_noise(self.field.sample(gx, y)) {
                    self.patches.push(Patch { x: gx, y, ground });
                }
            }
        }
        self.size = Some((width, height));
    }

    pub fn render_ground<C: Canvas>(&mut self, canvas: &mut C) {
        let (width, height) = canvas.size();
        if self.size != Some((width, height)) {
            self.rebuild(width, height);
        }

        canvas.clear();
        for p in &self.patches {
            canvas.set_cell(p.x, p.y, Cell::glyph(p.ground.glyph(), GROUND_COLOR));
        }
        render_title(canvas);
    }
}

fn render_title<C: Canvas>(canvas: &mut C) {
    let (w, h) = canvas.size();
    let len = TITLE.chars().count() as i32;
    let left = w as i32 / 2 - (len - 1);
    let y = h as i32 / 2;
    for (i, ch) in TITLE.chars().enumerate() {
        canvas.set_cell(left + i as i32, y, Cell::bold(ch));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;

    #[test]
    fn grid_is_always_even_and_idempotent() {
        for x in -50..50 {
            assert_eq!(grid(x) % 2, 0, "grid({x})");
            assert_eq!(grid(grid(x)), grid(x));
        }
        assert_eq!(grid(4), 4);
        assert_eq!(grid(5), 6);
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(Ground::from_noise(-0.5), Some(Ground::Pebble));
        assert_eq!(Ground::from_noise(0.1), Some(Ground::Flat));
        assert_eq!(Ground::from_noise(0.3), Some(Ground::Leaf));
        assert_eq!(Ground::from_noise(0.5), None);
    }

    #[test]
    fn band_edges_belong_to_the_upper_band() {
        assert_eq!(Ground::from_noise(0.0), Some(Ground::Flat));
        assert_eq!(Ground::from_noise(0.2), Some(Ground::Leaf));
        assert_eq!(Ground::from_noise(0.4), None);
    }

    fn rendered(width: u16, height: u16) -> Frame {
        let mut terrain = Terrain::new(NoiseField::new());
        let mut frame = Frame::new(width, height);
        terrain.render_ground(&mut frame);
        frame
    }

    #[test]
    fn ground_sits_on_even_columns_inside_the_border() {
        let frame = rendered(40, 16);
        for y in 0..16 {
            for x in 0..40 {
                let cell = frame.get(x, y).unwrap();
                if cell.fg != Some(GROUND_COLOR) {
                    continue;
                }
                assert_eq!(x % 2, 0);
                assert!((2..=37).contains(&x), "x = {x}");
                assert!((1..14).contains(&y), "y = {y}");
            }
        }
    }

    #[test]
    fn ground_matches_the_noise_bands() {
        let field = NoiseField::new();
        let frame = rendered(40, 16);
        for y in 1..14 {
            if y == 8 {
                continue;
            }
            for x in (2..36).step_by(2) {
                let expected = Ground::from_noise(field.sample(x, y)).map(Ground::glyph);
                let got = frame.get(x, y).map(|c| c.ch).filter(|ch| *ch != ' ');
                assert_eq!(got, expected, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn title_is_bold_in_the_middle_row() {
        let frame = rendered(40, 16);
        let row: String = (14..=20).map(|x| frame.get(x, 8).unwrap().ch).collect();
        assert_eq!(row, TITLE);
        assert!(frame.get(14, 8).unwrap().bold);
        assert_eq!(frame.get(14, 8).unwrap().fg, None);
    }

    #[test]
    fn rendering_twice_is_identical_and_resize_rebuilds() {
        let mut terrain = Terrain::new(NoiseField::new());
        let mut a = Frame::new(30, 12);
        let mut b = Frame::new(30, 12);
        terrain.render_ground(&mut a);
        terrain.render_ground(&mut b);
        assert_eq!(a.cells(), b.cells());

        let mut big = Frame::new(50, 20);
        terrain.render_ground(&mut big);
        assert_eq!(big.cells(), rendered(50, 20).cells());
    }

    #[test]
    fn a_wide_screen_shows_every_band() {
        let field = NoiseField::new();
        let mut seen = [0usize; 4];
        for y in 1..60 {
            for x in 1..200 {
                let slot = match Ground::from_noise(field.sample(grid(x), y)) {
                    Some(Ground::Pebble) => 0,
                    Some(Ground::Flat) => 1,
                    Some(Ground::Leaf) => 2,
                    None => 3,
                };
                seen[slot] += 1;
            }
        }
        assert!(seen.iter().all(|n| *n > 0), "pebble/flat/leaf/bare = {seen:?}");
    }

    #[test]
    fn tiny_screens_draw_only_what_fits() {
        let frame = rendered(3, 2);
        assert!(frame.cells().iter().all(|c| c.fg != Some(GROUND_COLOR)));
        assert!((0..3).all(|x| frame.get(x, 0) == Some(&Cell::BLANK)));
        // Only the tail of the title lands on screen.
        assert_eq!(frame.get(0, 1), Some(&Cell::bold(' ')));
        assert_eq!(frame.get(1, 1), Some(&Cell::bold('n')));
        assert_eq!(frame.get(2, 1), Some(&Cell::BLANK));
    }
}
