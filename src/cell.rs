// Copyright (c) 2026 rezky_nightky

use crossterm::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bold: bool,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        fg: None,
        bold: false,
    };

    /// A glyph in `fg` over the terminal's default background.
    pub fn glyph(ch: char, fg: Color) -> Self {
        Self {
            ch,
            fg: Some(fg),
            bold: false,
        }
    }

    /// A bold glyph in the terminal's default foreground.
    pub fn bold(ch: char) -> Self {
        Self {
            ch,
            fg: None,
            bold: true,
        }
    }
}
