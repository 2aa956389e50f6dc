// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, Result, Stdout, Write};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::cell::Cell;
use crate::frame::Frame;

/// The screen the scheduler draws to.
pub trait Backend {
    fn size(&self) -> Result<(u16, u16)>;
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

struct LastFrame {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl LastFrame {
    fn blank(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }
}

/// Raw-mode alternate screen. Dropping it restores the terminal.
pub struct Terminal {
    stdout: Stdout,
    last: Option<LastFrame>,
    run_buf: String,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        let init_res: Result<()> = (|| {
            out.execute(terminal::EnterAlternateScreen)?;
            out.execute(cursor::Hide)?;
            let _ = out.execute(terminal::DisableLineWrap);
            out.execute(SetAttribute(Attribute::Reset))?;
            out.execute(ResetColor)?;
            out.execute(terminal::Clear(terminal::ClearType::All))?;
            out.flush()?;
            Ok(())
        })();
        if let Err(e) = init_res {
            restore(&mut out);
            return Err(e);
        }
        Ok(Self {
            stdout: out,
            last: None,
            run_buf: String::with_capacity(64),
        })
    }

    fn set_style(&mut self, cell: Cell, cur: &mut (Option<Color>, bool)) -> Result<()> {
        if cell.fg != cur.0 {
            self.stdout
                .queue(SetForegroundColor(cell.fg.unwrap_or(Color::Reset)))?;
            cur.0 = cell.fg;
        }
        if cell.bold != cur.1 {
            self.stdout.queue(SetAttribute(if cell.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            }))?;
            cur.1 = cell.bold;
        }
        Ok(())
    }
}

impl Backend for Terminal {
    fn size(&self) -> Result<(u16, u16)> {
        terminal::size()
    }

    /// Writes the cells that changed since the last present, batching
    /// same-styled neighbours into one print.
    fn present(&mut self, frame: &Frame) -> Result<()> {
        let mut last = match self.last.take() {
            Some(l) if l.width == frame.width && l.height == frame.height => l,
            _ => {
                self.stdout
                    .queue(terminal::Clear(terminal::ClearType::All))?;
                LastFrame::blank(frame.width, frame.height)
            }
        };

        let width = frame.width as usize;
        let cells = frame.cells();
        let mut style: (Option<Color>, bool) = (None, false);
        let mut cur_pos: Option<(u16, u16)> = None;

        for (y, row) in cells.chunks(width.max(1)).enumerate() {
            let row_start = y * width;
            let mut x = 0usize;
            while x < row.len() {
                let idx = row_start + x;
                let cell = row[x];
                if last.cells[idx] == cell {
                    x += 1;
                    continue;
                }

                self.run_buf.clear();
                let x0 = x;
                while x < row.len() {
                    let c = row[x];
                    if last.cells[row_start + x] == c || c.fg != cell.fg || c.bold != cell.bold {
                        break;
                    }
                    self.run_buf.push(c.ch);
                    last.cells[row_start + x] = c;
                    x += 1;
                }

                let pos = (x0 as u16, y as u16);
                if cur_pos != Some(pos) {
                    self.stdout.queue(cursor::MoveTo(pos.0, pos.1))?;
                }
                self.set_style(cell, &mut style)?;
                self.stdout.queue(Print(self.run_buf.as_str()))?;
                cur_pos = Some((x as u16, y as u16));
            }
        }

        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        self.last = Some(last);
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore(&mut self.stdout);
    }
}

fn restore(out: &mut Stdout) {
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::EnableLineWrap);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = out.flush();
}

/// For panic and signal paths that never see the `Terminal` dropped.
pub fn restore_terminal_best_effort() {
    restore(&mut stdout());
}
