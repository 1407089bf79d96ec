//! Terminal implementations of the engine's input & output seams
use crate::command::Command;
use crate::config::Rgb;
use crate::engine::InputSource;
use crate::render::{Anchor, Point, PxRect, Surface};
use crossterm::event::{poll, read};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    Terminal,
};
use std::io;
use std::time::Duration;

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Color {
        Color::Rgb(value.0, value.1, value.2)
    }
}

/// Reads key presses from the terminal
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll(&mut self, timeout: Duration) -> io::Result<Vec<Command>> {
        let mut commands = Vec::new();
        let mut wait = timeout;
        while poll(wait)? {
            if let Some(cmd) = read()?
                .as_key_press_event()
                .and_then(Command::from_key_event)
            {
                commands.push(cmd);
            }
            wait = Duration::ZERO;
        }
        Ok(commands)
    }
}

/// A render surface backed by a terminal.
///
/// Each character cell stands for a block of pixels half as wide as a grid
/// cell and as tall as one, so that a grid cell comes out roughly square.
/// Rectangles are drawn as runs of cells in their color; lines are too thin
/// to show up and are skipped.
#[derive(Debug)]
pub(crate) struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    /// The frame being drawn; copied to the terminal on `present()`
    canvas: Buffer,
    col_px: u32,
    row_px: u32,
}

impl<B: Backend> TerminalSurface<B> {
    pub(crate) fn new(terminal: Terminal<B>, cell_size: u32) -> io::Result<Self> {
        let size = terminal.size()?;
        Ok(TerminalSurface {
            terminal,
            canvas: Buffer::empty(Rect::from((Position::ORIGIN, size))),
            col_px: (cell_size / 2).max(1),
            row_px: cell_size.max(1),
        })
    }

    fn column(&self, x: u32) -> u16 {
        u16::try_from(x / self.col_px).unwrap_or(u16::MAX)
    }

    fn row(&self, y: u32) -> u16 {
        u16::try_from(y / self.row_px).unwrap_or(u16::MAX)
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn clear(&mut self, color: Rgb) {
        self.canvas.reset();
        let area = self.canvas.area;
        self.canvas.set_style(area, Style::new().bg(color.into()));
    }

    // Character cells have no room for rounded corners.
    fn draw_rect(&mut self, rect: PxRect, color: Rgb, _corner_radius: u32) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let left = self.column(rect.x);
        let right = self.column(rect.right() - 1);
        let top = self.row(rect.y);
        let bottom = self.row(rect.bottom() - 1);
        for y in top..=bottom {
            for x in left..=right {
                if let Some(cell) = self.canvas.cell_mut((x, y)) {
                    cell.set_char(' ');
                    cell.set_bg(color.into());
                }
            }
        }
    }

    fn draw_line(&mut self, _from: Point, _to: Point, _color: Rgb) {}

    fn draw_text(&mut self, text: &str, color: Rgb, pos: Point, anchor: Anchor) {
        let mut x = self.column(pos.x);
        let y = self.row(pos.y);
        if anchor == Anchor::Center {
            let half = u16::try_from(text.chars().count() / 2).unwrap_or(u16::MAX);
            x = x.saturating_sub(half);
        }
        if self.canvas.area.contains(Position { x, y }) {
            self.canvas
                .set_string(x, y, text, Style::new().fg(color.into()));
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let canvas = &self.canvas;
        let frame = self.terminal.draw(|frame| {
            let area = frame.area().intersection(canvas.area);
            let buf = frame.buffer_mut();
            for pos in area.positions() {
                if let (Some(src), Some(dest)) = (canvas.cell(pos), buf.cell_mut(pos)) {
                    *dest = src.clone();
                }
            }
        })?;
        if frame.area != self.canvas.area {
            log::debug!(
                "Terminal resized to {}x{}",
                frame.area.width,
                frame.area.height
            );
            self.canvas = Buffer::empty(frame.area);
        }
        Ok(())
    }
}
