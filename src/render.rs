//! Drawing a game onto an abstract render surface
use crate::config::{Config, Palette, Rgb};
use crate::consts;
use crate::game::grid::{Cell, Grid};
use crate::game::{Game, Phase};
use std::io;

/// A position on the render surface, in pixels from the top-left corner
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: u32,
    pub(crate) y: u32,
}

impl Point {
    pub(crate) const fn new(x: u32, y: u32) -> Point {
        Point { x, y }
    }
}

/// An axis-aligned rectangle on the render surface, in pixels
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PxRect {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl PxRect {
    pub(crate) const fn new(x: u32, y: u32, width: u32, height: u32) -> PxRect {
        PxRect {
            x,
            y,
            width,
            height,
        }
    }

    pub(crate) fn right(self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub(crate) fn bottom(self) -> u32 {
        self.y.saturating_add(self.height)
    }
}

/// Which point of a piece of text is placed at the position passed to
/// [`Surface::draw_text()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Anchor {
    TopLeft,
    Center,
}

/// Something a frame can be drawn on.  Calls between two `present()`s make up
/// one frame.
pub(crate) trait Surface {
    /// Fill the whole surface with `color`
    fn clear(&mut self, color: Rgb);

    fn draw_rect(&mut self, rect: PxRect, color: Rgb, corner_radius: u32);

    /// Draw a one-pixel line between two points
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb);

    fn draw_text(&mut self, text: &str, color: Rgb, pos: Point, anchor: Anchor);

    /// Show everything drawn since the last call
    fn present(&mut self) -> io::Result<()>;
}

/// Pixel geometry of the game screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Layout {
    grid: Grid,
    cell_size: u32,
    margin: u32,
}

impl Layout {
    pub(crate) fn new(config: &Config) -> Layout {
        Layout {
            grid: config.grid,
            cell_size: config.display.cell_size,
            margin: config.display.margin,
        }
    }

    pub(crate) fn cell_size(self) -> u32 {
        self.cell_size
    }

    /// Total width of the screen: the playing field plus a margin on each side
    pub(crate) fn width(self) -> u32 {
        self.play_field()
            .width
            .saturating_add(self.margin.saturating_mul(2))
    }

    /// Total height of the screen: the playing field plus a margin on each
    /// side
    pub(crate) fn height(self) -> u32 {
        self.play_field()
            .height
            .saturating_add(self.margin.saturating_mul(2))
    }

    pub(crate) fn play_field(self) -> PxRect {
        PxRect::new(
            self.margin,
            self.margin,
            u32::from(self.grid.width).saturating_mul(self.cell_size),
            u32::from(self.grid.height).saturating_mul(self.cell_size),
        )
    }

    /// Return the area of `cell` shrunk by `inset` pixels on every side, or
    /// `None` if the cell is off the grid
    pub(crate) fn cell_rect(self, cell: Cell, inset: u32) -> Option<PxRect> {
        if !self.grid.contains(cell) {
            return None;
        }
        let x = u32::try_from(cell.x).ok()?;
        let y = u32::try_from(cell.y).ok()?;
        let size = self.cell_size.saturating_sub(inset.saturating_mul(2));
        let offset = |i: u32| {
            self.margin
                .saturating_add(i.saturating_mul(self.cell_size))
                .saturating_add(inset)
        };
        Some(PxRect::new(offset(x), offset(y), size, size))
    }
}

/// Draws game states with a fixed layout & palette
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Painter {
    layout: Layout,
    palette: Palette,
}

impl Painter {
    pub(crate) fn new(config: &Config) -> Painter {
        Painter {
            layout: Layout::new(config),
            palette: config.colors,
        }
    }

    /// Draw a complete frame for `game` and present it
    pub(crate) fn paint<S: Surface + ?Sized, R, H>(
        &self,
        surface: &mut S,
        game: &Game<R, H>,
    ) -> io::Result<()> {
        let play = self.layout.play_field();
        surface.clear(self.palette.background);
        surface.draw_rect(play, self.palette.background, consts::PLAY_FIELD_RADIUS);
        self.draw_grid(surface);
        if let Some(rect) = game
            .food()
            .and_then(|c| self.layout.cell_rect(c, consts::FOOD_INSET))
        {
            surface.draw_rect(rect, self.palette.food, consts::FOOD_RADIUS);
        }
        for (i, cell) in game.snake().cells().enumerate() {
            // A head that has gone through the wall is not drawn.
            let Some(rect) = self.layout.cell_rect(cell, consts::SNAKE_INSET) else {
                continue;
            };
            let color = if i == 0 {
                self.palette.snake_head
            } else {
                self.palette.snake
            };
            surface.draw_rect(rect, color, consts::SNAKE_RADIUS);
        }
        surface.draw_text(
            &hud_text(game),
            self.palette.text,
            Point::new(play.x, consts::HUD_TOP),
            Anchor::TopLeft,
        );
        match game.phase() {
            Phase::Playing => (),
            Phase::Paused => {
                self.draw_banner(surface, consts::PAUSED_MESSAGE, self.palette.accent);
            }
            Phase::GameOver => {
                self.draw_banner(surface, consts::GAME_OVER_MESSAGE, self.palette.food);
            }
        }
        surface.present()
    }

    fn draw_grid<S: Surface + ?Sized>(&self, surface: &mut S) {
        let play = self.layout.play_field();
        let cell = self.layout.cell_size();
        for i in 0..=u32::from(self.layout.grid.width) {
            let x = play.x.saturating_add(i.saturating_mul(cell));
            surface.draw_line(
                Point::new(x, play.y),
                Point::new(x, play.bottom()),
                self.palette.grid,
            );
        }
        for i in 0..=u32::from(self.layout.grid.height) {
            let y = play.y.saturating_add(i.saturating_mul(cell));
            surface.draw_line(
                Point::new(play.x, y),
                Point::new(play.right(), y),
                self.palette.grid,
            );
        }
    }

    /// Draw `message` on a band across the middle of the screen
    fn draw_banner<S: Surface + ?Sized>(&self, surface: &mut S, message: &str, color: Rgb) {
        let play = self.layout.play_field();
        let middle = self.layout.height() / 2;
        surface.draw_rect(
            PxRect::new(
                play.x,
                middle.saturating_sub(consts::OVERLAY_HEIGHT / 2),
                play.width,
                consts::OVERLAY_HEIGHT,
            ),
            self.palette.overlay,
            0,
        );
        surface.draw_text(
            message,
            color,
            Point::new(self.layout.width() / 2, middle),
            Anchor::Center,
        );
    }
}

fn hud_text<R, H>(game: &Game<R, H>) -> String {
    format!(
        "Score: {}    High: {}    Speed: {:.1}",
        game.score(),
        game.high_score(),
        game.speed()
    )
}
