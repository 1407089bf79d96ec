use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::highscore::{HighScoreStore, JsonFileStore};
use crate::render::{Painter, Surface};
use rand::Rng;
use std::io;
use std::time::{Duration, Instant};

/// A source of player commands
pub(crate) trait InputSource {
    /// Wait up to `timeout` for input, then return every command received
    /// since the last call, in order
    fn poll(&mut self, timeout: Duration) -> io::Result<Vec<Command>>;
}

/// What the engine should do after a frame
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// The frame loop: gathers input, advances the game at its tick rate, and
/// redraws every frame
#[derive(Debug)]
pub(crate) struct Engine<I, S, R = rand::rngs::ThreadRng, H = JsonFileStore> {
    game: Game<R, H>,
    painter: Painter,
    input: I,
    surface: S,
    last_tick: Instant,
}

impl<I: InputSource, S: Surface, R: Rng, H: HighScoreStore> Engine<I, S, R, H> {
    pub(crate) fn new(
        game: Game<R, H>,
        painter: Painter,
        input: I,
        surface: S,
        now: Instant,
    ) -> Self {
        Engine {
            game,
            painter,
            input,
            surface,
            last_tick: now,
        }
    }

    /// Run frames until the player quits
    pub(crate) fn run(&mut self) -> io::Result<()> {
        log::info!("Starting game loop");
        loop {
            let timeout = self.poll_timeout(Instant::now());
            let commands = self.input.poll(timeout)?;
            if self.frame(Instant::now(), commands)? == Flow::Quit {
                log::info!("Quit requested; final score {}", self.game.score());
                return Ok(());
            }
        }
    }

    /// Run one frame at time `now`: apply `commands`, tick the game if a tick
    /// is due, and draw the result.
    ///
    /// At most one tick is run per frame; time lost to a slow frame is not
    /// made up.
    pub(crate) fn frame(&mut self, now: Instant, commands: Vec<Command>) -> io::Result<Flow> {
        for cmd in commands {
            if cmd == Command::Quit {
                return Ok(Flow::Quit);
            }
            self.game.apply(cmd);
        }
        if now.saturating_duration_since(self.last_tick) >= self.game.tick_interval() {
            self.game.tick();
            self.last_tick = now;
        }
        self.painter.paint(&mut self.surface, &self.game)?;
        Ok(Flow::Continue)
    }

    /// Return how long to wait for input before the next frame
    fn poll_timeout(&self, now: Instant) -> Duration {
        (self.last_tick + self.game.tick_interval())
            .saturating_duration_since(now)
            .min(consts::FRAME_PERIOD)
    }

    #[cfg(test)]
    fn game(&self) -> &Game<R, H> {
        &self.game
    }
}
