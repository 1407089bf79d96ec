pub(crate) mod collision;
pub(crate) mod direction;
pub(crate) mod food;
pub(crate) mod grid;
pub(crate) mod snake;
use self::direction::Direction;
use self::grid::{Cell, Grid};
use self::snake::SnakeBody;
use crate::command::Command;
use crate::config::SpeedConfig;
use crate::consts;
use crate::highscore::{HighScoreStore, JsonFileStore};
use rand::Rng;
use std::time::Duration;

/// Whether ticks currently advance the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    Playing,
    Paused,
    GameOver,
}

/// The state of a game session: the current run plus the high score, which
/// outlives restarts
#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng, H = JsonFileStore> {
    rng: R,
    store: H,
    grid: Grid,
    speed_config: SpeedConfig,
    snake: SnakeBody,
    food: Option<Cell>,
    score: u32,
    /// Ticks per second
    speed: f64,
    phase: Phase,
    /// Best score as of the start of the session or the last game over
    high: u32,
}

impl<R: Rng, H: HighScoreStore> Game<R, H> {
    pub(crate) fn new(grid: Grid, speed_config: SpeedConfig, mut rng: R, mut store: H) -> Self {
        let high = store.load();
        let snake = new_snake(grid);
        let food = food::spawn(snake.cells(), grid, &mut rng);
        log::info!(
            "New game on {}x{} grid (high score {high})",
            grid.width,
            grid.height
        );
        Game {
            rng,
            store,
            grid,
            speed_config,
            snake,
            food,
            score: 0,
            speed: speed_config.initial,
            phase: Phase::Playing,
            high,
        }
    }

    /// Act on a player command.  `Command::Quit` is left to the caller.
    pub(crate) fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.restart(),
            Command::Quit => (),
            _ => {
                // Turns requested while paused or dead are dropped so that
                // they can't pile up and fire all at once on resume.
                if let Some(d) = cmd.direction().filter(|_| self.phase == Phase::Playing) {
                    self.snake.set_direction(d);
                }
            }
        }
    }

    /// Advance the game by one tick.  Does nothing unless playing.
    pub(crate) fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.snake.step();
        let wall = collision::hits_wall(&self.snake, self.grid);
        if wall || collision::hits_self(&self.snake) {
            let cause = if wall { "wall" } else { "own body" };
            log::info!(
                "Game over: hit {cause} with score {} at length {}",
                self.score,
                self.snake.len()
            );
            self.end_game();
            return;
        }
        if self.food == Some(self.snake.head()) {
            self.score += 1;
            self.snake.add_growth(1);
            self.speed += self.speed_config.step;
            log::debug!("Ate food; score {}, speed {:.1}", self.score, self.speed);
            self.food = food::spawn(self.snake.cells(), self.grid, &mut self.rng);
            if self.food.is_none() {
                log::info!("No free cell left for food");
            }
        }
    }

    fn end_game(&mut self) {
        self.phase = Phase::GameOver;
        if self.score > self.high {
            self.high = self.score;
            self.store.save(self.score);
        }
    }

    fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Playing => self.phase = Phase::Paused,
            Phase::Paused => self.phase = Phase::Playing,
            Phase::GameOver => (),
        }
    }

    /// Start a new run if the current one is over
    fn restart(&mut self) {
        if self.phase != Phase::GameOver {
            return;
        }
        // Keep the in-memory value if the last save failed.
        self.high = self.high.max(self.store.load());
        self.snake = new_snake(self.grid);
        self.food = food::spawn(self.snake.cells(), self.grid, &mut self.rng);
        self.score = 0;
        self.speed = self.speed_config.initial;
        self.phase = Phase::Playing;
        log::info!("Restarted (high score {})", self.high);
    }
}

impl<R, H> Game<R, H> {
    #[cfg(test)]
    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }

    pub(crate) fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    pub(crate) fn food(&self) -> Option<Cell> {
        self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    /// Return the current speed in ticks per second
    pub(crate) fn speed(&self) -> f64 {
        self.speed
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    /// Return the best score to display: the stored high score, or the
    /// current score if that's better
    pub(crate) fn high_score(&self) -> u32 {
        self.high.max(self.score)
    }

    /// Return the time that should pass between two ticks at the current
    /// speed
    pub(crate) fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.speed.max(consts::MIN_SPEED))
    }
}

fn new_snake(grid: Grid) -> SnakeBody {
    SnakeBody::new(grid.center(), Direction::Right, consts::INITIAL_SNAKE_LENGTH)
}
