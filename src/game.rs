use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::fruit::Fruit;
use crate::grid::{Grid, Position};
use crate::input::CommandSource;
use crate::render::Screen;
use crate::snake::{Direction, MoveResult, Snake};

/// One turn's worth of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    /// No usable key this turn; the snake stays put.
    Stay,
}

impl Command {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            Command::Stay => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Running,
    LostWall,
    LostSelf,
    /// The snake fills the board and there is nowhere left for fruit.
    Won,
}

impl GameState {
    pub fn is_over(self) -> bool {
        self != GameState::Running
    }

    pub fn is_loss(self) -> bool {
        matches!(self, GameState::LostWall | GameState::LostSelf)
    }
}

/// Read-only copy of everything a renderer may look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub width: u16,
    pub height: u16,
    pub segments: Vec<Position>,
    pub direction: Option<Direction>,
    pub fruit: Position,
    pub score: u32,
    pub state: GameState,
    pub turn: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Finished { state: GameState, score: u32 },
    Quit { score: u32 },
}

/// The turn engine. Owns the snake, the fruit, the score and the random
/// source for a single session.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    grid: Grid,
    snake: Snake,
    fruit: Fruit,
    score: u32,
    fruit_value: u32,
    state: GameState,
    turn: u64,
    rng: R,
}

impl Game<StdRng> {
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        // Always seed explicitly so any session can be replayed from the log.
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        info!("new game: {}x{} grid, fruit worth {}, seed {}", config.width, config.height, config.fruit_value, seed);
        Game::new_with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// A fresh session: one-segment snake in the middle of the grid and a
    /// randomly placed fruit.
    pub fn new_with_rng(config: &GameConfig, mut rng: R) -> Result<Self, GameError> {
        let grid = config.grid()?;
        let snake = Snake::new(grid.center(), grid.cell_count());
        let fruit = Fruit::spawn(&grid, &snake, &mut rng)?;

        Ok(Game { grid, snake, fruit, score: 0, fruit_value: config.fruit_value, state: GameState::Running, turn: 0, rng })
    }

    /// A session starting from an arbitrary layout. The snake must lie on the
    /// grid and the fruit on a free cell.
    pub fn from_parts(grid: Grid, snake: Snake, fruit: Position, fruit_value: u32, rng: R) -> Result<Self, GameError> {
        for segment in snake.body() {
            grid.check(*segment)?;
        }
        let fruit = Fruit::at(fruit, &grid, &snake)?;

        Ok(Game { grid, snake, fruit, score: 0, fruit_value, state: GameState::Running, turn: 0, rng })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> Position {
        self.fruit.position()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Plays one turn. Once the game is over every further call is a no-op
    /// that reports the final state.
    pub fn turn(&mut self, command: Command) -> Result<GameState, GameError> {
        if self.state.is_over() {
            return Ok(self.state);
        }

        self.turn += 1;
        debug!("turn {}: {:?}", self.turn, command);

        let direction = match command.direction() {
            Some(dir) => dir,
            None => return Ok(self.state),
        };

        if let MoveResult::Reversed = self.snake.move_step(direction) {
            debug!("turn {}: ignoring {:?}, it would reverse into the neck", self.turn, direction);
            return Ok(self.state);
        }

        if self.snake.hits_wall(&self.grid) {
            return Ok(self.finish(GameState::LostWall));
        }

        if self.snake.hits_itself() {
            return Ok(self.finish(GameState::LostSelf));
        }

        if self.snake.head() == self.fruit.position() {
            self.snake.grow()?;
            self.score = self.score.saturating_add(self.fruit_value);
            info!("turn {}: ate fruit at {:?}, length {}, score {}", self.turn, self.snake.head(), self.snake.len(), self.score);

            if self.snake.len() >= self.grid.cell_count() || !self.fruit.relocate(&self.grid, &self.snake, &mut self.rng) {
                return Ok(self.finish(GameState::Won));
            }
        }

        Ok(self.state)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            segments: self.snake.body().to_vec(),
            direction: self.snake.direction(),
            fruit: self.fruit.position(),
            score: self.score,
            state: self.state,
            turn: self.turn,
        }
    }

    fn finish(&mut self, state: GameState) -> GameState {
        info!("turn {}: game over ({:?}) with score {}", self.turn, state, self.score);
        self.state = state;
        state
    }
}

/// Drives `game` until it ends or the player walks away: draw, wait for a
/// command, play the turn, repeat.
pub fn run_session<R, F>(game: &mut Game<R>, frontend: &mut F) -> Result<SessionEnd, GameError>
where
    R: Rng,
    F: CommandSource + Screen + ?Sized,
{
    frontend.present(&game.snapshot())?;

    while !game.state().is_over() {
        let command = match frontend.next_command()? {
            Some(command) => command,
            None => {
                info!("player quit on turn {} with score {}", game.turn, game.score());
                return Ok(SessionEnd::Quit { score: game.score() });
            }
        };

        game.turn(command)?;
        frontend.present(&game.snapshot())?;
    }

    Ok(SessionEnd::Finished { state: game.state(), score: game.score() })
}
