use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use termsnake::config::{DEFAULT_FRUIT_VALUE, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use termsnake::console::PlainConsole;
use termsnake::input::KeyAction;
use termsnake::term::TermManager;
use termsnake::{Game, GameConfig, GameState, SessionEnd, run_session};

/// Turn-based Snake: one key press, one step.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of columns on the board.
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u16).range(1..=80))]
    width: u16,
    /// Number of rows on the board.
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u16).range(1..=80))]
    height: u16,
    /// Points awarded for each fruit.
    #[arg(long, default_value_t = DEFAULT_FRUIT_VALUE)]
    fruit_value: u32,
    /// Seed for fruit placement, to replay a game.
    #[arg(long)]
    seed: Option<u64>,
    /// Print frames as plain text and read one line per turn instead of
    /// taking over the terminal.
    #[arg(long)]
    plain: bool,
    /// Where log output goes; the screen belongs to the game.
    #[arg(long, value_name = "PATH", default_value = "termsnake.log")]
    log_file: PathBuf,
    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig { width: self.width, height: self.height, fruit_value: self.fruit_value, seed: self.seed }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.game_config();
    info!("starting termsnake with {:?}", config);

    let res = if cli.plain { play_plain(&config) } else { play_terminal(&config) };
    if let Err(err) = &res {
        error!("{:#}", err);
    }
    res
}

fn init_logging(cli: &Cli) -> Result<()> {
    if cli.log_level == LevelFilter::Off {
        return Ok(());
    }

    let file = File::create(&cli.log_file)
        .with_context(|| format!("cannot create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level, Config::default(), file).context("cannot install logger")
}

fn play_plain(config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut console = PlainConsole::new(stdin.lock(), io::stdout());
    console.say("Type w/a/s/d and Enter to move, q to quit.")?;

    let mut game = Game::new(config)?;
    let end = run_session(&mut game, &mut console)?;

    match end {
        SessionEnd::Finished { state, score } => console.say(&format!("{} Score: {}", headline(state), score))?,
        SessionEnd::Quit { score } => console.say(&format!("Bye! Score: {}", score))?,
    }

    Ok(())
}

fn play_terminal(config: &GameConfig) -> Result<()> {
    let mut term = TermManager::new();
    term.setup().context("cannot prepare the terminal")?;

    // Restore the terminal even when the game itself failed.
    let res = play_rounds(&mut term, config);
    let restored = term.restore().context("cannot restore the terminal");
    res?;
    restored
}

fn play_rounds(term: &mut TermManager, config: &GameConfig) -> Result<()> {
    term.clear()?;
    term.show_message(&[
        "Arrow keys or WASD to move",
        "Any other key waits a turn",
        "Esc or Q to quit",
        "",
        "Press any key to begin",
    ])?;

    if let KeyAction::Quit = term.read_action()? {
        return Ok(());
    }

    loop {
        let mut game = Game::new(config)?;

        let (state, score) = match run_session(&mut game, term)? {
            SessionEnd::Quit { .. } => return Ok(()),
            SessionEnd::Finished { state, score } => (state, score),
        };

        term.show_message(&[
            headline(state),
            &format!("Score: {}", score),
            "",
            "Press any key to play again,",
            "or Esc to quit.",
        ])?;

        if let KeyAction::Quit = term.read_action()? {
            return Ok(());
        }
    }
}

fn headline(state: GameState) -> &'static str {
    match state {
        GameState::Won => "You won!",
        GameState::LostWall => "Game over! You hit the wall.",
        GameState::LostSelf => "Game over! You bit yourself.",
        GameState::Running => "",
    }
}
