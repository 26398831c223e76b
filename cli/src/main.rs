use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use wordmatch_core::{GameConfig, RandomWordSupply, Word};

use session::{Command, Session};

mod session;
mod view;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file overriding grid size, max score and time limit
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Newline-separated word list to draw cards from
    #[arg(short, long)]
    words: Option<PathBuf>,
}

const HELP: &str = "\
Find the words that appear twice. Commands:
  <n> | tap <n>   select or deselect cell <n>
  restart         deal a new board
  show            redraw the board
  help            show this text
  quit            leave the game";

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = load_config(args.config.as_deref())?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!("seed: {}", seed);

    let supply = match args.words.as_deref() {
        Some(path) => RandomWordSupply::with_vocabulary(seed, load_vocabulary(path)?),
        None => RandomWordSupply::new(seed),
    };
    let mut session = Session::start(config, supply, seed, Instant::now())
        .context("could not deal the first board")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{HELP}\n")?;
    write!(stdout, "{}", view::render(&session.snapshot()))?;
    prompt(&mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("could not read input")?;

        for notice in session.catch_up(Instant::now()) {
            writeln!(stdout, "{notice}")?;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(stdout, "{HELP}")?,
            Ok(command) => match session.apply(command, Instant::now()) {
                Ok(notices) => {
                    for notice in notices {
                        writeln!(stdout, "{notice}")?;
                    }
                }
                Err(err) => writeln!(stdout, "{err}")?,
            },
            Err(err) => writeln!(stdout, "{err}")?,
        }

        write!(stdout, "{}", view::render(&session.snapshot()))?;
        prompt(&mut stdout)?;
    }

    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read config {}", path.display()))?;
    let config: GameConfig = toml::from_str(&text)
        .with_context(|| format!("could not parse config {}", path.display()))?;
    config.validate()?;
    log::info!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

fn load_vocabulary(path: &Path) -> Result<Vec<Word>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read word list {}", path.display()))?;
    let words: Vec<Word> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Word::from)
        .collect();
    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}
