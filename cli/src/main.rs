use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use sweeper_core::{Action, Level, Session};

use command::{Command, HELP};

mod command;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Preset level to start on
    #[arg(short, long, default_value = "easy", value_parser = command::parse_difficulty)]
    level: sweeper_core::Difficulty,

    /// Custom level rows, overrides --level together with --cols and --mines
    #[arg(long, requires_all = ["cols", "mines"], allow_negative_numbers = true)]
    rows: Option<i64>,

    /// Custom level columns
    #[arg(long, requires_all = ["rows", "mines"], allow_negative_numbers = true)]
    cols: Option<i64>,

    /// Custom level mines
    #[arg(long, requires_all = ["rows", "cols"], allow_negative_numbers = true)]
    mines: Option<i64>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn starting_level(&self) -> Level {
        let (Some(rows), Some(cols), Some(mines)) = (self.rows, self.cols, self.mines) else {
            return self.level.level();
        };
        Level::custom(rows, cols, mines).unwrap_or_else(|err| {
            eprintln!("{err}");
            log::warn!("Custom level rejected, starting on {:?}", self.level);
            self.level.level()
        })
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut session = Session::with_seed(args.starting_level(), seed)
        .context("could not generate the starting board")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", render::render(&session));

    for line in stdin.lock().lines() {
        let line = line.context("could not read from stdin")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Custom { rows, cols, mines } => {
                if let Err(err) = session.set_custom_level(rows, cols, mines) {
                    println!("{err}");
                    continue;
                }
            }
            Command::Play(action) => {
                if let Action::Reveal(coords) | Action::ToggleFlag(coords) = action {
                    if session.board().validate_coords(coords).is_err() {
                        let (rows, cols) = session.board().size();
                        println!("({}, {}) is off the {rows}x{cols} board", coords.0, coords.1);
                        continue;
                    }
                }
                session = session.apply(action)?;
            }
        }

        println!("{}", render::render(&session));
        stdout.flush()?;
    }

    Ok(())
}
