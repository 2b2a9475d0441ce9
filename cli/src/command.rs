use std::str::FromStr;

use sweeper_core::{Action, Coord, Coord2, Difficulty};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Play(Action),
    Custom { rows: i64, cols: i64, mines: i64 },
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Empty command, type `help` for the list")]
    Empty,
    #[error("Unknown command `{0}`, type `help` for the list")]
    Unknown(String),
    #[error("`{command}` expects {expected}")]
    Arguments {
        command: &'static str,
        expected: &'static str,
    },
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("Unknown level `{0}`, pick easy, medium or hard")]
    UnknownLevel(String),
}

pub const HELP: &str = "\
commands:
  r ROW COL         reveal a cell, or chord around a revealed one
  f ROW COL         toggle a flag
  restart           new board, same level
  level LEVEL       easy, medium or hard
  custom R C M      custom level with R rows, C columns and M mines
  help              show this list
  quit";

fn number<T: FromStr>(word: &str) -> Result<T, ParseError> {
    word.parse()
        .map_err(|_| ParseError::NotANumber(word.to_string()))
}

fn coords(command: &'static str, args: &[&str]) -> Result<Coord2, ParseError> {
    let &[row, col] = args else {
        return Err(ParseError::Arguments {
            command,
            expected: "ROW COL",
        });
    };
    Ok((number::<Coord>(row)?, number::<Coord>(col)?))
}

pub fn parse_difficulty(word: &str) -> Result<Difficulty, ParseError> {
    match word.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        _ => Err(ParseError::UnknownLevel(word.to_string())),
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<_> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Err(ParseError::Empty);
        };

        Ok(match name {
            "r" | "reveal" => Command::Play(Action::Reveal(coords("reveal", args)?)),
            "f" | "flag" => Command::Play(Action::ToggleFlag(coords("flag", args)?)),
            "restart" => Command::Play(Action::Restart),
            "level" => {
                let &[level] = args else {
                    return Err(ParseError::Arguments {
                        command: "level",
                        expected: "LEVEL",
                    });
                };
                Command::Play(Action::SetLevel(parse_difficulty(level)?.level()))
            }
            "custom" => {
                let &[rows, cols, mines] = args else {
                    return Err(ParseError::Arguments {
                        command: "custom",
                        expected: "ROWS COLS MINES",
                    });
                };
                Command::Custom {
                    rows: number(rows)?,
                    cols: number(cols)?,
                    mines: number(mines)?,
                }
            }
            "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        })
    }
}

#[cfg(test)]
mod tests {
    use sweeper_core::Level;

    use super::*;

    #[test]
    fn parses_cell_commands() {
        assert_eq!(
            "r 3 4".parse::<Command>(),
            Ok(Command::Play(Action::Reveal((3, 4))))
        );
        assert_eq!(
            "  flag 0 7 ".parse::<Command>(),
            Ok(Command::Play(Action::ToggleFlag((0, 7))))
        );
    }

    #[test]
    fn parses_level_commands() {
        assert_eq!(
            "level Hard".parse::<Command>(),
            Ok(Command::Play(Action::SetLevel(Level::HARD)))
        );
        assert_eq!(
            "custom 10 -2 5".parse::<Command>(),
            Ok(Command::Custom {
                rows: 10,
                cols: -2,
                mines: 5
            })
        );
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(ParseError::Empty));
        assert_eq!(
            "r 1".parse::<Command>(),
            Err(ParseError::Arguments {
                command: "reveal",
                expected: "ROW COL"
            })
        );
        assert_eq!(
            "f x 1".parse::<Command>(),
            Err(ParseError::NotANumber("x".to_string()))
        );
        assert_eq!(
            "level insane".parse::<Command>(),
            Err(ParseError::UnknownLevel("insane".to_string()))
        );
        assert_eq!(
            "dig 1 1".parse::<Command>(),
            Err(ParseError::Unknown("dig".to_string()))
        );
    }
}
