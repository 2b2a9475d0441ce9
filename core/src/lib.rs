//! Minesweeper engine: board generation, reveal rules and game sessions.
//!
//! A presentation layer holds a [`Session`], forwards clicks to
//! [`Session::primary_action`] and [`Session::secondary_action`] (or as
//! [`Action`]s through [`Session::apply`]) and redraws from [`Session::view_at`].

#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use error::*;
pub use evaluate::*;
pub use generator::*;
pub use level::*;
pub use reveal::{MarkOutcome, RevealOutcome};
pub use session::*;
pub use types::*;

pub mod adjacency;
mod board;
mod cell;
mod error;
pub mod evaluate;
mod generator;
mod level;
pub mod reveal;
mod session;
mod types;
