//! Balanced bracket checking library.
//!
//! This library checks text for balanced `()`, `[]` and `{}` and renders
//! the first problem it finds. It also carries the small data structure
//! exercises the `enclose` command line tool offers alongside the checker.

mod check;
pub mod collections;
mod config;
pub mod sequence;
pub mod text;

pub use check::{
    Balance, BracketError, PAIRS, SourceLocation, char_to_byte, char_to_location, check,
    closer_for, is_closer, is_opener, opener_for, render,
};
pub use config::{Config, ConfigError, MarkerStyle};
