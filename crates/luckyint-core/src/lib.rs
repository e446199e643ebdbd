//! # luckyint-core
//!
//! Finds the largest "lucky" integer in a sequence: the largest value `v`
//! that occurs exactly `v` times. Also provides the integer line parser that
//! feeds it and the runtime parse-mode configuration.
//!
//! No `unsafe` code is permitted at the crate level.

#![forbid(unsafe_code)]

pub mod config;
pub mod finder;
pub mod parse;

pub use config::ParseMode;
pub use finder::{
    FrequencyTable, LuckyIntegerFinder, NO_LUCKY_INTEGER, find_largest_lucky_integer,
};
pub use parse::{ParseError, ParsedLine, SkippedToken, parse_ints, parse_line};
