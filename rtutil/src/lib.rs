//! Odds and ends shared by the roadtrip crates and tools: logging setup, JSON I/O, and a few
//! collection helpers.

#[macro_use]
extern crate log;

pub use crate::collections::{contains_duplicates, Counter};
pub use crate::io::{read_json, to_json, write_json};

mod collections;
mod io;
pub mod logger;
