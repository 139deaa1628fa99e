//! breathe - A guided breathing visualizer for the terminal
//!
//! Presents a small menu of breathing techniques and then loops through the
//! chosen technique's phases, redrawing the current phase until interrupted.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::Cli;
pub use crate::core::{Phase, Technique};
pub use error::BreatheError;
