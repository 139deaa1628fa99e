//! Output formatting for breathe.
//!
//! This module renders the playback status line.

mod status;

pub use status::*;
