//! Command implementations for breathe.

mod session;

pub use session::{load_config, load_config_from, resolve_style, session};
