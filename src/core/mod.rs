//! Core types for breathe.
//!
//! Phases and the fixed technique table they belong to.

mod phase;
mod technique;

pub use phase::{cycle, Phase, PhaseKind};
pub use technique::Technique;
