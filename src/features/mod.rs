//! Feature implementations for breathe.
//!
//! - Technique menu and selection
//! - Phase playback

pub mod menu;
pub mod playback;
