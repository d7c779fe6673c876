//! Input adapters for the Lyapunov explorer.
//!
//! This module contains adapters that receive input from various sources
//! and translate them into config edits.

#[cfg(feature = "gui")]
pub mod gui;
