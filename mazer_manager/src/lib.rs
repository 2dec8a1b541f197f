//! MAZER Manager Library
//!
//! The pieces behind the `mazer` binary: the interactive session, the
//! terminal renderer and the subcommands.

pub mod commands;
pub mod render;
pub mod session;

pub use session::{MazeSession, SolveOutcome, Trigger, TriggerOutcome};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
