//! # CLI Layer
//!
//! One possible UI client for shortn, and the only code that touches the
//! terminal, the clipboard, the browser or the process exit code.
//!
//! - `setup`: clap definitions
//! - `commands`: context setup, dispatch to `ShortnApi`, per-command handlers
//! - `render`: turns `CmdResult`s into colored terminal output

mod commands;
mod render;
mod setup;

pub use commands::run;
