//! # CLI Behavior
//!
//! This is **one possible UI client** for stash. It is the only place that knows
//! about stdin, stdout, screen clearing and exit codes.
//!
//! ## Session
//!
//! `stash` starts an interactive menu over an empty backpack:
//!
//! ```text
//! 1. Add an item        4. Sort items
//! 2. Remove an item     5. Binary search by name
//! 3. List all items     0. Exit
//! ```
//!
//! The backpack lives only as long as the session. End of input behaves like `0`.
//!
//! When both stdin and stdout are terminals the screen is cleared before each menu
//! and the shell waits for ENTER after each operation. Piped sessions skip both, so
//! scripted input like `printf '3\n0\n' | stash` works.
//!
//! ## Module Structure
//!
//! - `commands`: Startup wiring (flags, logging, config, shell)
//! - `setup`: Argument parsing via clap
//! - `logging`: tracing subscriber setup
//! - `shell`: Menu loop, prompts and dispatch to the API
//! - `render`: Output formatting (menu, tables, messages)
//! - `styles`: Terminal styling constants

mod commands;
mod logging;
mod render;
pub mod setup;
mod shell;
mod styles;

pub use commands::run;
