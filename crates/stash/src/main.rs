//! # Stash CLI
//!
//! The binary is intentionally thin: everything lives in `src/cli/`, and this file
//! only invokes `cli::run()` and turns a fatal error into an exit code.
//!
//! ## Workspace Structure
//!
//! - `crates/stashapp/` — UI-agnostic library: inventory, ordering, search, commands
//! - `crates/stash/` — this interactive client, depends on `stashapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/stash/src/cli/)                          │
//! │  - clap launch flags + logging setup (setup.rs, logging.rs) │
//! │  - menu loop and prompts (shell.rs)                         │
//! │  - terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/stashapp/src/api.rs)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors from backpack operations are never fatal: the shell prints them and goes
//! back to the menu. Only I/O failures on the terminal itself, or a bad
//! configuration, end the process with a non-zero exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
