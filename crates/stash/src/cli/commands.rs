//! # Startup
//!
//! 1. **Argument Parsing**: launch flags via clap
//! 2. **Logging**: tracing subscriber on stderr
//! 3. **Configuration**: layered `StashConfig`, CLI flags on top
//! 4. **Session**: an interactive [`Shell`] over stdin/stdout
//!
//! Errors returned from here are fatal and end the process (see `main.rs`).

use super::logging::init_logging;
use super::setup::Cli;
use super::shell::Shell;
use clap::Parser;
use stashapp::api::StashApi;
use stashapp::config::StashConfig;
use stashapp::error::Result;
use std::io::{self, IsTerminal};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = StashConfig::load(cli.config.as_deref())?.with_capacity(cli.capacity)?;
    tracing::debug!(
        capacity = config.capacity,
        name_max_len = config.name_max_len,
        kind_max_len = config.kind_max_len,
        "configuration loaded"
    );

    let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
    let api = StashApi::new(&config);
    let stdin = io::stdin();
    let mut shell = Shell::new(api, stdin.lock(), io::stdout().lock(), interactive);
    shell.run()
}
