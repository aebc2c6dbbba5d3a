//! Interactive console front-end for the Regolith rover simulator.
//!
//! Wires the terminal [`io::ConsoleIo`] collaborator into the menu
//! [`shell::Shell`] and runs the mission loop until the operator exits.
//! Diagnostics from the mission core go to stderr, filtered by `RUST_LOG`.

#![forbid(unsafe_code)]

mod io;
mod shell;

use crate::io::ConsoleIo;
use crate::shell::Shell;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    Shell::new(ConsoleIo::new()).run();
}
