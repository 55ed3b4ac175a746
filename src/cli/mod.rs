//! CLI module for navtools - command-line interface and subcommands.

pub mod commands;

pub use commands::Cli;
