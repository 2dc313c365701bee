//! Command handlers. Each submodule owns one subcommand.

pub mod book;
pub mod completions;
pub mod config;
pub mod courses;
pub mod init;
pub mod services;
pub mod slots;
