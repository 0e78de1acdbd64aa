//! Troop Client: connection bootstrap for collaborative live coding.
//!
//! A library for resolving the connection to a Troop server from
//! defaults, a config file, command-line flags, and terminal prompts.

pub mod config;
pub mod interpreter;
pub mod session;
