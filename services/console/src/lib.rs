//! Rover Console Library Crate
//!
//! Configuration loading and the terminal adapters for the rover session.
//! The `rover-console` binary is a thin wrapper around this library.

pub mod config;
pub mod console;
