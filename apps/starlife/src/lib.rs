//! # Starlife Application Library
//!
//! The presentation layer around `starlife-core`: CLI commands, the HTTP
//! API, catalog configuration and stage playback. The binary in `main.rs`
//! is a thin wrapper over these modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod playback;
