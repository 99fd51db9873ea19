//! Beadloom Library
//!
//! This library provides the core functionality for the Beadloom bead
//! pattern designer: the board grid model, palette management, paint and
//! transform engines, image quantization, pattern persistence, and PNG
//! export.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod export;
pub mod models;
pub mod services;
pub mod store;
pub mod tui;
