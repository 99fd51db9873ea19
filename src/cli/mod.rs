//! CLI command handlers for Beadloom.
//!
//! This module provides headless, scriptable access to Beadloom's core
//! functionality for automation, testing, and CI/CD integration.

pub mod common;
pub mod convert;
pub mod info;
pub mod new;
pub mod palette;
pub mod preset;
pub mod render;
pub mod templates;
pub mod transform;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use convert::ConvertArgs;
pub use info::InfoArgs;
pub use new::NewArgs;
pub use palette::PaletteArgs;
pub use preset::PresetArgs;
pub use render::RenderArgs;
pub use templates::TemplatesArgs;
pub use transform::TransformArgs;
pub use validate::ValidateArgs;
