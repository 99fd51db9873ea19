//! Service layer for business logic.
//!
//! This module contains services that encapsulate persistence and session
//! coordination between the models, the engines, and the UI layers.

pub mod palette_store;
pub mod patterns;
pub mod session;

// Re-export commonly used types and functions
pub use palette_store::PaletteService;
pub use patterns::PatternService;
pub use session::{Intent, Session};
