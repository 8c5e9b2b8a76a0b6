//! Recurrence rule model, validation, expansion and rendering.

pub mod build;
pub mod core;
pub mod expand;
pub mod validation;
