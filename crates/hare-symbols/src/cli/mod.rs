//! CLI command implementations.

mod display;

pub mod lookup;
pub mod settings;
pub mod symbols;
pub mod task;
