//! # CLI Layer
//!
//! The command table, the renderers, and the output sinks. This is the only
//! layer that knows what terminal output looks like; everything below it
//! returns structured types.

pub mod output;
pub mod registry;
pub mod render;
