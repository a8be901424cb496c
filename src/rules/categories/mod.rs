//! Check categories
//!
//! One module per display category, in execution order.

pub mod dependencies;
pub mod quality;
pub mod security;
pub mod structure;
pub mod testing;
