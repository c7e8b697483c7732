//! Colors and style builders

pub mod palette;
pub mod styles;
