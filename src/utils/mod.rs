//! Utility modules

pub mod digits;
pub mod memory_directory;

pub use digits::*;
pub use memory_directory::*;
