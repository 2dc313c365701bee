//! Form surface adapters.

mod memory;

pub use memory::MemoryFormSurface;
