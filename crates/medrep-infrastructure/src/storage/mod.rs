//! Session storage adapters
//!
//! Implementations of the [`SessionStorage`](medrep_domain::ports::SessionStorage)
//! port: a process-local map and a JSON file that survives restarts.

pub mod file;
pub mod memory;

pub use file::FileSessionStorage;
pub use memory::MemorySessionStorage;
