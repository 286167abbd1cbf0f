mod memory;

pub use memory::InMemoryDirectory;
