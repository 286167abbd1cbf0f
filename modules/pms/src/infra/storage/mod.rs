mod json_file;
mod memory;

pub use json_file::JsonFileSessionStorage;
pub use memory::InMemorySessionStorage;
