mod user_directory;
mod memory_directory;

pub use user_directory::{contains_pattern, UserDbClient, UserDirectory};
pub use memory_directory::InMemoryUserDirectory;
