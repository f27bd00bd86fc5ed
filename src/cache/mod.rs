// Cache module for local filesystem caching.
// Stores puzzle inputs per session token so repeat lookups never hit the network.

pub mod paths;
pub mod store;

pub use paths::input_path;
pub use store::{read_input, write_text};
