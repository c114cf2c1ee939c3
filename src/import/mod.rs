pub mod network_json;
pub mod path_json;
pub mod source;

// Re-export commonly used items
pub use network_json::parse_network;
pub use path_json::parse_path_result;
pub use source::{fetch_text, DataSource, FileSystemSource, PrefetchedSource};
