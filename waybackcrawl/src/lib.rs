pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{resolve_output_path, scan_failure_message};
