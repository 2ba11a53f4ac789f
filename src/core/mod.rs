// Public modules
pub mod error;
pub mod icons;
pub mod output;
pub mod replace;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
