pub mod arithmetic;
pub mod collections;
pub mod error;
pub mod text;

// Re-export commonly used types
pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");
