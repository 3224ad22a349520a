pub mod client;
pub mod error;
pub mod http;
pub mod logger;
pub mod models;

// Re-export commonly used types
pub use client::SraClient;
pub use error::{Result, SraError};
