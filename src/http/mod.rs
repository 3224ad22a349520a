pub mod dispatcher;
pub mod request;

// Re-export commonly used types for convenient access
pub use dispatcher::{Dispatcher, BASE_URL};
pub use request::Request;
