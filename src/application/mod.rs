//! Application layer - Commands and Handlers.
//!
//! This layer validates requests and coordinates the domain core with the
//! AI advisor and content extractor ports.

pub mod handlers;

pub use handlers::*;
