// Library interface for the Datadog Kubernetes MCP server
// Exposes modules for testing and embedding

pub mod config;
pub mod datadog;
pub mod error;
pub mod handlers;
pub mod server;
pub mod utils;

// Re-export commonly used types
pub use config::ClientConfig;
pub use datadog::DatadogClient;
pub use error::{DatadogError, Result};
