pub mod protocol;
pub mod router;
pub mod schema;

pub use protocol::Server;
