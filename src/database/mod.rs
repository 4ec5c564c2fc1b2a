pub mod connection;
pub mod players;
pub mod registrations;
pub mod scores;
pub mod setup;
pub mod tournaments;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
