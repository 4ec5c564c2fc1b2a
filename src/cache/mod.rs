pub mod keys;
pub mod structs;

pub use keys::{QueryKey, QueryKind};
pub use structs::QueryCache;
