pub mod connection;
pub mod errors;
pub mod shared_skills;
pub mod skills;

pub use connection::*;
pub use errors::*;
