//! Database access: initialization, models and movie queries

pub mod init;
pub mod models;
pub mod movies;

pub use init::*;
pub use models::*;
pub use movies::*;
