//! Database module exports.

mod models;
mod mongo;
pub mod schema;

#[allow(unused_imports)]
pub use models::MergeSettings;
pub use mongo::Database;
