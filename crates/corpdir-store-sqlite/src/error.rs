//! Error type for `corpdir-store-sqlite`.
//!
//! Missing rows are not errors — gets return `None` and updates/deletes
//! return `false`. This enum covers only genuine persistence failures:
//! connectivity, malformed queries, and constraint violations (a dangling
//! foreign key on insert surfaces here).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
