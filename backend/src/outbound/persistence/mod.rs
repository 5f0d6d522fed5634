//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Row structs (`models.rs`) and the table definition (`schema.rs`) are
//! internal to this module. The adapter only translates between those rows
//! and [`crate::domain::UserProfile`] and maps driver failures onto
//! [`crate::domain::ports::ProfileRepositoryError`].
//!
//! # Example
//!
//! ```no_run
//! use profile_backend::outbound::persistence::{DbPool, DieselProfileRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), profile_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/profiles")).await?;
//! let repo = DieselProfileRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_profile_repository;
mod models;
mod pool;
mod schema;

pub use diesel_profile_repository::DieselProfileRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
