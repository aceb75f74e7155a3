//! Durable store implementations.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - PostgreSQL, the production system of record
//! - [`MemoryLinkRepository`] - embedded process-local store for development and tests

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
