//! # Mays Infrastructure
//!
//! Concrete implementations of the ports defined in `mays-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - SeaORM repositories (PostgreSQL, SQLite)
//!
//! The in-memory store and JWT validation are always available.

pub mod auth;
pub mod database;
pub mod memory;
mod repositories;

pub use auth::{JwtConfig, JwtTokenService};
pub use memory::InMemoryDatabase;
pub use repositories::Repositories;
