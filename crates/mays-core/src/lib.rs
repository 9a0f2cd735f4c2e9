//! # Mays Core
//!
//! The domain layer of the Mays API: entities, the ownership policy, the
//! comment and like services, and the projection of entities to DTOs.
//! Storage and identity are reached only through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod policy;
pub mod ports;
pub mod projection;
pub mod service;

pub use error::{DomainError, RepoError};
pub use policy::ActingUser;
