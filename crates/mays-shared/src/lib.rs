//! # Mays Shared
//!
//! Wire types shared by the API server and its clients.
//! Nothing in here knows about storage or identity.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
