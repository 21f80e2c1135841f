//! Core domain logic (protocol-agnostic)
//!
//! Everything the adapters share: configuration, the error taxonomy,
//! the document schema declaration, and the wire types of the
//! service contract. The verification sequence itself lives in
//! `harness/`, which composes this module with the HTTP client.

pub mod config;
pub mod error;
pub mod schema;
pub mod types;
