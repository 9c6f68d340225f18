//! # Petfolio Core
//!
//! Domain types and use cases for the Petfolio pet registry.
//!
//! This crate holds the data shapes shared between the HTTP server and any
//! future front ends, plus the pet use cases. The registry is currently a
//! scaffold: there is no persistence layer, so the lookup use case returns a
//! placeholder record that echoes the requested identifier.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! petfolio-core = "0.1"
//! ```
//!
//! ### Basic Example
//!
//! ```rust
//! use petfolio_core::{get_by_id, PetType};
//!
//! let record = get_by_id(42);
//! assert_eq!(record.id, 42);
//! assert_eq!(record.pet_type, PetType::Dog);
//! ```
//!
//! ## Features
//!
//! - `serde`: enables JSON (de)serialization of the domain types.
//! - `openapi`: enables `utoipa` schema derivation (implies `serde`).

pub mod pet;
pub mod types;

// Re-export types
pub use types::{PetRecord, PetType};

// Re-export use cases
pub use pet::{get_by_id, placeholder_birth_date, PLACEHOLDER_NAME};
