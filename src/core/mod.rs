//! Core components of the `earlybird` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`EbClient`] and its builder.
//! - The primary [`EbError`] type.
//! - The [`ApiKeys`] credential set shared by the three sources.

/// The main client (`EbClient`), builder, and endpoint configuration.
pub mod client;
/// The primary error type (`EbError`) for the crate.
pub mod error;
/// API-key loading and per-source lookup.
pub mod keys;

// convenient re-exports so most code can just `use crate::core::EbClient`
pub use client::{EbClient, EbClientBuilder};
pub use error::EbError;
pub use keys::ApiKeys;
