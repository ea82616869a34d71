//! Core components of the `ghostfolio-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`GhostfolioClient`] and its builder.
//! - The primary [`GfError`] type.
//! - The [`ApiRequest`] descriptor every endpoint is expressed as.
//! - Shared data models like [`DateRange`] and [`SymbolProfile`].

/// The main client (`GhostfolioClient`), builder, and session handling.
pub mod client;
/// The primary error type (`GfError`) for the crate.
pub mod error;
/// Shared data models used across multiple API modules.
pub mod models;
pub(crate) mod net;
pub(crate) mod request;

// convenient re-exports so most code can just `use crate::core::GhostfolioClient`
pub use client::{GhostfolioClient, GhostfolioClientBuilder};
pub use error::GfError;
pub use models::{ActivityType, DataSource, DateRange, GroupBy, SymbolProfile};
pub use request::{ApiRequest, ApiVersion};
