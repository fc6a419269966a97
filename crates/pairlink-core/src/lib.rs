//! # pairlink-core
//!
//! Core types for the pairlink wallet connection handoff resolver.
//! This crate defines the shared vocabulary used by the resolver: the
//! wallet-adapter registry wire shape, the per-session device descriptor,
//! and the resolved activation entries handed to the presentation layer.

pub mod error;
pub mod types;

pub use error::{PairlinkError, Result};
pub use types::*;
