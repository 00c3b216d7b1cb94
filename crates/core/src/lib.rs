//! Soundstage Core - Shared types library.
//!
//! This crate provides common types used across all Soundstage components:
//! - `storefront` - Public-facing headphones shop
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP handling,
//! no template rendering. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, ratings, and
//!   order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
