//! Identifier allocation for recipes, timers and list items.
//!
//! This crate provides the allocator that turns generated candidates into
//! identifiers guaranteed to be free in a caller's collection. Core types
//! are re-exported from `pantry_core`.

pub mod allocator;
pub mod error;
pub mod settings;

pub use allocator::{ensure_unique, generate, IdentifierAllocator};
pub use error::AllocError;
pub use pantry_core::{taken_fn, Identifier, Taken, Unrestricted};
pub use settings::{AllocatorSettings, SourceStrategy};
