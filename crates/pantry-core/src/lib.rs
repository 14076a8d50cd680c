//! Core types and traits for pantry identifiers.
//!
//! This crate provides the identifier type and the membership interface
//! shared by the generators and the allocator.

pub mod error;
pub mod identifier;
pub mod taken;

pub use error::CoreError;
pub use identifier::Identifier;
pub use taken::{taken_fn, Taken, TakenFn, Unrestricted};
