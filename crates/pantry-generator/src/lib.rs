//! Identifier generators.
//!
//! A [`Generator`] produces candidate identifiers without ever looking at
//! which identifiers are in use; resolving uniqueness is the allocator's job.

mod clock;
pub mod composite;
pub mod seq;
pub mod source;
pub mod strong;

pub use clock::{Clock, SystemClock};
pub use composite::{CompositeId, CompositeSource};
pub use seq::SeqGenerator;
pub use source::Source;
pub use strong::StrongSource;

use pantry_core::Identifier;

/// Trait for generating identifiers.
///
/// Implementations are pure generators that don't consult any collection of
/// identifiers in use.
///
/// Implementations can vary from random UUIDs to deterministic counters.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<Identifier>;
    /// Generates a value that converts into a non-empty identifier.
    ///
    /// Generation is infallible, and successive values should be distinct
    /// with overwhelming probability.
    fn generate(&self) -> Self::Output;
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    type Output = G::Output;

    fn generate(&self) -> Self::Output {
        (**self).generate()
    }
}

impl<G: Generator + ?Sized> Generator for std::sync::Arc<G> {
    type Output = G::Output;

    fn generate(&self) -> Self::Output {
        (**self).generate()
    }
}
