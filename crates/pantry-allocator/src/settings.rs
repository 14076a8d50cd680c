use typed_builder::TypedBuilder;

/// Which random source an allocator draws its identifiers from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceStrategy {
    /// Strong source if the OS random generator works, composite otherwise.
    #[default]
    Auto,
    /// Always the strong (UUID) source.
    Strong,
    /// Always the composite (clock + pseudo-random) source.
    Composite,
}

/// Configures an [`IdentifierAllocator`](crate::IdentifierAllocator).
#[derive(Debug, Clone, Copy, Default, TypedBuilder)]
pub struct AllocatorSettings {
    #[builder(default)]
    pub strategy: SourceStrategy,
    /// Seed for the composite source's pseudo-random stream.
    ///
    /// Ignored by the strong source. Unseeded composite sources seed
    /// themselves from the clock.
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
}
