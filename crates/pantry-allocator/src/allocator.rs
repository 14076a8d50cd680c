use crate::error::{AllocError, Result};
use crate::settings::{AllocatorSettings, SourceStrategy};
use pantry_core::{Identifier, Taken};
use pantry_generator::{Generator, Source};
use std::num::NonZeroU32;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Hands out identifiers for new domain entities.
///
/// The allocator wraps a [`Generator`] and handles:
/// - Prefixing generated identifiers
/// - Honouring a caller-desired identifier when it is free
/// - Retrying generation until a candidate is not taken
///
/// It holds no record of what it has handed out; the caller's [`Taken`]
/// collection is the only source of truth and is only ever read.
#[derive(Debug)]
pub struct IdentifierAllocator<G = Source> {
    generator: G,
}

impl IdentifierAllocator<Source> {
    /// Creates an allocator over the best random source the environment offers.
    pub fn new() -> Self {
        Self::with_generator(Source::detect())
    }

    pub fn from_settings(settings: AllocatorSettings) -> Self {
        let source = match settings.strategy {
            SourceStrategy::Auto => match (Source::detect(), settings.seed) {
                (Source::Composite(_), Some(seed)) => Source::composite(Some(seed)),
                (source, _) => source,
            },
            SourceStrategy::Strong => Source::strong(),
            SourceStrategy::Composite => Source::composite(settings.seed),
        };
        debug!(source = source.name(), "identifier allocator configured");
        Self::with_generator(source)
    }
}

impl Default for IdentifierAllocator<Source> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Generator> IdentifierAllocator<G> {
    /// Creates an allocator over a custom generator.
    pub fn with_generator(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generates a fresh identifier, `prefix` prepended verbatim.
    ///
    /// An empty prefix yields the bare generated value.
    pub fn generate(&self, prefix: &str) -> Identifier {
        let body: Identifier = self.generator.generate().into();
        Identifier::prefixed(prefix, &body)
    }

    /// Generates prefixed identifiers until one is not taken.
    pub fn generate_unique<T: Taken + ?Sized>(&self, prefix: &str, taken: &T) -> Identifier {
        loop {
            let candidate = self.generate(prefix);
            if !taken.contains(candidate.as_str()) {
                return candidate;
            }
            trace!(candidate = %candidate, "generated identifier already taken; retrying");
        }
    }

    /// Resolves an identifier that is not in `taken`.
    ///
    /// The desired identifier, trimmed of surrounding whitespace, is returned
    /// as-is whenever it is non-empty and free. Otherwise identifiers are
    /// generated (without prefix) until one is free.
    ///
    /// There is no bound on the number of attempts. With a random source a
    /// second attempt is already vanishingly rare, but a `taken` that claims
    /// every value will never return; use
    /// [`try_ensure_unique`](Self::try_ensure_unique) when `taken` cannot be
    /// trusted.
    pub fn ensure_unique<T: Taken + ?Sized>(&self, desired: Option<&str>, taken: &T) -> Identifier {
        if let Some(id) = accept_desired(desired, taken) {
            return id;
        }
        self.generate_unique("", taken)
    }

    /// Like [`ensure_unique`](Self::ensure_unique), but gives up after
    /// `max_attempts` generated candidates.
    ///
    /// The desired identifier does not count as an attempt.
    pub fn try_ensure_unique<T: Taken + ?Sized>(
        &self,
        desired: Option<&str>,
        taken: &T,
        max_attempts: NonZeroU32,
    ) -> Result<Identifier> {
        if let Some(id) = accept_desired(desired, taken) {
            return Ok(id);
        }

        for attempt in 1..=max_attempts.get() {
            let candidate = self.generate("");
            if !taken.contains(candidate.as_str()) {
                return Ok(candidate);
            }
            trace!(candidate = %candidate, attempt, "generated identifier already taken; retrying");
        }

        debug!(attempts = max_attempts.get(), "gave up resolving a free identifier");
        Err(AllocError::Exhausted {
            attempts: max_attempts.get(),
        })
    }
}

/// Returns the trimmed desired identifier if it is non-empty and free.
fn accept_desired<T: Taken + ?Sized>(desired: Option<&str>, taken: &T) -> Option<Identifier> {
    let desired = desired.map(str::trim).unwrap_or_default();
    if desired.is_empty() {
        return None;
    }
    if taken.contains(desired) {
        debug!(desired, "desired identifier is taken; generating a new one");
        return None;
    }
    Some(Identifier::new_unchecked(desired))
}

fn shared() -> &'static IdentifierAllocator {
    static SHARED: OnceLock<IdentifierAllocator> = OnceLock::new();
    SHARED.get_or_init(IdentifierAllocator::new)
}

/// Generates an identifier with the process-wide default allocator.
pub fn generate(prefix: &str) -> Identifier {
    shared().generate(prefix)
}

/// Resolves a unique identifier with the process-wide default allocator.
pub fn ensure_unique<T: Taken + ?Sized>(desired: Option<&str>, taken: &T) -> Identifier {
    shared().ensure_unique(desired, taken)
}
