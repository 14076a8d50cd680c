use crate::composite::CompositeSource;
use crate::Generator;
use pantry_core::Identifier;
use parking_lot::Mutex;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;
use std::sync::OnceLock;
use tracing::warn;
use uuid::{Builder, Uuid};

/// Random UUID (v4) source backed by a cryptographically secure generator,
/// the operating system's by default.
///
/// `generate` never fails: should the generator refuse to produce bytes, the
/// source falls back to a [`CompositeSource`] for that call and logs a warning.
pub struct StrongSource<R = OsRng> {
    rng: Mutex<R>,
    // built on first failure only
    fallback: OnceLock<CompositeSource>,
}

impl StrongSource<OsRng> {
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }

    /// Reports whether the OS random generator can currently produce bytes.
    pub fn probe() -> bool {
        let mut buf = [0_u8; 16];
        OsRng.try_fill_bytes(&mut buf).is_ok()
    }
}

impl Default for StrongSource<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> StrongSource<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
            fallback: OnceLock::new(),
        }
    }

    /// Returns a fresh v4 UUID, or `None` if the generator failed.
    pub fn try_next_uuid(&self) -> Option<Uuid> {
        let mut bytes = [0_u8; 16];
        match self.rng.lock().try_fill_bytes(&mut bytes) {
            Ok(()) => Some(Builder::from_random_bytes(bytes).into_uuid()),
            Err(err) => {
                warn!(error = %err, "secure random source failed; using composite fallback");
                None
            }
        }
    }
}

impl<R> fmt::Debug for StrongSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrongSource").finish_non_exhaustive()
    }
}

impl<R> Generator for StrongSource<R>
where
    R: RngCore + CryptoRng + Send + 'static,
{
    type Output = Identifier;

    fn generate(&self) -> Self::Output {
        match self.try_next_uuid() {
            Some(uuid) => uuid.into(),
            None => self
                .fallback
                .get_or_init(CompositeSource::new)
                .generate()
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use uuid::Version;

    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!("only try_fill_bytes is used")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("only try_fill_bytes is used")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!("only try_fill_bytes is used")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source unavailable"))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn produces_v4_uuids() {
        let source = StrongSource::new();
        let uuid = source.try_next_uuid().unwrap();
        assert_eq!(uuid.get_version(), Some(Version::Random));

        let id = source.generate();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert!(source.fallback.get().is_none());
    }

    #[test]
    fn os_rng_is_available() {
        assert!(StrongSource::probe());
    }

    #[test]
    fn no_duplicates_across_many_calls() {
        let source = StrongSource::new();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(source.generate()), "duplicate uuid identifier");
        }
    }

    #[test]
    fn broken_rng_degrades_to_composite() {
        let source = StrongSource::with_rng(BrokenRng);
        assert!(source.try_next_uuid().is_none());
        assert!(source.fallback.get().is_none());

        let id = source.generate();
        assert!(!id.is_empty());
        assert!(Uuid::parse_str(id.as_str()).is_err());
        assert_eq!(id.as_str().split('-').count(), 3);
        assert!(source.fallback.get().is_some());

        // the fallback keeps its stream across calls
        assert_ne!(source.generate(), id);
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StrongSource>();
    }
}
