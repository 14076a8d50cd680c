use crate::clock::{Clock, SystemClock};
use crate::Generator;
use pantry_core::Identifier;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// Distinguishes sources seeded within the same clock tick.
static SEED_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// An identifier assembled from a timestamp and two pseudo-random fragments.
///
/// Rendered as `{millis:x}-{first:08x}-{second:08x}`, for example
/// `18f0a3c2b10-1a2b3c4d-00ff00ff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositeId {
    millis: i64,
    first: u32,
    second: u32,
}

impl CompositeId {
    /// Milliseconds since the Unix epoch at generation time.
    pub fn millis(&self) -> i64 {
        self.millis
    }

    pub fn fragments(&self) -> (u32, u32) {
        (self.first, self.second)
    }
}

impl fmt::Display for CompositeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}-{:08x}-{:08x}", self.millis, self.first, self.second)
    }
}

impl From<CompositeId> for Identifier {
    fn from(val: CompositeId) -> Self {
        Identifier::new_unchecked(val.to_string())
    }
}

/// Fallback source for environments without a usable OS random generator.
///
/// Needs nothing beyond a clock and a pseudo-random stream, so it never fails.
/// The stream is seeded from the clock unless a seed is given, which makes a
/// seeded source reproducible under a fixed clock.
pub struct CompositeSource<C: Clock = SystemClock> {
    clock: C,
    rng: Mutex<StdRng>,
}

impl CompositeSource<SystemClock> {
    /// Creates a source backed by the system clock, seeded from it.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates a source backed by the system clock with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_clock_and_seed(SystemClock, seed)
    }
}

impl Default for CompositeSource<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CompositeSource<C> {
    pub fn with_clock(clock: C) -> Self {
        let nanos = clock.now().as_nanosecond() as u64;
        let sequence = SEED_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        // golden-ratio multiply spreads consecutive sequence values across all bits
        let seed = nanos ^ sequence.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Self::with_clock_and_seed(clock, seed)
    }

    pub fn with_clock_and_seed(clock: C, seed: u64) -> Self {
        Self {
            clock,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn next_composite_id(&self) -> CompositeId {
        let millis = self.clock.now().as_millisecond();
        let mut rng = self.rng.lock();
        // two separate draws, mirroring two independent fragments
        let first = rng.gen::<u32>();
        let second = rng.gen::<u32>();
        CompositeId {
            millis,
            first,
            second,
        }
    }
}

impl<C: Clock> fmt::Debug for CompositeSource<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeSource").finish_non_exhaustive()
    }
}

impl<C: Clock + 'static> Generator for CompositeSource<C> {
    type Output = CompositeId;

    fn generate(&self) -> Self::Output {
        self.next_composite_id()
    }
}
