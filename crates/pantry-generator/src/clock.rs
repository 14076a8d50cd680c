use jiff::Timestamp;

pub trait Clock: Send + Sync {
    /// Returns the current time of the clock
    fn now(&self) -> Timestamp;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[cfg(test)]
pub(crate) mod test_clock {
    use crate::clock::Clock;
    use jiff::{SignedDuration, Timestamp};
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    pub(crate) struct TestClock {
        inner: Arc<Mutex<TestClockState>>,
    }

    struct TestClockState {
        now: Timestamp,
    }

    impl TestClock {
        pub(crate) fn new(now: Timestamp) -> Self {
            Self {
                inner: Arc::new(Mutex::new(TestClockState { now })),
            }
        }

        pub(crate) fn advance(&self, by: SignedDuration) {
            let mut state = self
                .inner
                .lock()
                .expect("test clock lock should not be poisoned");
            state.now = state
                .now
                .checked_add(by)
                .expect("advanced test clock stays in range");
        }
    }

    impl Clock for TestClock {
        fn now(&self) -> Timestamp {
            self.inner
                .lock()
                .expect("test clock lock should not be poisoned")
                .now
        }
    }

    #[test]
    fn test_clock_works() {
        // test that the clock starts at the given time
        let base = Timestamp::from_second(0).unwrap();
        let clock = TestClock::new(base);
        assert_eq!(clock.now(), base);

        // the clock should move forward after advance
        clock.advance(SignedDuration::from_millis(1500));
        assert_eq!(clock.now().as_millisecond(), 1500);
    }
}
