//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::Uuid;
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        // the generator holds no invariant that a panic while locked could break
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv7 object from the current timestamp.
///
/// This function employs a global generator that is safe to call from multiple threads. On Unix,
/// this function resets the generator when the process ID changes (i.e., upon process forks) to
/// prevent collisions across processes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid22::uuid7();
/// println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{}", uuid.encode()); // e.g., "bfZ7OIP2-pfpF0ERqj3dka"
///
/// let uuid_string: String = uuid22::uuid7().to_string();
/// ```
pub fn uuid7() -> Uuid {
    lock_global_gen().get_mut().generate_v7()
}

/// Generates a UUIDv7 object from the `unix_ts_ms` passed.
///
/// Only the lowest 48 bits of `unix_ts_ms` are used.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid22::uuid7_at(1_710_000_000_000);
/// assert_eq!(uuid.time(), Some(1_710_000_000_000));
/// assert!(uuid.to_string().starts_with("018e23f1-4c00-7"));
/// ```
pub fn uuid7_at(unix_ts_ms: u64) -> Uuid {
    lock_global_gen().get_mut().generate_v7_at(unix_ts_ms)
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid22::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().get_mut().generate_v4()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{Generator, RandSource, StdSystemTime};

    /// The number of bytes the global generator produces before reseeding from [`OsRng`].
    const RESEED_THRESHOLD: u64 = 1024 * 64;

    /// The random number generator of the global generator.
    ///
    /// The global generator currently employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to
    /// emulate the strategy used by [`rand::rngs::ThreadRng`].
    pub struct GlobalGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl RandSource for GlobalGenRng {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand::RngCore::fill_bytes(&mut self.0, dest)
        }
    }

    impl GlobalGenRng {
        fn new() -> Self {
            let core = ChaCha12Core::from_rng(OsRng)
                .expect("uuid22: could not initialize global generator");
            Self(ReseedingRng::new(core, RESEED_THRESHOLD, OsRng))
        }
    }

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: Generator<GlobalGenRng, StdSystemTime>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            let inner = Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: Generator::new(GlobalGenRng::new()),
            };
            tracing::debug!(
                reseed_threshold = RESEED_THRESHOLD,
                "initialized global UUID generator"
            );
            inner
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`Generator`] instance, resetting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut Generator<GlobalGenRng, StdSystemTime> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::debug!(
                    old_pid = self.pid,
                    new_pid = std::process::id(),
                    "process ID changed; reinitializing global UUID generator"
                );
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}
