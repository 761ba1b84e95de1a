//! UUID generator and related types.

use crate::Uuid;

pub mod with_rand08;

/// A trait that defines the random number generator interface for [`Generator`].
///
/// Implementations used in production should draw from a cryptographically secure source. If
/// the source fails, implementations are expected to panic as [`rand::RngCore::fill_bytes`] does.
pub trait RandSource {
    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// A trait that defines the system clock interface for [`Generator`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in milliseconds.
    fn unix_ts_ms(&mut self) -> u64;
}

/// The default [`TimeSource`] that uses [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        use std::time;
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_millis() as u64
    }
}

/// Represents a UUID generator that combines a random number generator and a system clock.
///
/// The generator holds no state besides its two sources; each call produces an independent
/// value. Serialize access through a lock or give each thread its own instance when sharing it
/// across threads.
///
/// # Examples
///
/// ```rust
/// use uuid22::Generator;
///
/// let mut g = Generator::with_rand08(rand::rngs::OsRng);
/// let x = g.generate_v7();
/// assert_eq!(x.version(), 7);
///
/// let y = g.generate_v7_at(1_710_000_000_000);
/// assert_eq!(y.time(), Some(1_710_000_000_000));
///
/// assert_eq!(g.generate_v4().version(), 4);
/// ```
///
/// # Generator functions
///
/// | Method              | Version | Timestamp |
/// | ------------------- | ------- | --------- |
/// | [`generate_v4`]     | 4       | -         |
/// | [`generate_v7`]     | 7       | Now       |
/// | [`generate_v7_at`]  | 7       | Argument  |
///
/// [`generate_v4`]: Generator::generate_v4
/// [`generate_v7`]: Generator::generate_v7
/// [`generate_v7_at`]: Generator::generate_v7_at
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T> {
    rand_source: R,
    time_source: T,
}

impl<R, T> Generator<R, T> {
    /// Creates a generator with a random number generator and a system clock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid22::generator::{with_rand08, Generator, TimeSource};
    ///
    /// struct FixedClock(u64);
    ///
    /// impl TimeSource for FixedClock {
    ///     fn unix_ts_ms(&mut self) -> u64 {
    ///         self.0
    ///     }
    /// }
    ///
    /// let mut g = Generator::with_rand_and_time_sources(
    ///     with_rand08::Adapter(rand::thread_rng()),
    ///     FixedClock(0x0123_4567_89ab),
    /// );
    /// assert_eq!(g.generate_v7().time(), Some(0x0123_4567_89ab));
    /// ```
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            rand_source,
            time_source,
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R> Generator<R, StdSystemTime> {
    /// Creates a generator with a random number generator and the system clock.
    pub const fn new(rand_source: R) -> Self {
        Self::with_rand_and_time_sources(rand_source, StdSystemTime)
    }
}

impl<R: RandSource, T> Generator<R, T> {
    /// Generates a new UUIDv4 object.
    pub fn generate_v4(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rand_source.fill_bytes(&mut bytes);
        Uuid::from_fields_v4(bytes)
    }

    /// Generates a new UUIDv7 object from the `unix_ts_ms` passed.
    ///
    /// Only the lowest 48 bits of `unix_ts_ms` are used. The random number generator is asked
    /// for the 10 bytes that follow the timestamp, nothing more.
    pub fn generate_v7_at(&mut self, unix_ts_ms: u64) -> Uuid {
        let mut rand_bytes = [0u8; 10];
        self.rand_source.fill_bytes(&mut rand_bytes);
        Uuid::from_fields_v7(unix_ts_ms, rand_bytes)
    }
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Generates a new UUIDv7 object from the current timestamp.
    pub fn generate_v7(&mut self) -> Uuid {
        let unix_ts_ms = self.time_source.unix_ts_ms();
        self.generate_v7_at(unix_ts_ms)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv7 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid22::Generator;
///
/// Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for Generator<R, T> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_v7())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> core::iter::FusedIterator for Generator<R, T> {}
