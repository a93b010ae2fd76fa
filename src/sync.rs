use rand_chacha::ChaCha8Rng;

use crate::game::RoundEngine;

#[cfg(feature = "std")]
struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn into_inner(self) -> T {
        self.0
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use spin::Mutex;

/// A [`RoundEngine`] behind one exclusive lock.
///
/// The engine itself has no internal synchronization. Wrap it here when
/// several threads drive the same round; every call runs with the whole round
/// state locked.
///
/// ```
/// use game21::{RoundEngine, SharedEngine};
///
/// let shared = SharedEngine::new(RoundEngine::new(5));
/// shared.with(|engine| engine.deal_initial());
/// assert_eq!(shared.with(|engine| engine.player_hand().len()), 2);
/// ```
pub struct SharedEngine<R = ChaCha8Rng>(Mutex<RoundEngine<R>>);

impl<R> SharedEngine<R> {
    /// Wraps an engine.
    #[must_use]
    pub const fn new(engine: RoundEngine<R>) -> Self {
        Self(Mutex::new(engine))
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<T>(&self, f: impl FnOnce(&mut RoundEngine<R>) -> T) -> T {
        let mut engine = self.0.lock();
        f(&mut engine)
    }

    /// Unwraps the engine.
    #[must_use]
    pub fn into_inner(self) -> RoundEngine<R> {
        self.0.into_inner()
    }
}
