use parking_lot::Mutex;
use std::cell::RefCell;

/// Selects how a store guards its state.
///
/// Every public store operation runs as a single critical section through
/// [`LockMode::with`]. Helpers that need to compose several steps work on
/// the unguarded state handed to the closure and never re-enter the guard.
pub trait LockMode: sealed::Sealed {
    const THREAD_SAFE: bool;

    type Guarded<V>;

    fn guard<V>(value: V) -> Self::Guarded<V>;

    /// Runs `f` with exclusive access to the guarded value.
    fn with<V, R>(guarded: &Self::Guarded<V>, f: impl FnOnce(&mut V) -> R) -> R;

    /// Exclusive access without acquiring anything; the borrow checker
    /// already proves there is no other user.
    fn get_mut<V>(guarded: &mut Self::Guarded<V>) -> &mut V;

    fn into_inner<V>(guarded: Self::Guarded<V>) -> V;
}

/// Single-threaded stores. Calling back into the same store from inside a
/// critical section panics rather than deadlocking.
#[derive(Debug, Copy, Clone, Default)]
pub struct Unlocked;

/// Thread-safe stores, guarded by one [`parking_lot::Mutex`].
///
/// Reads take the same exclusive lock as writes.
#[derive(Debug, Copy, Clone, Default)]
pub struct Locked;

impl LockMode for Unlocked {
    const THREAD_SAFE: bool = false;

    type Guarded<V> = RefCell<V>;

    fn guard<V>(value: V) -> Self::Guarded<V> {
        RefCell::new(value)
    }

    fn with<V, R>(guarded: &Self::Guarded<V>, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut *guarded.borrow_mut())
    }

    fn get_mut<V>(guarded: &mut Self::Guarded<V>) -> &mut V {
        guarded.get_mut()
    }

    fn into_inner<V>(guarded: Self::Guarded<V>) -> V {
        guarded.into_inner()
    }
}

impl LockMode for Locked {
    const THREAD_SAFE: bool = true;

    type Guarded<V> = Mutex<V>;

    fn guard<V>(value: V) -> Self::Guarded<V> {
        Mutex::new(value)
    }

    fn with<V, R>(guarded: &Self::Guarded<V>, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut *guarded.lock())
    }

    fn get_mut<V>(guarded: &mut Self::Guarded<V>) -> &mut V {
        guarded.get_mut()
    }

    fn into_inner<V>(guarded: Self::Guarded<V>) -> V {
        guarded.into_inner()
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Unlocked {}
    impl Sealed for super::Locked {}
}
