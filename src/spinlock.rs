// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
On the wasm main thread, we can't necessarily lock.

Engine state lives behind a reader/writer spinlock instead.  Closures passed to
[`Spinlock::read`] and [`Spinlock::write`] must be short and must never call
back into a sink, since a sink may log through the same engine.
*/

use std::cell::UnsafeCell;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

const FREE: u8 = 0;
//up to 254 concurrent readers; a writer holds the whole word
const WRITER: u8 = u8::MAX;

pub(crate) struct Spinlock<T> {
    state: AtomicU8,
    data: UnsafeCell<T>,
}

unsafe impl<T: Send> Send for Spinlock<T> {}
unsafe impl<T: Send + Sync> Sync for Spinlock<T> {}

impl<T> Spinlock<T> {
    pub(crate) const fn new(data: T) -> Self {
        Spinlock {
            state: AtomicU8::new(FREE),
            data: UnsafeCell::new(data),
        }
    }

    /// Runs `f` with exclusive access.
    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        while self
            .state
            .compare_exchange_weak(FREE, WRITER, Acquire, Relaxed)
            .is_err()
        {
            std::hint::spin_loop();
        }
        let _release = Unlock(&self.state, ReleaseKind::Writer);
        // SAFETY: the state word is WRITER, so no other reference exists
        f(unsafe { &mut *self.data.get() })
    }

    /// Runs `f` with shared access.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        while self
            .state
            .fetch_update(Acquire, Relaxed, |readers| {
                (readers < WRITER - 1).then_some(readers + 1)
            })
            .is_err()
        {
            std::hint::spin_loop();
        }
        let _release = Unlock(&self.state, ReleaseKind::Reader);
        // SAFETY: readers are counted, so no writer can get in
        f(unsafe { &*self.data.get() })
    }
}

enum ReleaseKind {
    Reader,
    Writer,
}

/// Releases the lock on drop, so a panicking closure can't wedge the engine.
struct Unlock<'a>(&'a AtomicU8, ReleaseKind);

impl Drop for Unlock<'_> {
    fn drop(&mut self) {
        match self.1 {
            ReleaseKind::Reader => {
                self.0.fetch_sub(1, Release);
            }
            ReleaseKind::Writer => self.0.store(FREE, Release),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Spinlock<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.read(|data| f.debug_tuple("Spinlock").field(data).finish())
    }
}
