use core::cell::UnsafeCell;

/// Process-wide cell for the heap. Guests run one thread, so access is not
/// locked; prefer [`Global::with`], which scopes the exclusive borrow to a
/// closure that must not reach back into the same `Global`.
pub struct Global<T> {
    inner: UnsafeCell<T>,
}

impl<T> Global<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: UnsafeCell::new(value),
        }
    }

    /// # Safety
    /// Callers must ensure exclusive access for the lifetime of the borrow.
    #[allow(clippy::mut_from_ref)]
    pub unsafe fn get_mut(&self) -> &mut T {
        unsafe { &mut *self.inner.get() }
    }

    /// Run `f` with exclusive access to the value.
    ///
    /// # Safety
    /// No other borrow of the value may be live, and `f` must not re-enter
    /// this `Global`.
    pub unsafe fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(unsafe { self.get_mut() })
    }
}

unsafe impl<T> Sync for Global<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_scopes_each_borrow_to_its_closure() {
        let counter = Global::new(0u32);
        let first = unsafe { counter.with(|n| { *n += 1; *n }) };
        let second = unsafe { counter.with(|n| { *n += 1; *n }) };
        assert_eq!((first, second), (1, 2));
        assert_eq!(*unsafe { counter.get_mut() }, 2);
    }
}
