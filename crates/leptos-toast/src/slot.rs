//! Single-occupant cells backing the toast's timer and surface.

use std::cell::RefCell;

/// Holds at most one pending timer. Arming drops the previous occupant,
/// which for `gloo_timers::callback::Timeout` clears it.
pub struct TimerSlot<T> {
    pending: RefCell<Option<T>>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self {
            pending: RefCell::new(None),
        }
    }
}

impl<T> TimerSlot<T> {
    /// Store `timer`, returning whether an older one was displaced
    pub fn arm(&self, timer: T) -> bool {
        let previous = self.pending.borrow_mut().replace(timer);
        previous.is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

/// Resolved on first successful use, then reused
pub struct LazySurface<T> {
    resolved: RefCell<Option<T>>,
}

impl<T> Default for LazySurface<T> {
    fn default() -> Self {
        Self {
            resolved: RefCell::new(None),
        }
    }
}

impl<T: Clone> LazySurface<T> {
    /// Return the cached value, or run `resolve` and cache it when it yields one.
    /// A `None` leaves the cell empty so a later call retries.
    pub fn get_or_resolve(&self, resolve: impl FnOnce() -> Option<T>) -> Option<T> {
        if let Some(found) = self.resolved.borrow().as_ref() {
            return Some(found.clone());
        }
        let fresh = resolve()?;
        *self.resolved.borrow_mut() = Some(fresh.clone());
        Some(fresh)
    }
}
