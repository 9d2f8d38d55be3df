//! Scoped event listeners.
//!
//! Every listener registered on the host window is tied to a [`Subscription`] guard. Dropping the
//! guard deregisters the listener synchronously, so a view that goes away can never be called
//! back afterwards, whichever path it leaves by.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Handler<E> = Rc<dyn Fn(&mut E)>;

struct Slots<E> {
    next_id: u64,
    handlers: Vec<(u64, Handler<E>)>,
}

/// Ordered set of listeners for one kind of event.
///
/// Events are delivered one at a time, in registration order. A listener dropped while an event
/// is being delivered is not called for the remainder of that delivery; a listener added during
/// delivery first sees the next event.
pub struct Listeners<E> {
    slots: Rc<RefCell<Slots<E>>>,
}

impl<E: 'static> Listeners<E> {
    #[must_use]
    /// Creates an empty listener set.
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    /// Registers `handler` until the returned guard is dropped.
    pub fn listen<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&mut E) + 'static,
    {
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.handlers.push((id, Rc::new(handler)));
            id
        };

        let slots: Weak<RefCell<Slots<E>>> = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.borrow_mut().handlers.retain(|(other, _)| *other != id);
            }
        })
    }

    /// Delivers `event` to every registered listener.
    pub fn emit(&self, event: &mut E) {
        let snapshot: Vec<(u64, Handler<E>)> = self
            .slots
            .borrow()
            .handlers
            .iter()
            .map(|(id, handler)| (*id, Rc::clone(handler)))
            .collect();

        for (id, handler) in snapshot {
            let still_registered = self
                .slots
                .borrow()
                .handlers
                .iter()
                .any(|(other, _)| *other == id);
            if still_registered {
                handler(event);
            }
        }
    }

    #[must_use]
    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.slots.borrow().handlers.len()
    }

    #[must_use]
    /// Whether nothing is listening.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for a registration; releases it when dropped.
#[must_use = "dropping a subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps a release action that runs exactly once, on drop.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Releases the registration now.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("live", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/listener.rs"]
mod tests;
