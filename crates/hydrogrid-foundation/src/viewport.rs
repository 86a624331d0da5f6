//! Host viewport and resize notification lifecycle.
//!
//! Resize listeners are the one resource this crate can leak, so
//! registration is scoped: [`ResizeEvents::subscribe`] hands back a
//! [`ResizeSubscription`] guard that unregisters on drop, on every exit
//! path. Single-threaded; subscribers run on the UI thread that emits.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

/// Dimensions of the host viewport in device-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

type ResizeCallback = Rc<dyn Fn(Viewport)>;

struct ResizeRegistry {
    subscribers: Vec<(u64, ResizeCallback)>,
    next_id: u64,
}

/// Registry of resize subscribers for one host viewport.
#[derive(Clone)]
pub struct ResizeEvents {
    inner: Rc<RefCell<ResizeRegistry>>,
}

impl ResizeEvents {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ResizeRegistry {
                subscribers: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Registers `callback` for resize notifications.
    ///
    /// The subscription lives exactly as long as the returned guard.
    #[must_use = "dropping the subscription immediately unregisters the callback"]
    pub fn subscribe(&self, callback: impl Fn(Viewport) + 'static) -> ResizeSubscription {
        let id = {
            let mut registry = self.inner.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.subscribers.push((id, Rc::new(callback)));
            id
        };
        ResizeSubscription {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Notifies all live subscribers of a new viewport size.
    pub fn emit(&self, viewport: Viewport) {
        // Snapshot first so a callback may subscribe or drop a guard without
        // hitting a re-entrant borrow.
        let callbacks: SmallVec<[ResizeCallback; 4]> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(viewport);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl Default for ResizeEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped resize registration; dropping it unregisters the callback.
pub struct ResizeSubscription {
    registry: Weak<RefCell<ResizeRegistry>>,
    id: u64,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .subscribers
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribers_receive_emitted_viewports() {
        let events = ResizeEvents::new();
        let seen = Rc::new(Cell::new(None));
        let seen_clone = Rc::clone(&seen);

        let _sub = events.subscribe(move |viewport| seen_clone.set(Some(viewport)));
        events.emit(Viewport::new(800.0, 600.0));

        assert_eq!(seen.get(), Some(Viewport::new(800.0, 600.0)));
    }

    #[test]
    fn dropping_the_guard_unregisters() {
        let events = ResizeEvents::new();
        let count = Rc::new(Cell::new(0u32));
        let count_clone = Rc::clone(&count);

        let sub = events.subscribe(move |_| count_clone.set(count_clone.get() + 1));
        events.emit(Viewport::new(100.0, 100.0));
        assert_eq!(events.subscriber_count(), 1);

        drop(sub);
        assert_eq!(events.subscriber_count(), 0);
        events.emit(Viewport::new(200.0, 200.0));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn guard_outliving_the_registry_is_a_no_op() {
        let events = ResizeEvents::new();
        let sub = events.subscribe(|_| {});
        drop(events);
        drop(sub);
    }

    #[test]
    fn emit_tolerates_guards_dropped_from_callbacks() {
        let events = ResizeEvents::new();
        let holder: Rc<RefCell<Option<ResizeSubscription>>> = Rc::new(RefCell::new(None));

        let holder_clone = Rc::clone(&holder);
        let sub = events.subscribe(move |_| {
            // Self-removal during dispatch must not panic.
            holder_clone.borrow_mut().take();
        });
        *holder.borrow_mut() = Some(sub);

        events.emit(Viewport::new(1.0, 1.0));
        assert_eq!(events.subscriber_count(), 0);
    }
}
