//! Typed event bus.
//!
//! # Design
//!
//! Collaborators (the network layer, the region builder, the brick overlay)
//! notify the rest of the process by dispatching plain structs through an
//! explicitly-owned [`EventBus`] — there is no process-wide singleton.
//! Handlers register per concrete event type; [`EventBus::subscribe`]
//! returns a [`Subscription`] guard whose `Drop` unregisters the handler,
//! so a component's lifetime bounds its interest automatically.
//!
//! Dispatch is synchronous and in registration order.  The handler list is
//! cloned under the lock and invoked outside it (copy-on-dispatch), so
//! handlers may subscribe or drop subscriptions freely; they must not
//! re-dispatch the same event type from inside a handler.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

type ErasedHandler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

#[derive(Default)]
struct Registry {
    handlers: HashMap<TypeId, Vec<(u64, ErasedHandler)>>,
    next_id: u64,
}

/// Process-level event dispatcher.  Construct once with [`EventBus::new`]
/// and share the `Arc` with every component that dispatches or listens.
#[derive(Default)]
pub struct EventBus {
    registry: Mutex<Registry>,
}

impl EventBus {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register `handler` for events of type `E`.
    ///
    /// The handler stays registered until the returned [`Subscription`] is
    /// dropped.  Handlers for the same type fire in registration order.
    pub fn subscribe<E, F>(self: &Arc<Self>, handler: F) -> Subscription
    where
        E: Any + Send + Sync,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let erased: ErasedHandler = Arc::new(move |any: &dyn Any| {
            if let Some(event) = any.downcast_ref::<E>() {
                handler(event);
            }
        });

        let ty = TypeId::of::<E>();
        let id = {
            let mut registry = self.registry.lock().expect("event registry poisoned");
            let id = registry.next_id;
            registry.next_id += 1;
            registry.handlers.entry(ty).or_default().push((id, erased));
            id
        };

        Subscription { bus: Arc::downgrade(self), ty, id }
    }

    /// Deliver `event` to every registered handler of its type, in
    /// registration order, on the calling thread.
    pub fn dispatch<E: Any + Send + Sync>(&self, event: &E) {
        let snapshot: Vec<ErasedHandler> = {
            let registry = self.registry.lock().expect("event registry poisoned");
            match registry.handlers.get(&TypeId::of::<E>()) {
                Some(list) => list.iter().map(|(_, h)| Arc::clone(h)).collect(),
                None => return,
            }
        };

        for handler in snapshot {
            handler(event);
        }
    }

    fn unsubscribe(&self, ty: TypeId, id: u64) {
        let mut registry = self.registry.lock().expect("event registry poisoned");
        if let Some(list) = registry.handlers.get_mut(&ty) {
            list.retain(|(entry_id, _)| *entry_id != id);
        }
    }
}

/// RAII registration guard returned by [`EventBus::subscribe`].
#[must_use = "dropping a Subscription immediately unregisters the handler"]
pub struct Subscription {
    bus: Weak<EventBus>,
    ty: TypeId,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.unsubscribe(self.ty, self.id);
        }
    }
}
