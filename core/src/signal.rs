//! Synchronous multicast signals.
//!
//! A `Signal` is an explicit list of registered callbacks, invoked in
//! registration order on the mutating call's own stack. No event
//! loop, no deferral: by the time a mutator returns, every listener
//! has already observed the fully-updated state.

use std::fmt;

/// Handle for a registered listener. Monotonic per signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub struct Signal {
    next_id: u64,
    listeners: Vec<(ListenerId, Box<dyn FnMut()>)>,
}

impl Signal {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Register a listener; it stays until unsubscribed.
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the id was never
    /// registered or already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Invoke every listener, in registration order, synchronously.
    pub fn emit(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
