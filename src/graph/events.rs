//! Change notification channels for graphs, vertices and edges.
//!
//! Every mutation performed through [`Graph`](crate::Graph) is announced synchronously on one
//! of four channels:
//!
//! - vertex-changed ([`VertexChange`]) - a vertex label or adjacency list changed, registered
//!   per vertex through [`Vertex::listeners`](crate::graph::Vertex::listeners)
//! - edge-changed ([`EdgeChange`]) - an edge label, weight or endpoint changed, registered per
//!   edge through [`Edge::listeners`](crate::graph::Edge::listeners)
//! - vertex-set-changed ([`VertexSetChange`]) - a vertex joined or left the graph
//! - edge-set-changed ([`EdgeSetChange`]) - an edge joined or left the graph
//!
//! # Dispatch Model
//!
//! [`Listeners`] keeps its callbacks behind a [`Mutex`]. [`Listeners::notify`] copies the
//! callback list while holding the lock and invokes the copies after releasing it, so a
//! callback that subscribes or unsubscribes while being notified affects the next dispatch
//! only. No notification is skipped or duplicated.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use isagraph::{Graph, graph::SetChangeKind};
//!
//! let mut graph = Graph::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! graph.on_vertex_set_change().subscribe(move |event| {
//!     sink.lock().unwrap().push(event.kind);
//! });
//!
//! let v = graph.create_vertex();
//! graph.remove_vertex(v);
//!
//! assert_eq!(*seen.lock().unwrap(), vec![SetChangeKind::Added, SetChangeKind::Removed]);
//! ```

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use strum::Display;

use crate::graph::{EdgeId, VertexId};

/// Handle identifying a single subscription inside a [`Listeners`] registry.
///
/// Returned by [`Listeners::subscribe`] and consumed by [`Listeners::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Registry<E> {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback<E>)>,
}

/// A subscription registry for one change channel.
///
/// Callbacks are invoked in subscription order. Registration and dispatch may happen from
/// different threads; dispatch itself runs on the thread performing the mutation.
pub struct Listeners<E> {
    registry: Mutex<Registry<E>>,
}

impl<E> Listeners<E> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Listeners {
            registry: Mutex::new(Registry {
                next_id: 0,
                callbacks: Vec::new(),
            }),
        }
    }

    // A panicking callback cannot leave the registry half-updated, so a poisoned
    // lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Registry<E>> {
        self.registry
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Registers a callback and returns the handle needed to remove it again.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let mut registry = self.lock();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.callbacks.push((id, Arc::new(callback)));
        id
    }

    /// Removes a previously registered callback.
    ///
    /// Returns `false` if the subscription was unknown or already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.lock();
        let before = registry.callbacks.len();
        registry.callbacks.retain(|(existing, _)| *existing != id);
        before != registry.callbacks.len()
    }

    /// Invokes every callback registered at the time of the call.
    pub fn notify(&self, event: &E) {
        let snapshot: Vec<Callback<E>> = self
            .lock()
            .callbacks
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in snapshot {
            callback(event);
        }
    }

    /// Returns the number of registered callbacks.
    pub fn len(&self) -> usize {
        self.lock().callbacks.len()
    }

    /// Returns `true` if no callback is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("subscribers", &self.len())
            .finish()
    }
}

/// Whether an element joined or left its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SetChangeKind {
    /// The element was added
    Added,
    /// The element was removed
    Removed,
}

/// What changed on a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum VertexChangeKind {
    /// The label was assigned
    LabelChanged,
    /// An edge was appended to the adjacency list
    EdgeAttached(EdgeId),
    /// An edge was stripped from the adjacency list
    EdgeDetached(EdgeId),
}

/// What changed on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EdgeChangeKind {
    /// The label was assigned
    LabelChanged,
    /// The weight was assigned
    WeightChanged,
    /// The head (target) was reassigned
    HeadChanged,
    /// The tail (source) was reassigned
    TailChanged,
}

/// Payload of the vertex-changed channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexChange {
    /// The vertex that changed
    pub vertex: VertexId,
    /// The kind of change
    pub kind: VertexChangeKind,
}

/// Payload of the edge-changed channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeChange {
    /// The edge that changed
    pub edge: EdgeId,
    /// The kind of change
    pub kind: EdgeChangeKind,
}

/// Payload of the vertex-set-changed channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexSetChange {
    /// The vertex that was added or removed
    pub vertex: VertexId,
    /// Added or removed
    pub kind: SetChangeKind,
}

/// Payload of the edge-set-changed channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSetChange {
    /// The edge that was added or removed
    pub edge: EdgeId,
    /// Added or removed
    pub kind: SetChangeKind,
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use super::*;

    #[test]
    fn test_notify_reaches_every_subscriber_in_order() {
        let listeners: Listeners<u32> = Listeners::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for tag in 0..3 {
            let log = Arc::clone(&log);
            listeners.subscribe(move |value: &u32| log.lock().unwrap().push((tag, *value)));
        }

        listeners.notify(&7);
        assert_eq!(*log.lock().unwrap(), vec![(0, 7), (1, 7), (2, 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let listeners: Listeners<()> = Listeners::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        let id = listeners.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(listeners.len(), 1);

        listeners.notify(&());
        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.notify(&());

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_subscribe_during_dispatch_applies_to_next_round() {
        let listeners: Arc<Listeners<()>> = Arc::new(Listeners::new());
        let late_hits = Arc::new(AtomicUsize::new(0));

        let registry = Arc::clone(&listeners);
        let late = Arc::clone(&late_hits);
        listeners.subscribe(move |_| {
            let late = Arc::clone(&late);
            registry.subscribe(move |_| {
                late.fetch_add(1, Ordering::SeqCst);
            });
        });

        listeners.notify(&());
        assert_eq!(late_hits.load(Ordering::SeqCst), 0);
        assert_eq!(listeners.len(), 2);

        listeners.notify(&());
        assert_eq!(late_hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SetChangeKind::Added.to_string(), "Added");
        assert_eq!(EdgeChangeKind::WeightChanged.to_string(), "WeightChanged");
    }
}
