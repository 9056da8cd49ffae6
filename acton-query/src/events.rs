//! Domain event buffer embedded in aggregates
//!
//! An aggregate owns an [`EventRecorder`], records events while it changes,
//! and a dispatcher drains them once the change is persisted.
//!
//! # Example
//!
//! ```rust
//! use acton_query::events::EventRecorder;
//!
//! #[derive(Debug, PartialEq)]
//! enum AccountEvent {
//!     Opened { id: u64 },
//!     Renamed { id: u64, name: String },
//! }
//!
//! struct Account {
//!     id: u64,
//!     name: String,
//!     events: EventRecorder<AccountEvent>,
//! }
//!
//! impl Account {
//!     fn open(id: u64, name: &str) -> Self {
//!         let mut account = Self { id, name: name.to_string(), events: EventRecorder::new() };
//!         account.events.record(AccountEvent::Opened { id });
//!         account
//!     }
//!
//!     fn rename(&mut self, name: &str) {
//!         self.name = name.to_string();
//!         self.events.record(AccountEvent::Renamed { id: self.id, name: self.name.clone() });
//!     }
//! }
//!
//! let mut account = Account::open(1, "ops");
//! account.rename("platform");
//!
//! let released = account.events.release();
//! assert_eq!(released.len(), 2);
//! assert!(account.events.is_empty());
//! ```

/// Append-then-drain buffer of domain events
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecorder<E> {
    events: Vec<E>,
}

impl<E> EventRecorder<E> {
    /// Create an empty recorder
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event
    pub fn record(&mut self, event: E) {
        self.events.push(event);
    }

    /// Take every recorded event in recording order, leaving the buffer empty
    #[must_use = "released events are gone from the recorder"]
    pub fn release(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }

    /// Events recorded and not yet released
    #[must_use]
    pub fn pending(&self) -> &[E] {
        &self.events
    }

    /// Returns `true` when nothing is waiting to be released
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<E> Default for EventRecorder<E> {
    fn default() -> Self {
        Self::new()
    }
}
