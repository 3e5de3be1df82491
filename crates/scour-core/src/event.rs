//! Engine event boundary.
//!
//! Engine logic MUST NOT depend on any concrete sink. Notifications flow
//! through EngineEvent and EventSink, emitted synchronously at the point
//! the condition occurs.

use std::{cell::RefCell, rc::Rc};

///
/// EngineEvent
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineEvent {
    /// An index was provisioned lazily ahead of an upsert.
    IndexCreated {
        index: String,
        model: &'static str,
    },
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: &EngineEvent);
}

impl<S: EventSink + ?Sized> EventSink for Rc<S> {
    fn record(&self, event: &EngineEvent) {
        (**self).record(event);
    }
}

///
/// NullSink
///
/// Default sink when no observer is installed.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &EngineEvent) {}
}

///
/// RecordedEvents
///
/// Sink that appends every event to an interior list.
/// Intended for test harnesses observing engine notifications.
///

#[derive(Debug, Default)]
pub struct RecordedEvents(RefCell<Vec<EngineEvent>>);

impl RecordedEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded list.
    #[must_use]
    pub fn take(&self) -> Vec<EngineEvent> {
        self.0.take()
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<EngineEvent> {
        self.0.borrow().clone()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.0.borrow().len()
    }
}

impl EventSink for RecordedEvents {
    fn record(&self, event: &EngineEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}
