// SPDX-License-Identifier: MPL-2.0
//! Contract between the stacking engine and the host's rendering layer.
//!
//! The engine never touches a display. Every visual consequence of a state
//! change goes through [`RenderSink`], and the one piece of information the
//! engine needs back from layout, the measured element height, arrives as a
//! [`Message::Mounted`](crate::manager::Message) on the host's event loop.

use crate::toast::{ToastId, ToastRecord};
use std::cell::RefCell;
use std::rc::Rc;

/// Host-side rendering adapter.
///
/// The toast id doubles as the element handle: `mount` receives the full
/// record (including its initial offset), all later calls address the
/// element by id.
pub trait RenderSink {
    /// A new toast needs an element. The record is still invisible; the
    /// host flips it on when `update_visible` arrives.
    fn mount(&mut self, record: &ToastRecord);

    /// The post-close grace delay elapsed; remove the element.
    fn unmount(&mut self, id: ToastId);

    /// A sibling was inserted or removed and this toast slid to a new
    /// offset from its anchor edge.
    fn update_offset(&mut self, id: ToastId, offset: f32);

    /// The toast entered or left its visible state.
    fn update_visible(&mut self, id: ToastId, visible: bool);
}

/// Sink that ignores every call. For headless hosts and benchmarks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn mount(&mut self, _record: &ToastRecord) {}
    fn unmount(&mut self, _id: ToastId) {}
    fn update_offset(&mut self, _id: ToastId, _offset: f32) {}
    fn update_visible(&mut self, _id: ToastId, _visible: bool) {}
}

/// One call observed by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Mounted { id: ToastId, offset: f32 },
    Unmounted(ToastId),
    OffsetChanged { id: ToastId, offset: f32 },
    VisibleChanged { id: ToastId, visible: bool },
}

/// Sink that records every call, in order, for assertions in tests.
///
/// Clones share the same event log, so a test can keep one handle while
/// the manager owns the other.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<SinkEvent>>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event observed so far.
    #[must_use]
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.borrow().clone()
    }

    /// Drains the log, returning the events observed since the last call.
    pub fn take_events(&self) -> Vec<SinkEvent> {
        self.events.borrow_mut().drain(..).collect()
    }
}

impl RenderSink for RecordingSink {
    fn mount(&mut self, record: &ToastRecord) {
        self.events.borrow_mut().push(SinkEvent::Mounted {
            id: record.id(),
            offset: record.offset(),
        });
    }

    fn unmount(&mut self, id: ToastId) {
        self.events.borrow_mut().push(SinkEvent::Unmounted(id));
    }

    fn update_offset(&mut self, id: ToastId, offset: f32) {
        self.events
            .borrow_mut()
            .push(SinkEvent::OffsetChanged { id, offset });
    }

    fn update_visible(&mut self, id: ToastId, visible: bool) {
        self.events
            .borrow_mut()
            .push(SinkEvent::VisibleChanged { id, visible });
    }
}
