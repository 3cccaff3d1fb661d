// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the six corner stacks and is the only entry point
//! for showing toasts. Everything else arrives as a [`Message`] from the
//! host's event loop: dismissals, layout reports, and clock ticks. All
//! mutation happens on that single logical thread, so there are no locks;
//! the only shared state in the crate is the id counter.
//!
//! There are no timer objects and no cancel API. Deadlines are data: a
//! tick that arrives after its toast was already closed finds the id gone
//! from every stack and degrades to a no-op. That same not-found guard is
//! the de-duplication point between an auto-close timer and a manual
//! dismissal racing for the same toast.

use crate::config::StackConfig;
use crate::options::ToastOptions;
use crate::position::Position;
use crate::sink::RenderSink;
use crate::stack::Stack;
use crate::toast::{ToastContent, ToastId, ToastRecord};
use std::time::Instant;

/// Messages a host's event loop feeds into the manager.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// User pressed a toast's close affordance.
    Dismiss(ToastId),
    /// The render sink finished layout for a mounted element and measured
    /// its height.
    Mounted { id: ToastId, height: f32 },
    /// Clock tick; drives auto-close deadlines and grace-delay unmounts.
    /// Hosts typically map a periodic timer subscription into this.
    Tick(Instant),
}

/// A closed toast waiting out its grace delay before unmount.
#[derive(Debug)]
struct ClosingToast {
    record: ToastRecord,
    destroy_at: Instant,
}

/// Owns the six corner stacks and drives every toast through its
/// lifecycle. Constructed by the application at startup and torn down
/// with it; there is no global registry.
#[derive(Debug)]
pub struct Manager<S: RenderSink> {
    stacks: [Stack; 6],
    closing: Vec<ClosingToast>,
    config: StackConfig,
    sink: S,
}

impl<S: RenderSink> Manager<S> {
    /// Creates a manager with the default configuration.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, StackConfig::default())
    }

    #[must_use]
    pub fn with_config(sink: S, config: StackConfig) -> Self {
        Self {
            stacks: Position::ALL.map(Stack::new),
            closing: Vec::new(),
            config,
            sink,
        }
    }

    /// Shows a toast with the configured default options.
    pub fn show(&mut self, content: impl Into<ToastContent>) -> ToastId {
        self.show_with(content, ToastOptions::default())
    }

    /// Shows a toast; unset option fields fall back to the configured
    /// defaults (see [`ToastOptions`] for the progress-bar rule).
    ///
    /// The new record is mounted invisible at the end of its corner's
    /// stack, one gutter past the measured extent of its siblings, and its
    /// auto-close deadline is armed when the effective timeout is
    /// positive. Returns synchronously; layout happens on the host's side
    /// and reports back through [`Message::Mounted`].
    pub fn show_with(&mut self, content: impl Into<ToastContent>, options: ToastOptions) -> ToastId {
        let (options, on_close) = options.resolve(&self.config.defaults);
        let stack = &mut self.stacks[options.position.index()];
        let offset = stack.stacked_offset(self.config.gutter);
        let record = ToastRecord::new(content.into(), options, on_close, offset);
        let id = record.id();
        self.sink.mount(&record);
        stack.append(record);
        id
    }

    /// Feeds one host event through the engine.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(id),
            Message::Mounted { id, height } => self.mounted(id, height),
            Message::Tick(now) => self.tick(now),
        }
    }

    /// The stack for one corner, oldest member first.
    #[must_use]
    pub fn stack(&self, position: Position) -> &Stack {
        &self.stacks[position.index()]
    }

    /// A live toast by id. Records in their closing limbo are not
    /// reachable anymore.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastRecord> {
        self.stacks
            .iter()
            .flat_map(Stack::iter)
            .find(|record| record.id() == id)
    }

    /// Number of live toasts across all corners.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.stacks.iter().map(Stack::len).sum()
    }

    /// Number of closed toasts still waiting out their grace delay.
    #[must_use]
    pub fn closing_count(&self) -> usize {
        self.closing.len()
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.closing.is_empty() || self.stacks.iter().any(|stack| !stack.is_empty())
    }

    #[must_use]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// User dismissal. Only closable toasts carry the affordance, so a
    /// dismiss for anything else is dropped.
    fn dismiss(&mut self, id: ToastId) {
        let closable = self.get(id).map(|record| record.options().closable);
        if closable == Some(true) {
            self.close(id, Instant::now());
        }
    }

    /// Layout report: store the measured height and flip the toast
    /// visible. A report for a toast already closing or gone is stale and
    /// ignored.
    fn mounted(&mut self, id: ToastId, height: f32) {
        let mut found = false;
        for stack in &mut self.stacks {
            if let Some(record) = stack.get_mut(id) {
                record.set_mounted_height(height);
                record.set_visible(true);
                found = true;
                break;
            }
        }
        if found {
            self.sink.update_visible(id, true);
        }
    }

    /// Closes a toast: flips it invisible, fires its close callback,
    /// removes it from its stack, slides later siblings toward the anchor,
    /// and parks the record until the grace delay lets the exit transition
    /// finish.
    ///
    /// A second close for the same id finds nothing and returns; `close`
    /// is idempotent in effect and the callback cannot fire twice.
    fn close(&mut self, id: ToastId, now: Instant) {
        let Some((stack_idx, index, mut record)) = self.remove_from_stacks(id) else {
            return;
        };

        record.set_visible(false);
        self.sink.update_visible(id, false);
        if let Some(on_close) = record.take_on_close() {
            on_close();
        }

        let removed_height = record.mounted_height().unwrap_or(0.0);
        let gutter = self.config.gutter;
        let moved = self.stacks[stack_idx].reflow_after(index, removed_height, gutter);
        for (sibling, offset) in moved {
            self.sink.update_offset(sibling, offset);
        }

        self.closing.push(ClosingToast {
            record,
            destroy_at: now + self.config.grace_delay(),
        });
    }

    /// Callers do not track which corner a toast went to, so removal scans
    /// all six stacks. Linear, but fine at toast scale.
    fn remove_from_stacks(&mut self, id: ToastId) -> Option<(usize, usize, ToastRecord)> {
        for (stack_idx, stack) in self.stacks.iter_mut().enumerate() {
            if let Some((index, record)) = stack.remove(id) {
                return Some((stack_idx, index, record));
            }
        }
        None
    }

    /// Advances lifecycle clocks to `now`: closes every live toast whose
    /// deadline has passed, then unmounts every closing record whose grace
    /// delay has elapsed.
    fn tick(&mut self, now: Instant) {
        let expired: Vec<ToastId> = self
            .stacks
            .iter()
            .flat_map(Stack::iter)
            .filter(|record| record.expired(now))
            .map(ToastRecord::id)
            .collect();
        for id in expired {
            self.close(id, now);
        }

        let mut index = 0;
        while index < self.closing.len() {
            if self.closing[index].destroy_at <= now {
                let closing = self.closing.remove(index);
                self.sink.unmount(closing.record.id());
            } else {
                index += 1;
            }
        }
    }
}
