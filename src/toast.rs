// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! A [`ToastRecord`] pairs immutable identity and content with the mutable
//! presentation state the stacking engine maintains: the offset from the
//! anchor edge, visibility, and the height the render sink measured after
//! first paint.

use crate::options::{OnClose, ResolvedOptions};
use crate::position::Position;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
///
/// Ids are process-unique, monotonically assigned, and never reused. The
/// id doubles as the render sink's element handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Allocates the next unique toast id.
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Content of a toast: a title line and an optional description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastContent {
    pub title: String,
    pub description: Option<String>,
}

impl ToastContent {
    /// Content with both a title and a longer description line.
    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
        }
    }
}

impl From<&str> for ToastContent {
    fn from(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: None,
        }
    }
}

impl From<String> for ToastContent {
    fn from(title: String) -> Self {
        Self {
            title,
            description: None,
        }
    }
}

/// One live notification and its stacking state.
///
/// Lifecycle, strictly forward:
/// `created → mounted(visible=false) → visible → closing(visible=false) → destroyed`.
pub struct ToastRecord {
    id: ToastId,
    text: String,
    description: Option<String>,
    options: ResolvedOptions,
    offset: f32,
    visible: bool,
    mounted_height: Option<f32>,
    created_at: Instant,
    deadline: Option<Instant>,
    on_close: Option<OnClose>,
}

impl fmt::Debug for ToastRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRecord")
            .field("id", &self.id)
            .field("position", &self.position())
            .field("text", &self.text)
            .field("offset", &self.offset)
            .field("visible", &self.visible)
            .field("mounted_height", &self.mounted_height)
            .finish_non_exhaustive()
    }
}

impl ToastRecord {
    /// Creates a record at `offset`, invisible and unmeasured, with its
    /// auto-close deadline armed when the timeout is positive.
    pub(crate) fn new(
        content: ToastContent,
        options: ResolvedOptions,
        on_close: Option<OnClose>,
        offset: f32,
    ) -> Self {
        let created_at = Instant::now();
        let deadline = (options.timeout_ms > 0)
            .then(|| created_at + Duration::from_millis(options.timeout_ms as u64));
        Self {
            id: ToastId::next(),
            text: content.title,
            description: content.description,
            options,
            offset,
            visible: false,
            mounted_height: None,
            created_at,
            deadline,
            on_close,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// The corner this toast is stacked into. Immutable after creation.
    #[must_use]
    pub fn position(&self) -> Position {
        self.options.position
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Presentation config resolved at `show` time.
    #[must_use]
    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Distance in px from the anchor edge of this toast's corner.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Height the render sink measured after first paint; `None` until
    /// the layout report arrives.
    #[must_use]
    pub fn mounted_height(&self) -> Option<f32> {
        self.mounted_height
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// When the auto-close timer fires; `None` when the timeout is ≤ 0.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the auto-close deadline has passed as of `now`.
    pub(crate) fn expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= now)
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn set_mounted_height(&mut self, height: f32) {
        self.mounted_height = Some(height);
    }

    pub(crate) fn shift_offset(&mut self, delta: f32) {
        self.offset += delta;
    }

    /// Takes the close callback, guaranteeing it can fire at most once.
    pub(crate) fn take_on_close(&mut self) -> Option<OnClose> {
        self.on_close.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OptionDefaults, ToastOptions};

    fn record_with_timeout(timeout_ms: i64) -> ToastRecord {
        let (options, on_close) = ToastOptions::new()
            .timeout_ms(timeout_ms)
            .resolve(&OptionDefaults::default());
        ToastRecord::new("hello".into(), options, on_close, 12.0)
    }

    #[test]
    fn toast_ids_are_unique_and_monotonic() {
        let a = record_with_timeout(5000);
        let b = record_with_timeout(5000);
        assert_ne!(a.id(), b.id());
        assert!(a.id() < b.id());
    }

    #[test]
    fn new_record_starts_invisible_and_unmeasured() {
        let record = record_with_timeout(5000);
        assert!(!record.visible());
        assert!(record.mounted_height().is_none());
    }

    #[test]
    fn positive_timeout_arms_the_deadline() {
        let record = record_with_timeout(5000);
        let deadline = record.deadline().expect("deadline should be armed");
        assert_eq!(deadline, record.created_at() + Duration::from_millis(5000));
    }

    #[test]
    fn non_positive_timeout_leaves_the_deadline_unarmed() {
        assert!(record_with_timeout(0).deadline().is_none());
        assert!(record_with_timeout(-200).deadline().is_none());
    }

    #[test]
    fn expiry_is_relative_to_the_supplied_clock() {
        let record = record_with_timeout(5000);
        let now = record.created_at();
        assert!(!record.expired(now));
        assert!(!record.expired(now + Duration::from_millis(4999)));
        assert!(record.expired(now + Duration::from_millis(5000)));
    }

    #[test]
    fn take_on_close_yields_the_callback_only_once() {
        let (options, on_close) = ToastOptions::new()
            .on_close(|| {})
            .resolve(&OptionDefaults::default());
        let mut record = ToastRecord::new("bye".into(), options, on_close, 12.0);

        assert!(record.take_on_close().is_some());
        assert!(record.take_on_close().is_none());
    }

    #[test]
    fn content_conversions_preserve_title_and_description() {
        let plain: ToastContent = "saved".into();
        assert_eq!(plain.title, "saved");
        assert!(plain.description.is_none());

        let rich = ToastContent::with_description("saved", "written to disk");
        assert_eq!(rich.description.as_deref(), Some("written to disk"));
    }
}
