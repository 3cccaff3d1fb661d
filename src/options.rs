// SPDX-License-Identifier: MPL-2.0
//! Presentation options and their resolution against configured defaults.
//!
//! Callers hand the manager a [`ToastOptions`] with only the fields they
//! care about set; everything else falls back to the host's
//! [`OptionDefaults`]. Resolution happens once, at `show` time, and the
//! result is frozen into the toast record.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual category of a toast. The render layer maps this to colors
/// and icons; the engine only carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastKind {
    #[default]
    Default,
    Info,
    Success,
    Warning,
    Danger,
}

/// Named entrance/exit animation the render layer should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transition {
    #[default]
    Bounce,
    Slide,
    Zoom,
}

/// Callback invoked when a toast closes. Fires at most once, no matter
/// how the close was triggered.
pub type OnClose = Box<dyn FnOnce() + 'static>;

/// Caller-supplied options for a single toast.
///
/// Every field is optional; unset fields resolve against the configured
/// [`OptionDefaults`]. `hide_progress_bar` has a derived default: hidden
/// when the effective timeout disables auto-close, shown otherwise. An
/// explicitly supplied value always wins over the derived one.
#[derive(Default)]
pub struct ToastOptions {
    pub kind: Option<ToastKind>,
    pub timeout_ms: Option<i64>,
    pub closable: Option<bool>,
    pub position: Option<Position>,
    pub show_icon: Option<bool>,
    pub transition: Option<Transition>,
    pub hide_progress_bar: Option<bool>,
    pub on_close: Option<OnClose>,
}

impl fmt::Debug for ToastOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastOptions")
            .field("kind", &self.kind)
            .field("timeout_ms", &self.timeout_ms)
            .field("closable", &self.closable)
            .field("position", &self.position)
            .field("show_icon", &self.show_icon)
            .field("transition", &self.transition)
            .field("hide_progress_bar", &self.hide_progress_bar)
            .field("on_close", &self.on_close.as_ref().map(|_| "FnOnce"))
            .finish()
    }
}

impl ToastOptions {
    /// Creates an empty options bundle; every field falls back to the
    /// configured defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Auto-close timeout in milliseconds. Values ≤ 0 disable auto-close.
    #[must_use]
    pub fn timeout_ms(mut self, timeout_ms: i64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn show_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = Some(show_icon);
        self
    }

    #[must_use]
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    #[must_use]
    pub fn hide_progress_bar(mut self, hide: bool) -> Self {
        self.hide_progress_bar = Some(hide);
        self
    }

    /// Registers a close callback.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Resolves this bundle against `defaults`, splitting off the close
    /// callback so the rest can stay `Copy`-friendly.
    pub(crate) fn resolve(self, defaults: &OptionDefaults) -> (ResolvedOptions, Option<OnClose>) {
        let timeout_ms = self.timeout_ms.unwrap_or(defaults.timeout_ms);
        let resolved = ResolvedOptions {
            kind: self.kind.unwrap_or(defaults.kind),
            timeout_ms,
            closable: self.closable.unwrap_or(defaults.closable),
            position: self.position.unwrap_or(defaults.position),
            show_icon: self.show_icon.unwrap_or(defaults.show_icon),
            transition: self.transition.unwrap_or(defaults.transition),
            hide_progress_bar: self.hide_progress_bar.unwrap_or(timeout_ms <= 0),
        };
        (resolved, self.on_close)
    }
}

/// Host-configured fallback for every unset [`ToastOptions`] field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionDefaults {
    pub kind: ToastKind,
    pub timeout_ms: i64,
    pub closable: bool,
    pub position: Position,
    pub show_icon: bool,
    pub transition: Transition,
}

impl Default for OptionDefaults {
    fn default() -> Self {
        Self {
            kind: ToastKind::Default,
            timeout_ms: 5000,
            closable: true,
            position: Position::TopRight,
            show_icon: false,
            transition: Transition::Bounce,
        }
    }
}

/// Presentation config frozen into a toast record at `show` time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOptions {
    pub kind: ToastKind,
    pub timeout_ms: i64,
    pub closable: bool,
    pub position: Position,
    pub show_icon: bool,
    pub transition: Transition,
    pub hide_progress_bar: bool,
}
