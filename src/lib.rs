// SPDX-License-Identifier: MPL-2.0
//! `toast_stack` is the stacking and lifecycle engine behind corner-anchored
//! toast notifications.
//!
//! It accepts short-lived messages, assigns each to one of six screen-corner
//! stacks, computes vertical offsets so siblings never overlap, keeps those
//! offsets consistent as toasts come and go (including out-of-order removal),
//! and drives each toast through its visible lifetime. Rendering is the
//! host's business, reached through the [`RenderSink`] trait; the engine
//! never touches a display.
//!
//! # Components
//!
//! - [`toast`] - `ToastRecord`: identity, content, and per-toast state
//! - [`stack`] - `Stack`: one corner's ordered membership and offsets
//! - [`manager`] - `Manager`: the public entry point and event pump
//! - [`sink`] - `RenderSink` contract for the rendering layer
//! - [`config`] - geometry and option defaults, loadable from TOML
//!
//! # Usage
//!
//! ```
//! use toast_stack::{Manager, Message, NullSink, Position, ToastOptions};
//! use std::time::Instant;
//!
//! let mut manager = Manager::new(NullSink);
//!
//! // Show a toast; the host later reports the laid-out height.
//! let id = manager.show_with(
//!     "Image saved",
//!     ToastOptions::new().position(Position::BottomRight),
//! );
//! manager.update(Message::Mounted { id, height: 48.0 });
//!
//! // Drive lifecycle clocks from the host's timer.
//! manager.update(Message::Tick(Instant::now()));
//! ```

#![doc(html_root_url = "https://docs.rs/toast_stack/0.1.0")]

pub mod config;
pub mod error;
pub mod manager;
pub mod options;
pub mod position;
pub mod sink;
pub mod stack;
pub mod test_utils;
pub mod toast;

pub use config::StackConfig;
pub use error::{Error, Result};
pub use manager::{Manager, Message};
pub use options::{OptionDefaults, ToastKind, ToastOptions, Transition};
pub use position::{Anchor, Position};
pub use sink::{NullSink, RecordingSink, RenderSink, SinkEvent};
pub use toast::{ToastContent, ToastId, ToastRecord};
