//! Deterministic core of the homework status watcher.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trips, making the core fully deterministic and testable.
//!
//! # Design
//! - `StatusClient` polls the homework review API; `TelegramClient` sends
//!   the notification. Both are stateless.
//! - `Watcher` is the only cross-iteration state: last notified status and
//!   last notified error, deduplicated by literal string equality.
//! - `WatchError` is the closed set of per-iteration failures; `SendError`
//!   covers the suppressed notification-delivery path.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod telegram;
pub mod types;
pub mod watch;

pub use client::StatusClient;
pub use error::{SendError, WatchError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use telegram::{TelegramClient, TELEGRAM_API};
pub use types::{Homework, Verdict};
pub use watch::{current_status, Watcher, STATUS_UNCHANGED};
