//! Error types for the homework status watcher.
//!
//! # Design
//! `WatchError` is the closed set of failures that can occur on one poll
//! cycle's fetch/validate/extract path. The loop never distinguishes
//! transient from permanent kinds: every variant is converted to a chat
//! notification and retried on the next fixed-interval cycle. Keeping the
//! kinds separate still lets the loop pattern-match later without changing
//! the wire behavior. `Display` output is user-visible: it gets embedded into
//! the error notification sent to the chat, so the texts are in the same
//! language as the verdict sentences.
//!
//! `SendError` is deliberately not a `WatchError` variant: a failed Telegram
//! delivery is logged and dropped, never folded back into the poll cycle.

use std::fmt;

/// Errors raised while fetching, validating, or extracting a homework status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchError {
    /// The review API request failed: transport error or non-2xx response.
    ApiRequest(String),

    /// The payload (or one of its fields) has the wrong JSON kind.
    TypeKind(&'static str),

    /// A required key is absent from the payload.
    MissingField(&'static str),

    /// The API returned a status value outside the known verdict set.
    UnknownStatus(String),
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchError::ApiRequest(detail) => {
                write!(f, "ошибка запроса к API: {detail}")
            }
            WatchError::TypeKind(what) => {
                write!(f, "некорректный ответ API: {what}")
            }
            WatchError::MissingField(key) => {
                write!(f, "в ответе API отсутствует ключ \"{key}\"")
            }
            WatchError::UnknownStatus(status) => {
                write!(f, "неизвестный статус проверки: \"{status}\"")
            }
        }
    }
}

impl std::error::Error for WatchError {}

/// A notification could not be delivered to Telegram.
///
/// Best-effort, at-most-once: the bot logs this and moves on. It never
/// reaches the chat and never stops the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendError(pub String);

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification not sent: {}", self.0)
    }
}

impl std::error::Error for SendError {}
