//! The dedup state machine driving the poll loop.
//!
//! # Design
//! `Watcher` is the only state that survives across iterations: the last
//! status text sent and the last error text sent. Both are compared by
//! literal string equality: a repeat is suppressed only when its text
//! exactly matches the previous one of the same category, so an error whose
//! embedded detail varies between iterations will notify again. That is the
//! historical behavior and is kept on purpose.
//!
//! State is updated when a message is emitted, not when it is delivered:
//! a dropped Telegram send still counts as "notified" (at-most-once).

use crate::error::WatchError;
use crate::types::Homework;

/// Placeholder status used when the poll returns no homework entries.
/// Seeding `last_status` with it prevents a spurious initial notification.
pub const STATUS_UNCHANGED: &str = "Статус не обновлялся";

/// Compute the current status text for one poll result.
///
/// Only the first entry is consulted; the API returns the most recent
/// submission first and tracking several submissions is out of scope.
pub fn current_status(homeworks: &[Homework]) -> Result<String, WatchError> {
    match homeworks.first() {
        None => Ok(STATUS_UNCHANGED.to_string()),
        Some(homework) => homework.status_line(),
    }
}

/// Cross-iteration notification state with per-category dedup.
#[derive(Debug)]
pub struct Watcher {
    last_status: String,
    last_error: String,
}

impl Watcher {
    pub fn new() -> Self {
        Self {
            last_status: STATUS_UNCHANGED.to_string(),
            last_error: String::new(),
        }
    }

    /// Fold one iteration's outcome into the state.
    ///
    /// Returns the message to notify, or `None` when it would repeat the
    /// previous one of the same category.
    pub fn digest(&mut self, outcome: Result<String, WatchError>) -> Option<String> {
        match outcome {
            Ok(status) => {
                if status == self.last_status {
                    return None;
                }
                self.last_status = status.clone();
                Some(status)
            }
            Err(error) => {
                let message = format!("Сбой в работе программы: {error}");
                if message == self.last_error {
                    return None;
                }
                self.last_error = message.clone();
                Some(message)
            }
        }
    }
}

impl Default for Watcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(status: &str) -> Homework {
        Homework {
            status: Some(status.to_string()),
            homework_name: Some("hw1".to_string()),
        }
    }

    #[test]
    fn empty_list_maps_to_sentinel() {
        assert_eq!(current_status(&[]).unwrap(), STATUS_UNCHANGED);
    }

    #[test]
    fn only_first_entry_is_consulted() {
        let status = current_status(&[entry("reviewing"), entry("approved")]).unwrap();
        assert!(status.contains("Работа взята на проверку ревьюером."));
    }

    #[test]
    fn fresh_watcher_swallows_sentinel() {
        let mut watcher = Watcher::new();
        assert_eq!(watcher.digest(Ok(STATUS_UNCHANGED.to_string())), None);
    }

    #[test]
    fn repeated_status_notifies_once() {
        let mut watcher = Watcher::new();
        let status = current_status(&[entry("reviewing")]).unwrap();
        assert_eq!(watcher.digest(Ok(status.clone())), Some(status.clone()));
        assert_eq!(watcher.digest(Ok(status)), None);
    }

    #[test]
    fn status_change_notifies_again() {
        let mut watcher = Watcher::new();
        let reviewing = current_status(&[entry("reviewing")]).unwrap();
        let approved = current_status(&[entry("approved")]).unwrap();
        assert!(watcher.digest(Ok(reviewing)).is_some());
        assert_eq!(watcher.digest(Ok(approved.clone())), Some(approved));
    }

    #[test]
    fn repeated_error_notifies_once() {
        let mut watcher = Watcher::new();
        let err = || Err(WatchError::ApiRequest("код ответа API: 500".to_string()));
        let first = watcher.digest(err()).unwrap();
        assert!(first.starts_with("Сбой в работе программы: "));
        assert_eq!(watcher.digest(err()), None);
    }

    #[test]
    fn different_error_text_defeats_dedup() {
        let mut watcher = Watcher::new();
        assert!(watcher
            .digest(Err(WatchError::ApiRequest("код ответа API: 500".to_string())))
            .is_some());
        assert!(watcher
            .digest(Err(WatchError::ApiRequest("код ответа API: 502".to_string())))
            .is_some());
    }

    #[test]
    fn status_and_error_dedup_are_independent() {
        let mut watcher = Watcher::new();
        let status = current_status(&[entry("approved")]).unwrap();
        assert!(watcher.digest(Ok(status.clone())).is_some());
        assert!(watcher
            .digest(Err(WatchError::MissingField("homeworks")))
            .is_some());
        // Error in between does not reset status dedup.
        assert_eq!(watcher.digest(Ok(status)), None);
    }
}
