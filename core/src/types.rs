//! Domain types for the homework review API.
//!
//! # Design
//! `Homework` mirrors one element of the API's `homeworks` array. Both
//! interesting fields are decoded as `Option<String>` instead of failing at
//! deserialization time, so the extractor can report exactly which field is
//! missing. Unknown fields in the payload are ignored; the real API sends
//! more than these two.

use serde::{Deserialize, Serialize};

use crate::error::WatchError;

/// One homework entry from the review API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Homework {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub homework_name: Option<String>,
}

/// One of the three fixed review outcomes.
///
/// Each verdict carries the exact canned sentence the reviewer service has
/// always used; the mapping is static and not configurable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    /// Map an API status string to a verdict, `None` if unrecognized.
    pub fn from_status(status: &str) -> Option<Verdict> {
        match status {
            "approved" => Some(Verdict::Approved),
            "reviewing" => Some(Verdict::Reviewing),
            "rejected" => Some(Verdict::Rejected),
            _ => None,
        }
    }

    /// The canned human-readable sentence for this verdict.
    pub fn text(&self) -> &'static str {
        match self {
            Verdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "Работа взята на проверку ревьюером.",
            Verdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl Homework {
    /// Format the chat-visible status sentence for this entry.
    ///
    /// Fails if `status` or `homework_name` is absent, or if `status` is not
    /// one of the three known verdict keys.
    pub fn status_line(&self) -> Result<String, WatchError> {
        let status = self
            .status
            .as_deref()
            .ok_or(WatchError::MissingField("status"))?;
        let name = self
            .homework_name
            .as_deref()
            .ok_or(WatchError::MissingField("homework_name"))?;
        let verdict = Verdict::from_status(status)
            .ok_or_else(|| WatchError::UnknownStatus(status.to_string()))?;
        Ok(format!(
            "Изменился статус проверки работы \"{name}\". {}",
            verdict.text()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn homework(status: Option<&str>, name: Option<&str>) -> Homework {
        Homework {
            status: status.map(String::from),
            homework_name: name.map(String::from),
        }
    }

    #[test]
    fn status_line_approved() {
        let line = homework(Some("approved"), Some("hw_final")).status_line().unwrap();
        assert!(line.contains("hw_final"));
        assert!(line.contains("Работа проверена: ревьюеру всё понравилось. Ура!"));
    }

    #[test]
    fn status_line_reviewing() {
        let line = homework(Some("reviewing"), Some("hw_final")).status_line().unwrap();
        assert_eq!(
            line,
            "Изменился статус проверки работы \"hw_final\". Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn status_line_rejected() {
        let line = homework(Some("rejected"), Some("hw_final")).status_line().unwrap();
        assert!(line.contains("у ревьюера есть замечания"));
    }

    #[test]
    fn missing_status_is_reported_first() {
        let err = homework(None, Some("hw_final")).status_line().unwrap_err();
        assert_eq!(err, WatchError::MissingField("status"));
    }

    #[test]
    fn missing_name_is_reported() {
        let err = homework(Some("approved"), None).status_line().unwrap_err();
        assert_eq!(err, WatchError::MissingField("homework_name"));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = homework(Some("on_fire"), Some("hw_final")).status_line().unwrap_err();
        assert_eq!(err, WatchError::UnknownStatus("on_fire".to_string()));
    }

    #[test]
    fn homework_tolerates_extra_fields() {
        let hw: Homework = serde_json::from_str(
            r#"{"status":"approved","homework_name":"hw1","id":42,"lesson_name":"rust"}"#,
        )
        .unwrap();
        assert_eq!(hw.status.as_deref(), Some("approved"));
    }

    #[test]
    fn homework_defaults_missing_fields_to_none() {
        let hw: Homework = serde_json::from_str(r#"{}"#).unwrap();
        assert!(hw.status.is_none());
        assert!(hw.homework_name.is_none());
    }
}
