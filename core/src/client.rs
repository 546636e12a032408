//! Stateless request builder and response parser for the homework review API.
//!
//! # Design
//! `StatusClient` holds the base URL and the OAuth token and carries no
//! mutable state between calls. `build_homework_statuses` produces an
//! `HttpRequest`; the caller executes the round-trip and hands the
//! `HttpResponse` to `parse_homework_statuses`, which owns status checking
//! and payload shape validation. Retries are not this client's business;
//! the outer loop re-polls on a fixed interval.

use serde_json::Value;

use crate::error::WatchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Homework;

/// Synchronous, stateless client for the homework review API.
#[derive(Debug, Clone)]
pub struct StatusClient {
    base_url: String,
    token: String,
}

impl StatusClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Build the poll request for submissions updated since `from_date`
    /// (unix seconds; the caller supplies the clock).
    pub fn build_homework_statuses(&self, from_date: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!(
                "{}/api/user_api/homework_statuses/?from_date={from_date}",
                self.base_url
            ),
            headers: vec![(
                "Authorization".to_string(),
                format!("OAuth {}", self.token),
            )],
            body: None,
        }
    }

    /// Validate the poll response and return the homework list.
    ///
    /// An empty list is a valid outcome meaning "no update". Any problem
    /// (non-200 status, undecodable body, wrong payload shape) is an error;
    /// a malformed result is never returned silently.
    pub fn parse_homework_statuses(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<Homework>, WatchError> {
        if response.status != 200 {
            return Err(WatchError::ApiRequest(format!(
                "код ответа API: {}",
                response.status
            )));
        }
        let payload: Value = serde_json::from_str(&response.body)
            .map_err(|_| WatchError::TypeKind("тело ответа не является корректным JSON"))?;
        validate(&payload)
    }
}

/// Check the payload shape and decode the `homeworks` list.
fn validate(payload: &Value) -> Result<Vec<Homework>, WatchError> {
    let map = payload
        .as_object()
        .ok_or(WatchError::TypeKind("ответ не является объектом"))?;
    let homeworks = map
        .get("homeworks")
        .ok_or(WatchError::MissingField("homeworks"))?;
    let entries = homeworks
        .as_array()
        .ok_or(WatchError::TypeKind("по ключу \"homeworks\" получен не список"))?;
    entries
        .iter()
        .map(|entry| {
            if !entry.is_object() {
                return Err(WatchError::TypeKind(
                    "элемент списка homeworks не является объектом",
                ));
            }
            // Fields are optional at this stage; the extractor reports
            // which one is missing when the entry is actually used.
            serde_json::from_value(entry.clone())
                .map_err(|_| WatchError::TypeKind("элемент списка homeworks не декодируется"))
        })
        .collect()
}
