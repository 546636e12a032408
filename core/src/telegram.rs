//! Request builder and response parser for the Telegram Bot API
//! `sendMessage` call, the only Telegram method the watcher uses.
//!
//! # Design
//! Same host-does-IO split as [`crate::StatusClient`]. Delivery is
//! best-effort: the parse method reports failures as [`SendError`], and the
//! host is expected to log and drop them rather than retry.

use serde::Serialize;

use crate::error::SendError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Default Telegram Bot API endpoint.
pub const TELEGRAM_API: &str = "https://api.telegram.org";

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Stateless client for sending plain-text messages to one fixed chat.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(base_url: &str, token: &str, chat_id: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }

    /// Build a `sendMessage` request for the fixed recipient.
    pub fn build_send_message(&self, text: &str) -> Result<HttpRequest, SendError> {
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text,
        };
        let body = serde_json::to_string(&payload)
            .map_err(|e| SendError(format!("serialization failed: {e}")))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/bot{}/sendMessage", self.base_url, self.token),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Check the `sendMessage` response. The body is only read on failure,
    /// where Telegram puts a human-readable description.
    pub fn parse_send_message(&self, response: HttpResponse) -> Result<(), SendError> {
        if response.status == 200 {
            return Ok(());
        }
        Err(SendError(format!(
            "Telegram API status {}: {}",
            response.status,
            response.body.trim()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TelegramClient {
        TelegramClient::new(TELEGRAM_API, "123:abc", "4242")
    }

    #[test]
    fn build_send_message_targets_bot_method() {
        let req = client().build_send_message("hello").unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "https://api.telegram.org/bot123:abc/sendMessage");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["chat_id"], "4242");
        assert_eq!(body["text"], "hello");
    }

    #[test]
    fn parse_send_message_ok() {
        let response = HttpResponse {
            status: 200,
            body: r#"{"ok":true,"result":{"message_id":1}}"#.to_string(),
        };
        assert!(client().parse_send_message(response).is_ok());
    }

    #[test]
    fn parse_send_message_failure_carries_description() {
        let response = HttpResponse {
            status: 400,
            body: r#"{"ok":false,"description":"Bad Request: chat not found"}"#.to_string(),
        };
        let err = client().parse_send_message(response).unwrap_err();
        assert!(err.0.contains("400"));
        assert!(err.0.contains("chat not found"));
    }
}
