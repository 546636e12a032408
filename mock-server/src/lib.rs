//! Axum stand-in for both external services the watcher talks to: the
//! homework review API and the Telegram Bot API.
//!
//! Tests script the review API through the `/control` routes (set the
//! homework list, force a failure status) and read back every message the
//! "Telegram" side received.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Homework {
    pub homework_name: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_comment: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SentMessage {
    pub chat_id: String,
    pub text: String,
}

#[derive(Default)]
pub struct ScriptedState {
    homeworks: Vec<Homework>,
    /// When set, the statuses route replies with this code instead of 200.
    fail_with: Option<u16>,
    sent: Vec<SentMessage>,
}

pub type Shared = Arc<RwLock<ScriptedState>>;

pub fn app() -> Router {
    let state: Shared = Arc::new(RwLock::new(ScriptedState::default()));
    Router::new()
        .route("/api/user_api/homework_statuses/", get(homework_statuses))
        .route("/{bot_token}/sendMessage", post(send_message))
        .route("/control/homeworks", post(set_homeworks))
        .route("/control/api-status", post(set_api_status))
        .route("/control/sent", get(list_sent))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

#[derive(Deserialize)]
struct StatusQuery {
    from_date: u64,
}

async fn homework_statuses(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<StatusQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !auth.starts_with("OAuth ") {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let state = state.read().await;
    if let Some(code) = state.fail_with {
        return Err(StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR));
    }
    Ok(Json(serde_json::json!({
        "homeworks": state.homeworks,
        "current_date": query.from_date,
    })))
}

#[derive(Deserialize)]
struct SendMessageBody {
    chat_id: String,
    text: String,
}

async fn send_message(
    State(state): State<Shared>,
    Path(bot_token): Path<String>,
    Json(body): Json<SendMessageBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    // Telegram puts the token in the path as one "bot<token>" segment.
    let token = bot_token
        .strip_prefix("bot")
        .ok_or(StatusCode::NOT_FOUND)?;
    if token.is_empty() {
        return Err(StatusCode::NOT_FOUND);
    }
    let mut state = state.write().await;
    state.sent.push(SentMessage {
        chat_id: body.chat_id,
        text: body.text,
    });
    Ok(Json(serde_json::json!({
        "ok": true,
        "result": { "message_id": state.sent.len() },
    })))
}

async fn set_homeworks(
    State(state): State<Shared>,
    Json(homeworks): Json<Vec<Homework>>,
) -> StatusCode {
    state.write().await.homeworks = homeworks;
    StatusCode::NO_CONTENT
}

#[derive(Deserialize)]
struct ApiStatusBody {
    /// `null` restores normal 200 behavior.
    status: Option<u16>,
}

async fn set_api_status(State(state): State<Shared>, Json(body): Json<ApiStatusBody>) -> StatusCode {
    state.write().await.fail_with = body.status;
    StatusCode::NO_CONTENT
}

async fn list_sent(State(state): State<Shared>) -> Json<Vec<SentMessage>> {
    Json(state.read().await.sent.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homework_serializes_without_empty_comment() {
        let hw = Homework {
            homework_name: "hw1".to_string(),
            status: "approved".to_string(),
            reviewer_comment: None,
        };
        let json = serde_json::to_value(&hw).unwrap();
        assert_eq!(json["homework_name"], "hw1");
        assert_eq!(json["status"], "approved");
        assert!(json.get("reviewer_comment").is_none());
    }

    #[test]
    fn send_message_body_requires_both_fields() {
        let result: Result<SendMessageBody, _> = serde_json::from_str(r#"{"text":"hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn api_status_body_accepts_null() {
        let body: ApiStatusBody = serde_json::from_str(r#"{"status":null}"#).unwrap();
        assert!(body.status.is_none());
        let body: ApiStatusBody = serde_json::from_str(r#"{"status":503}"#).unwrap();
        assert_eq!(body.status, Some(503));
    }
}
