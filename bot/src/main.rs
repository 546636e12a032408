//! Homework status watcher bot.
//!
//! Polls the homework review API every ten minutes, feeds the outcome to the
//! dedup state machine from `homework-core`, and relays whatever it emits to
//! one fixed Telegram chat. All I/O happens here, synchronously, with a
//! single ureq agent; the core stays deterministic.

mod config;

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use homework_core::{
    current_status, HttpMethod, HttpRequest, HttpResponse, SendError, StatusClient,
    TelegramClient, WatchError, Watcher, TELEGRAM_API,
};
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::{Config, ConfigError};

const ENDPOINT: &str = "https://practicum.yandex.ru";
const RETRY_PERIOD: Duration = Duration::from_secs(600);

fn main() -> Result<(), ConfigError> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            error!("{error}");
            return Err(error);
        }
    };

    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();
    let status_client = StatusClient::new(ENDPOINT, &config.practicum_token);
    let telegram = TelegramClient::new(TELEGRAM_API, &config.telegram_token, &config.chat_id);
    let mut watcher = Watcher::new();

    info!(
        "watching homework statuses, polling every {}s",
        RETRY_PERIOD.as_secs()
    );
    loop {
        let outcome = poll_once(&agent, &status_client);
        if let Err(error) = &outcome {
            error!("poll failed: {error}");
        }
        match watcher.digest(outcome) {
            Some(message) => notify(&agent, &telegram, &message),
            None => debug!("nothing new to report"),
        }
        thread::sleep(RETRY_PERIOD);
    }
}

/// One poll cycle: fetch, validate, and compute the current status text.
fn poll_once(agent: &ureq::Agent, client: &StatusClient) -> Result<String, WatchError> {
    let from_date = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let request = client.build_homework_statuses(from_date);
    let response = execute(agent, request)
        .map_err(|e| WatchError::ApiRequest(format!("ошибка подключения: {e}")))?;
    let homeworks = client.parse_homework_statuses(response)?;
    current_status(&homeworks)
}

/// Best-effort delivery: failures are logged and dropped, never retried.
fn notify(agent: &ureq::Agent, telegram: &TelegramClient, message: &str) {
    let result = telegram.build_send_message(message).and_then(|request| {
        let response = execute(agent, request)
            .map_err(|e| SendError(format!("transport error: {e}")))?;
        telegram.parse_send_message(response)
    });
    match result {
        Ok(()) => info!("notification sent: {message}"),
        Err(error) => error!("{error}"),
    }
}

/// Execute an `HttpRequest` with ureq. Non-2xx responses come back as data;
/// only transport-level failures surface as `Err`.
fn execute(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, ureq::Error> {
    let mut response = match (request.method, request.body) {
        (HttpMethod::Get, _) => {
            let mut call = agent.get(&request.path);
            for (name, value) in &request.headers {
                call = call.header(name.as_str(), value.as_str());
            }
            call.call()?
        }
        (HttpMethod::Post, Some(body)) => {
            let mut call = agent.post(&request.path);
            for (name, value) in &request.headers {
                call = call.header(name.as_str(), value.as_str());
            }
            call.send(body.as_bytes())?
        }
        (HttpMethod::Post, None) => agent.post(&request.path).send_empty()?,
    };

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse { status, body })
}
