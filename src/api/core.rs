use std::path::Path;

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// What went wrong when talking to the interview service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never completed cleanly: connection failure, an
    /// unreadable resume file, or a response the client could not decode.
    Transport,
    /// The service answered and reported a failure of its own, either as a
    /// `detail` member on an error status or an `error` member on a 200.
    Service,
}

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Service,
            message: message.into(),
        }
    }
}

/// Payload returned when a session is created.
#[derive(Debug, Clone, Deserialize)]
pub struct StartResponse {
    pub session_id: String,
    pub message: String,
}

/// The answer endpoint reports failures like an expired session inside a
/// 200 body, as an `error` member instead of a `reply`.
#[derive(Debug, Deserialize)]
struct AnswerResponse {
    reply: Option<String>,
    error: Option<String>,
}

/// Create an interview session by posting the candidate profile and the
/// resume bytes as one multipart form. The service replies with the session
/// id and the opening interviewer message.
pub async fn start_interview(
    api_base_url: &str,
    candidate_name: &str,
    job_role: &str,
    resume_path: &Path,
) -> Result<StartResponse, ApiError> {
    let resume = std::fs::read(resume_path).map_err(|e| {
        ApiError::transport(format!("Could not read resume {}: {}", resume_path.display(), e))
    })?;
    let file_name = resume_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());
    let mime = mime_guess::from_path(resume_path).first_or_octet_stream();
    let resume_part = Part::bytes(resume)
        .file_name(file_name)
        .mime_str(mime.essence_str())
        .map_err(|e| ApiError::transport(e.to_string()))?;

    let form = Form::new()
        .text("candidate_name", candidate_name.to_string())
        .text("job_role", job_role.to_string())
        .part("resume", resume_part);

    let url = format!("{}/start-interview", api_base_url.trim_end_matches('/'));
    tracing::debug!("Creating interview session via {}", url);

    let response = reqwest::Client::new()
        .post(url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;
    let (status, body) = read_body(response).await?;
    if !status.is_success() {
        return Err(service_error(status, &body));
    }

    parse_json(&body)
}

/// Post one answer for an existing session and return the interviewer's
/// reply text.
pub async fn send_answer(
    api_base_url: &str,
    session_id: &str,
    answer: &str,
) -> Result<String, ApiError> {
    let form = Form::new()
        .text("session_id", session_id.to_string())
        .text("user_answer", answer.to_string());

    let url = format!("{}/answer", api_base_url.trim_end_matches('/'));
    tracing::debug!("Sending answer for session {} via {}", session_id, url);

    let response = reqwest::Client::new()
        .post(url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;
    let (status, body) = read_body(response).await?;
    if !status.is_success() {
        return Err(service_error(status, &body));
    }

    let resp: AnswerResponse = parse_json(&body)?;
    match (resp.reply, resp.error) {
        (Some(reply), _) => Ok(reply),
        (None, Some(error)) => Err(ApiError::service(error)),
        (None, None) => Err(ApiError::service("Reply missing from response")),
    }
}

async fn read_body(response: reqwest::Response) -> Result<(StatusCode, String), ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;
    Ok((status, body))
}

fn parse_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!("Parsing interview service response failed for {}\nError:{}", body, e);
        ApiError::transport(format!("Failed to parse response: {}", e))
    })
}

/// Map an error status to a service-reported failure when the body carries
/// a `detail` member, as the interview service's errors do. Validation
/// errors put structured data in `detail`; those are passed along as
/// compact JSON. Anything else stays a transport failure.
fn service_error(status: StatusCode, body: &str) -> ApiError {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| match v.get("detail") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        });
    match detail {
        Some(detail) => ApiError::service(detail),
        None => ApiError::transport(format!("HTTP {}: {}", status, body)),
    }
}
