use crate::api::{self, ApiError, StartResponse};
use crate::interview::models::{CandidateProfile, Stage, Transcript, Turn};

/// Client-side state of one interview session. All mutation goes through
/// [`Interview::start`] and [`Interview::send_answer`]; callers read the
/// transcript and flags through accessors.
///
/// Network calls are bracketed by two synchronous halves. `send_answer`
/// records the candidate's turn optimistically before the request goes out
/// and settles the outcome after it returns, so the busy interval and the
/// optimistic append are observable without a live service.
pub struct Interview {
    api_base_url: String,
    stage: Stage,
    session_id: Option<String>,
    transcript: Transcript,
    draft: String,
    busy: bool,
}

impl Interview {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.to_string(),
            stage: Stage::default(),
            session_id: None,
            transcript: Transcript::new(),
            draft: String::new(),
            busy: false,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the pending answer draft. The draft is only consumed by a
    /// send; editing it never touches the transcript.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submit the profile form. On success the session is recorded, the
    /// opening interviewer message becomes the first transcript turn, and
    /// the stage moves to [`Stage::Interviewing`]. On failure nothing
    /// changes and the caller decides how to surface the error, so the
    /// candidate can fix the form and resubmit.
    pub async fn start(&mut self, profile: &CandidateProfile) -> Result<Turn, ApiError> {
        self.busy = true;
        let outcome = api::start_interview(
            &self.api_base_url,
            &profile.name,
            &profile.role,
            &profile.resume_path,
        )
        .await;
        self.settle_start(outcome)
    }

    fn settle_start(
        &mut self,
        outcome: Result<StartResponse, ApiError>,
    ) -> Result<Turn, ApiError> {
        self.busy = false;
        let resp = outcome?;
        self.session_id = Some(resp.session_id);
        let opening = Turn::ai(resp.message);
        self.transcript.push(opening.clone());
        self.stage = Stage::Interviewing;
        Ok(opening)
    }

    /// Submit the current draft as the candidate's next answer and return
    /// the turn the exchange produced. Returns `None` without touching any
    /// state when there is no session yet, a send is already in flight, or
    /// the draft is blank.
    ///
    /// The candidate's turn is appended before the request goes out and
    /// stays in the transcript even when the request fails; the failure
    /// itself lands as an interviewer turn prefixed with `Error:`.
    pub async fn send_answer(&mut self) -> Option<Turn> {
        let (session_id, answer) = self.record_answer()?;
        let outcome = api::send_answer(&self.api_base_url, &session_id, &answer).await;
        Some(self.settle_answer(outcome))
    }

    /// First half of a send: append the candidate's turn, clear the draft,
    /// and raise the busy flag. Returns what to submit, or `None` when the
    /// send must not happen.
    fn record_answer(&mut self) -> Option<(String, String)> {
        let session_id = self.session_id.clone()?;
        if self.busy || self.draft.trim().is_empty() {
            return None;
        }
        let answer = std::mem::take(&mut self.draft);
        self.transcript.push(Turn::you(answer.clone()));
        self.busy = true;
        Some((session_id, answer))
    }

    /// Second half of a send: append the outcome and drop the busy flag.
    /// The flag clears on every path so one failed exchange never wedges
    /// the session.
    fn settle_answer(&mut self, outcome: Result<String, ApiError>) -> Turn {
        self.busy = false;
        let turn = match outcome {
            Ok(reply) => Turn::ai(reply),
            Err(err) => {
                let message = if err.message.is_empty() {
                    "Server issue".to_string()
                } else {
                    err.message
                };
                Turn::ai(format!("Error: {}", message))
            }
        };
        self.transcript.push(turn.clone());
        turn
    }
}
