//! The core models for a stateful interview session against the remote
//! interview service.
use std::fmt;
use std::path::PathBuf;

/// Which view the client is showing. A run begins at the profile form and
/// moves to the chat exactly once, after the service creates a session.
/// There is no path back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Start,
    Interviewing,
}

/// Who authored a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    You,
    Ai,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::You => "You",
            Speaker::Ai => "AI",
        }
    }
}

/// A single entry in the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    pub fn you(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::You,
            text: text.into(),
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Ai,
            text: text.into(),
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker.label(), self.text)
    }
}

/// Chronological sequence of turns. Append-only: once a turn is in, it is
/// never edited or removed, including the optimistic turn of a failed send.
#[derive(Debug, Default)]
pub struct Transcript(Vec<Turn>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, turn: Turn) {
        self.0.push(turn)
    }

    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.0.iter()
    }
}

/// Everything the start form collects. The resume is kept as a path; its
/// bytes are read when the session-creation request is built.
#[derive(Debug, Clone)]
pub struct CandidateProfile {
    pub name: String,
    pub role: String,
    pub resume_path: PathBuf,
}
