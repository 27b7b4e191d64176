//! Integration tests for the full interview flow against a mock service

#[cfg(test)]
mod tests {
    use std::io::Write;

    use greenroom::interview::{CandidateProfile, Interview, Speaker, Stage, Turn};

    fn fake_resume() -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("resume")
            .suffix(".pdf")
            .tempfile()
            .unwrap();
        file.write_all(b"%PDF-1.4 integration test resume").unwrap();
        file
    }

    fn profile(resume: &tempfile::NamedTempFile) -> CandidateProfile {
        CandidateProfile {
            name: "Alex".to_string(),
            role: "Backend Engineer".to_string(),
            resume_path: resume.path().to_path_buf(),
        }
    }

    /// Tests the happy path: the form starts a session and an answer round
    /// trip grows the transcript in order
    #[tokio::test]
    async fn it_walks_the_flow_from_form_to_reply() {
        let mut server = mockito::Server::new_async().await;
        let start_mock = server
            .mock("POST", "/start-interview")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"session_id": "s1", "message": "Tell me about yourself."}"#)
            .create();
        let answer_mock = server
            .mock("POST", "/answer")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"reply": "What was the hardest part?"}"#)
            .create();

        let resume = fake_resume();
        let mut interview = Interview::new(&server.url());
        assert_eq!(interview.stage(), Stage::Start);

        interview.start(&profile(&resume)).await.unwrap();
        assert_eq!(interview.stage(), Stage::Interviewing);
        assert_eq!(interview.session_id(), Some("s1"));

        interview.set_draft("I led the migration to Rust.");
        interview.send_answer().await.unwrap();

        start_mock.assert();
        answer_mock.assert();
        assert_eq!(
            interview.transcript().turns(),
            [
                Turn::ai("Tell me about yourself."),
                Turn::you("I led the migration to Rust."),
                Turn::ai("What was the hardest part?"),
            ]
        );
        assert!(!interview.is_busy());
    }

    /// Tests that a failed start leaves the form usable and a retry can
    /// still succeed
    #[tokio::test]
    async fn it_stays_on_the_form_when_the_start_fails() {
        let mut server = mockito::Server::new_async().await;
        let failed_start = server
            .mock("POST", "/start-interview")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "Error processing resume."}"#)
            .create();

        let resume = fake_resume();
        let mut interview = Interview::new(&server.url());

        let err = interview.start(&profile(&resume)).await.unwrap_err();
        failed_start.assert();
        assert_eq!(err.message, "Error processing resume.");
        assert_eq!(interview.stage(), Stage::Start);
        assert!(interview.transcript().is_empty());
        assert!(!interview.is_busy());

        // Newer mocks take precedence, so the retry hits this one.
        let retry_start = server
            .mock("POST", "/start-interview")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"session_id": "s2", "message": "Welcome back. Ready?"}"#)
            .create();

        interview.start(&profile(&resume)).await.unwrap();
        retry_start.assert();
        assert_eq!(interview.stage(), Stage::Interviewing);
        assert_eq!(interview.session_id(), Some("s2"));
        assert_eq!(interview.transcript().turns(), [Turn::ai("Welcome back. Ready?")]);
    }

    /// Tests that a failed answer keeps the candidate's turn, records the
    /// failure as an interviewer turn, and does not wedge later sends
    #[tokio::test]
    async fn it_records_answer_failures_as_interviewer_turns() {
        let mut server = mockito::Server::new_async().await;
        let start_mock = server
            .mock("POST", "/start-interview")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"session_id": "s1", "message": "Tell me about yourself."}"#)
            .create();
        let failed_answer = server
            .mock("POST", "/answer")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "Error processing answer."}"#)
            .create();

        let resume = fake_resume();
        let mut interview = Interview::new(&server.url());
        interview.start(&profile(&resume)).await.unwrap();

        interview.set_draft("I led the migration to Rust.");
        let turn = interview.send_answer().await.unwrap();

        start_mock.assert();
        failed_answer.assert();
        assert_eq!(turn, Turn::ai("Error: Error processing answer."));
        assert_eq!(
            interview.transcript().turns(),
            [
                Turn::ai("Tell me about yourself."),
                Turn::you("I led the migration to Rust."),
                Turn::ai("Error: Error processing answer."),
            ]
        );
        assert!(!interview.is_busy());

        let recovered_answer = server
            .mock("POST", "/answer")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"reply": "Let's try that again."}"#)
            .create();

        interview.set_draft("Happy to repeat it.");
        interview.send_answer().await.unwrap();
        recovered_answer.assert();
        assert_eq!(
            interview.transcript().last(),
            Some(&Turn::ai("Let's try that again."))
        );
    }

    /// Tests that blank drafts never reach the service
    #[tokio::test]
    async fn it_sends_no_request_for_a_blank_draft() {
        let mut server = mockito::Server::new_async().await;
        let start_mock = server
            .mock("POST", "/start-interview")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"session_id": "s1", "message": "Tell me about yourself."}"#)
            .create();
        let answer_mock = server.mock("POST", "/answer").expect(0).create();

        let resume = fake_resume();
        let mut interview = Interview::new(&server.url());
        interview.start(&profile(&resume)).await.unwrap();

        interview.set_draft("  \n ");
        assert!(interview.send_answer().await.is_none());

        start_mock.assert();
        answer_mock.assert();
        assert_eq!(interview.transcript().len(), 1);

        let speakers: Vec<Speaker> = interview.transcript().iter().map(|t| t.speaker).collect();
        assert_eq!(speakers, vec![Speaker::Ai]);
    }
}
