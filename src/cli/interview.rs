use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::{Cmd, DefaultEditor, EventHandler, KeyCode, KeyEvent, Modifiers};
use std::path::PathBuf;

use crate::core::AppConfig;
use crate::interview::{CandidateProfile, Interview};

pub async fn run(
    config: &AppConfig,
    mut name: Option<String>,
    mut role: Option<String>,
    mut resume: Option<PathBuf>,
) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    // Enter submits the answer; Alt+Enter inserts a line break instead.
    rl.bind_sequence(
        KeyEvent(KeyCode::Enter, Modifiers::ALT),
        EventHandler::Simple(Cmd::Newline),
    );

    println!("AI Interview Agent");
    println!("Enter sends your answer, Alt+Enter adds a line break, Ctrl-D ends the session.");
    println!();

    let mut interview = Interview::new(&config.api_base_url);

    // Profile form. Flag values only prefill the first attempt so a failed
    // start falls back to prompting instead of retrying the same form.
    let opening = loop {
        let Some(profile) = prompt_profile(&mut rl, name.take(), role.take(), resume.take()) else {
            return Ok(());
        };

        println!("Starting interview...");
        match interview.start(&profile).await {
            Ok(opening) => break opening,
            Err(err) => println!("Error: {}", err),
        }
    };

    println!();
    println!("{}", opening);

    loop {
        let readline = rl.readline("You> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                interview.set_draft(line);
                println!("Interviewer: Thinking...");
                if let Some(turn) = interview.send_answer().await {
                    println!("{}", turn);
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

/// Collect whatever profile fields are still missing. Returns `None` when
/// the candidate bails out at a prompt.
fn prompt_profile(
    rl: &mut DefaultEditor,
    name: Option<String>,
    role: Option<String>,
    resume: Option<PathBuf>,
) -> Option<CandidateProfile> {
    let name = match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => prompt_required(rl, "Your name: ")?,
    };
    let role = match role {
        Some(role) if !role.trim().is_empty() => role,
        _ => prompt_required(rl, "Job role (e.g. Backend Engineer): ")?,
    };
    let resume_path = match resume {
        Some(path) if path.is_file() => path,
        Some(path) => {
            println!("No file at {}", path.display());
            prompt_resume(rl)?
        }
        None => prompt_resume(rl)?,
    };

    Some(CandidateProfile {
        name,
        role,
        resume_path,
    })
}

/// Prompt until the candidate types something non-blank. `None` on Ctrl-C
/// or Ctrl-D.
fn prompt_required(rl: &mut DefaultEditor, prompt: &str) -> Option<String> {
    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if !line.is_empty() {
                    return Some(line.to_string());
                }
            }
            Err(_) => return None,
        }
    }
}

fn prompt_resume(rl: &mut DefaultEditor) -> Option<PathBuf> {
    loop {
        let line = prompt_required(rl, "Resume file (PDF): ")?;
        let path = PathBuf::from(line);
        if path.is_file() {
            return Some(path);
        }
        println!("No file at {}", path.display());
    }
}
