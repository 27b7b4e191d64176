pub mod core;
pub mod models;

pub use self::core::Interview;
pub use self::models::{CandidateProfile, Speaker, Stage, Transcript, Turn};
