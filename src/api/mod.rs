pub mod core;

pub use self::core::{ApiError, ApiErrorKind, StartResponse, send_answer, start_interview};
