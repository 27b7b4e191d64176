use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_base_url =
            env::var("GREENROOM_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

        Self { api_base_url }
    }
}
