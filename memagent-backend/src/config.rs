use std::env;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_endpoint: String,
    pub model: String,
    pub memory_dir: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set"),
            api_endpoint: env::var("OPENAI_API_ENDPOINT")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1-nano".to_string()),
            memory_dir: env::var("MEMORY_DIR").unwrap_or_else(|_| "./json_memory".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a valid number"),
        }
    }
}
