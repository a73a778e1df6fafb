use std::{env, path::PathBuf};

pub const DEFAULT_SALES_URL: &str =
    "https://asia-south1.workflow.boltic.app/b531bc6e-11c5-4cf3-a910-443f37ef9e42";
const DEFAULT_SESSION_PATH: &str = "data/session.json";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub sales_url: String,
    pub session_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let sales_url = env::var("SALES_ENDPOINT_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SALES_URL.to_string());

        Self {
            port,
            sales_url,
            session_path: resolve_session_path(),
        }
    }
}

pub fn resolve_session_path() -> PathBuf {
    if let Ok(path) = env::var("SESSION_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_SESSION_PATH)
}
