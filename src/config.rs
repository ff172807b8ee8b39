use anyhow::Result;
use dotenvy::dotenv;
use std::env;

/// How handled outcomes map onto HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Every handled outcome is a 200; callers inspect `error_code` in the body.
    #[default]
    Legacy,
    /// Validation 400, not found 404, storage failures 500.
    Rest,
}

impl StatusPolicy {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "rest" | "strict" => StatusPolicy::Rest,
            _ => StatusPolicy::Legacy,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub status_policy: StatusPolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8010".to_string())
            .parse()
            .unwrap_or(8010);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let status_policy = env::var("HTTP_STATUS_POLICY")
            .map(|v| StatusPolicy::parse(&v))
            .unwrap_or_default();

        Ok(Self {
            database_url,
            db_max_connections,
            host,
            port,
            log_level,
            status_policy,
        })
    }

    /// Socket address string the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
