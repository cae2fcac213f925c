use std::env;

use crate::shared::constants::DEFAULT_STORE_API_VERSION;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub content_store: ContentStoreConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Content-store write configuration.
///
/// All write calls authenticate with `token`; read-side page components use
/// a separate token-less configuration and are not served by this process.
#[derive(Debug, Clone)]
pub struct ContentStoreConfig {
    /// Project identifier (forms the API hostname unless `api_base` is set)
    pub project_id: String,
    /// Dataset name (e.g. "production")
    pub dataset: String,
    /// Write API token
    pub token: String,
    /// Pinned API version string
    pub api_version: String,
    /// Optional base URL override for tests and self-hosted stores
    pub api_base: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            content_store: ContentStoreConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB, JSON bodies only

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ContentStoreConfig {
    pub fn from_env() -> Result<Self, String> {
        let project_id = env::var("CONTENT_STORE_PROJECT_ID")
            .map_err(|_| "CONTENT_STORE_PROJECT_ID environment variable is required".to_string())?;

        let dataset =
            env::var("CONTENT_STORE_DATASET").unwrap_or_else(|_| "production".to_string());

        let token = env::var("CONTENT_STORE_API_TOKEN")
            .map_err(|_| "CONTENT_STORE_API_TOKEN environment variable is required".to_string())?;

        let api_version = env::var("CONTENT_STORE_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_STORE_API_VERSION.to_string());

        let api_base = env::var("CONTENT_STORE_API_BASE")
            .ok()
            .filter(|s| !s.is_empty());

        Ok(Self {
            project_id,
            dataset,
            token,
            api_version,
            api_base,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title =
            env::var("SWAGGER_TITLE").unwrap_or_else(|_| "CyberSecure Incident API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Incident report ingestion for the CyberSecure awareness society".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
