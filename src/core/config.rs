use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::shared::constants::{DEFAULT_SESSION_SWEEP_INTERVAL_SECS, DEFAULT_SESSION_TTL_SECS};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub directory: DirectoryConfig,
    pub session: SessionConfig,
    pub shipping: ShippingConfig,
    pub label: LabelConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Location of the postal code dataset (JSON array of address records)
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub data_path: PathBuf,
}

/// Lifetime of per-user search sessions
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub ttl: Duration,
    pub sweep_interval: Duration,
}

/// Configuration for the Mengantar shipping-rate API
#[derive(Debug, Clone)]
pub struct ShippingConfig {
    pub base_url: String,
    /// Mengantar address id of the sender
    pub origin_id: String,
    /// Per-request timeout applied to every call to the provider
    pub timeout: Duration,
    pub weight_kg: u32,
}

/// Shipping label template settings
#[derive(Debug, Clone)]
pub struct LabelConfig {
    pub template_path: PathBuf,
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
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            directory: DirectoryConfig::from_env()?,
            session: SessionConfig::from_env()?,
            shipping: ShippingConfig::from_env()?,
            label: LabelConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
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

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DirectoryConfig {
    const DEFAULT_DATA_PATH: &'static str = "data/kodepos.json";

    pub fn from_env() -> Result<Self, String> {
        let data_path = env::var("KODEPOS_DATA_PATH")
            .unwrap_or_else(|_| Self::DEFAULT_DATA_PATH.to_string())
            .into();

        Ok(Self { data_path })
    }
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, String> {
        let ttl_secs = env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "SESSION_TTL_SECS must be a valid number".to_string())?;

        let sweep_interval_secs = env::var("SESSION_SWEEP_INTERVAL_SECS")
            .unwrap_or_else(|_| DEFAULT_SESSION_SWEEP_INTERVAL_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "SESSION_SWEEP_INTERVAL_SECS must be a valid number".to_string())?;

        if sweep_interval_secs == 0 {
            return Err("SESSION_SWEEP_INTERVAL_SECS must be greater than zero".to_string());
        }

        Ok(Self {
            ttl: Duration::from_secs(ttl_secs),
            sweep_interval: Duration::from_secs(sweep_interval_secs),
        })
    }
}

impl ShippingConfig {
    const DEFAULT_BASE_URL: &'static str = "https://app.mengantar.com";
    const DEFAULT_ORIGIN_ID: &'static str = "5fc62debf8f44b34aa4bded9";
    const DEFAULT_TIMEOUT_SECS: u64 = 10;
    const DEFAULT_WEIGHT_KG: u32 = 1;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("MENGANTAR_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let origin_id =
            env::var("ORIGIN_ID").unwrap_or_else(|_| Self::DEFAULT_ORIGIN_ID.to_string());

        let timeout_secs = env::var("SHIPPING_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "SHIPPING_TIMEOUT_SECS must be a valid number".to_string())?;

        let weight_kg = env::var("SHIPPING_WEIGHT_KG")
            .unwrap_or_else(|_| Self::DEFAULT_WEIGHT_KG.to_string())
            .parse::<u32>()
            .map_err(|_| "SHIPPING_WEIGHT_KG must be a valid number".to_string())?;

        Ok(Self {
            base_url,
            origin_id,
            timeout: Duration::from_secs(timeout_secs),
            weight_kg,
        })
    }
}

impl LabelConfig {
    const DEFAULT_TEMPLATE_PATH: &'static str = "data/label.txt.jinja";

    pub fn from_env() -> Result<Self, String> {
        let template_path = env::var("LABEL_TEMPLATE_PATH")
            .unwrap_or_else(|_| Self::DEFAULT_TEMPLATE_PATH.to_string())
            .into();

        Ok(Self { template_path })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Kodepos API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Indonesian postal code lookup and shipping label service".to_string()
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
