use std::env;

/// Hard ceiling on admin changelist page sizes.
pub const DEFAULT_ADMIN_PAGE_SIZE_CAP: i64 = 100;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub otel_exporter_endpoint: Option<String>,
    pub service_name: String,
    pub metrics_port: u16,
    pub admin_page_size_cap: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://storefront.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let otel_exporter_endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();

        let service_name = env::var("SERVICE_NAME").unwrap_or_else(|_| "storefront".to_string());

        let metrics_port = env::var("METRICS_PORT")
            .unwrap_or_else(|_| "9000".to_string())
            .parse()
            .unwrap_or(9000);

        let admin_page_size_cap = match env::var("ADMIN_PAGE_SIZE_CAP") {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|cap| *cap > 0)
                .ok_or(ConfigError::InvalidPageSizeCap(raw))?,
            Err(_) => DEFAULT_ADMIN_PAGE_SIZE_CAP,
        };

        Ok(Config {
            database_url,
            server_host,
            server_port,
            otel_exporter_endpoint,
            service_name,
            metrics_port,
            admin_page_size_cap,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("ADMIN_PAGE_SIZE_CAP must be a positive integer, got '{0}'")]
    InvalidPageSizeCap(String),
}
