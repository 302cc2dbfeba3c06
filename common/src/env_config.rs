use std::{env, sync::Arc};

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// Holds everything needed to start the serial key service: bind address,
/// worker count, CORS origin, logging preferences, the shared admin secret
/// and whether the demo tables start with sample rows.
pub struct Config {
    pub environment: String, // development or production
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS, `*` allows any origin.
    pub cors_allowed_origin: String,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// File the logger appends to in addition to stdout.
    pub log_file: String,
    /// Shared secret required by every admin operation.
    pub admin_password: String,
    /// Fill the demo users/products/posts tables with sample rows on startup.
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            environment: "development".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            num_workers: 4,
            cors_allowed_origin: "*".to_string(),
            console_logging_enabled: true,
            log_file: "serials.log".to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            seed_demo_data: true,
        }
    }
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// Loads `.env` first if present. Every value is optional and falls back
    /// to the `Default` implementation.
    ///
    /// # Environment Variables
    ///
    /// - `ENVIRONMENT`: development or production (default: "development")
    /// - `IP`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 5000)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `CORS_ALLOWED_ORIGIN`: Allowed CORS origin (default: "*")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `LOG_FILE`: Log file path (default: "serials.log")
    /// - `ADMIN_PASSWORD`: Admin secret (default: "admin123")
    /// - `SEED_DEMO_DATA`: Seed the demo tables (default: true)
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        Arc::new(Config {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            server_host: env::var("IP").unwrap_or(defaults.server_host),
            server_port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.server_port),
            num_workers: env::var("WORKERS")
                .ok()
                .and_then(|workers| workers.parse().ok())
                .unwrap_or(defaults.num_workers),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or(defaults.cors_allowed_origin),
            console_logging_enabled: env_flag("ENABLE_CONSOLE_LOGGING", true),
            log_file: env::var("LOG_FILE").unwrap_or(defaults.log_file),
            admin_password: env::var("ADMIN_PASSWORD")
                .ok()
                .filter(|password| !password.is_empty())
                .unwrap_or(defaults.admin_password),
            seed_demo_data: env_flag("SEED_DEMO_DATA", true),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn uses_default_admin_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|value| value.to_lowercase() == "true")
        .unwrap_or(default)
}
