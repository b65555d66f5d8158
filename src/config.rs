/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub reset_on_startup: bool,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional with defaults: `DATABASE_URL`, `RESET_ON_STARTUP`, `LOG_LEVEL`.
    ///
    /// `RESET_ON_STARTUP` defaults to `true`: the store is wiped and reseeded
    /// on every launch, matching the app's historical behavior. Set it to
    /// `false` to keep accounts and tournaments across restarts.
    ///
    /// # Errors
    ///
    /// Returns an error if `RESET_ON_STARTUP` is set to something other than
    /// `true` or `false`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://beachduo.db?mode=rwc".to_string());

        let reset_on_startup = std::env::var("RESET_ON_STARTUP")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .map_err(|_| anyhow::anyhow!("RESET_ON_STARTUP must be 'true' or 'false'"))?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            database_url,
            reset_on_startup,
            log_level,
        })
    }
}
