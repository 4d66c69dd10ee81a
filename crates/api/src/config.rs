use uniformes_core::box_planner::DEFAULT_BOX_CAPACITY;
use uniformes_core::error::CoreError;
use uniformes_core::label_content::SenderInfo;
use uniformes_core::label_layout::LabelGrid;
use uniformes_core::shipping::ShippingConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Default packing parameters; requests may override capacity and grid.
    pub shipping: ShippingConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `BOX_CAPACITY`           | `12`                       |
    /// | `LABEL_SLOTS_PER_ROW`    | `2`                        |
    /// | `LABEL_SLOTS_PER_COLUMN` | `2`                        |
    /// | `SENDER_NAME`            | distribution center name   |
    /// | `SENDER_ADDRESS`         | distribution center address|
    /// | `SENDER_PHONE`           | empty                      |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shipping = shipping_config_from(|key| std::env::var(key).ok())
            .unwrap_or_else(|e| panic!("Invalid packing configuration: {e}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shipping,
        }
    }
}

/// Build the packing configuration from a variable lookup.
///
/// Unset variables take their defaults. Non-numeric or zero values are
/// rejected rather than clamped.
pub fn shipping_config_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ShippingConfig, CoreError> {
    let positive = |key: &str, default: u32| -> Result<u32, CoreError> {
        let value = match lookup(key) {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                CoreError::InvalidConfiguration(format!(
                    "{key} must be a positive integer, got '{raw}'"
                ))
            })?,
            None => default,
        };
        if value == 0 {
            return Err(CoreError::InvalidConfiguration(format!(
                "{key} must be a positive integer, got 0"
            )));
        }
        Ok(value)
    };

    let default_sender = SenderInfo::default();
    let config = ShippingConfig {
        capacity_per_box: positive("BOX_CAPACITY", DEFAULT_BOX_CAPACITY)?,
        grid: LabelGrid::new(
            positive("LABEL_SLOTS_PER_ROW", LabelGrid::STANDARD.slots_per_row)?,
            positive("LABEL_SLOTS_PER_COLUMN", LabelGrid::STANDARD.slots_per_column)?,
        )?,
        filter: Default::default(),
        sender: SenderInfo {
            name: lookup("SENDER_NAME").unwrap_or(default_sender.name),
            address: lookup("SENDER_ADDRESS").unwrap_or(default_sender.address),
            phone: lookup("SENDER_PHONE").unwrap_or(default_sender.phone),
        },
    };
    config.validate()?;
    Ok(config)
}
