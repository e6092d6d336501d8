use {
    crate::domain::{error::ConfigError, id::ServiceLabel},
    std::{
        env,
        net::{Ipv4Addr, SocketAddr},
        str::FromStr,
        sync::Arc,
        time::Duration,
    },
};

pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_SERVICE_NAME: &str = "backend-go";
pub const DEFAULT_GREETING: &str = "Hello from Go microservice";
const DEFAULT_AUDIT_TIMEOUT_MS: u64 = 3_000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub service: ServiceLabel,
    pub greeting: Arc<str>,
    pub audit_timeout: Duration,
    pub request_timeout: Duration,
    pub db_max_connections: u32,
}

impl Config {
    /// Read settings from the process environment (after `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr = parse_or(
            get("BIND_ADDR"),
            "BIND_ADDR",
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        )?;

        let service_name =
            get("SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
        let service = ServiceLabel::new(service_name.clone()).map_err(|_| ConfigError::Invalid {
            key: "SERVICE_NAME",
            value: service_name,
        })?;

        let greeting = get("GREETING").unwrap_or_else(|| DEFAULT_GREETING.to_string());

        let audit_timeout_ms =
            parse_or(get("AUDIT_TIMEOUT_MS"), "AUDIT_TIMEOUT_MS", DEFAULT_AUDIT_TIMEOUT_MS)?;
        let request_timeout_ms = parse_or(
            get("REQUEST_TIMEOUT_MS"),
            "REQUEST_TIMEOUT_MS",
            DEFAULT_REQUEST_TIMEOUT_MS,
        )?;
        let db_max_connections = parse_or(
            get("DB_MAX_CONNECTIONS"),
            "DB_MAX_CONNECTIONS",
            DEFAULT_DB_MAX_CONNECTIONS,
        )?;

        if db_max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }

        // Audit deadline has to fire before the request timeout.
        if request_timeout_ms <= audit_timeout_ms {
            return Err(ConfigError::Invalid {
                key: "REQUEST_TIMEOUT_MS",
                value: request_timeout_ms.to_string(),
            });
        }

        Ok(Self {
            database_url,
            bind_addr,
            service,
            greeting: greeting.into(),
            audit_timeout: Duration::from_millis(audit_timeout_ms),
            request_timeout: Duration::from_millis(request_timeout_ms),
            db_max_connections,
        })
    }
}

fn parse_or<T: FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
