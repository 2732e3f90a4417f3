use std::net::IpAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub source: SheetSource,
    pub contact_recipient: String,
    pub smtp: Option<SmtpConfig>,
    pub max_body_size: usize,
    pub cors_origins: Vec<HeaderValue>,
    pub trusted_proxies: Vec<IpNet>,
    pub contact_rate_limit: u32,
    pub contact_rate_window_secs: u64,
    pub log_level: String,
}

/// Where the portfolio workbook is read from.
#[derive(Debug, Clone)]
pub enum SheetSource {
    /// A local JSON workbook: `{ "<sheet name>": [[cell, ...], ...] }`.
    Workbook(PathBuf),
    Google {
        spreadsheet_id: String,
        api_key: String,
        api_url: String,
    },
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub tls: TlsMode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TlsMode {
    StartTls,
    Tls,
    None,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("SHEETFOLIO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SHEETFOLIO_HOST: {e}"))?;

        let port: u16 = env_or("SHEETFOLIO_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid SHEETFOLIO_PORT: {e}"))?;

        let source = match std::env::var("SHEETFOLIO_WORKBOOK_PATH").ok() {
            Some(path) if !path.trim().is_empty() => SheetSource::Workbook(PathBuf::from(path)),
            _ => SheetSource::Google {
                spreadsheet_id: env_required("SHEETFOLIO_SPREADSHEET_ID")?,
                api_key: env_required("SHEETFOLIO_SHEETS_API_KEY")?,
                api_url: env_or("SHEETFOLIO_SHEETS_API_URL", "https://sheets.googleapis.com/v4"),
            },
        };

        let contact_recipient = env_required("SHEETFOLIO_CONTACT_RECIPIENT")?;

        let max_body_size: usize = env_or("SHEETFOLIO_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid SHEETFOLIO_MAX_BODY_SIZE: {e}"))?;

        let cors_origins: Vec<HeaderValue> = env_or("SHEETFOLIO_CORS_ORIGINS", "")
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                HeaderValue::from_str(s.trim())
                    .map_err(|e| format!("Invalid SHEETFOLIO_CORS_ORIGINS entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let trusted_proxies: Vec<IpNet> = env_or("SHEETFOLIO_TRUSTED_PROXIES", "")
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|e| format!("Invalid SHEETFOLIO_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let contact_rate_limit: u32 = env_or("SHEETFOLIO_CONTACT_RATE_LIMIT", "5")
            .parse()
            .map_err(|e| format!("Invalid SHEETFOLIO_CONTACT_RATE_LIMIT: {e}"))?;

        let contact_rate_window_secs: u64 = env_or("SHEETFOLIO_CONTACT_RATE_WINDOW_SECS", "600")
            .parse()
            .map_err(|e| format!("Invalid SHEETFOLIO_CONTACT_RATE_WINDOW_SECS: {e}"))?;

        let log_level = env_or("SHEETFOLIO_LOG_LEVEL", "info");

        let smtp = match (
            std::env::var("SHEETFOLIO_SMTP_HOST").ok(),
            std::env::var("SHEETFOLIO_SMTP_PORT").ok(),
            std::env::var("SHEETFOLIO_SMTP_USER").ok(),
            std::env::var("SHEETFOLIO_SMTP_PASS").ok(),
            std::env::var("SHEETFOLIO_SMTP_FROM").ok(),
        ) {
            (Some(host), Some(port), Some(user), Some(pass), Some(from)) => Some(SmtpConfig {
                host,
                port: port
                    .parse()
                    .map_err(|e| format!("Invalid SHEETFOLIO_SMTP_PORT: {e}"))?,
                user,
                pass,
                from,
                tls: parse_tls_mode(&env_or("SHEETFOLIO_SMTP_TLS", "starttls"))?,
            }),
            _ => None,
        };

        Ok(Config {
            host,
            port,
            source,
            contact_recipient,
            smtp,
            max_body_size,
            cors_origins,
            trusted_proxies,
            contact_rate_limit,
            contact_rate_window_secs,
            log_level,
        })
    }
}

fn parse_tls_mode(value: &str) -> Result<TlsMode, String> {
    match value.to_ascii_lowercase().as_str() {
        "starttls" => Ok(TlsMode::StartTls),
        "tls" => Ok(TlsMode::Tls),
        "none" => Ok(TlsMode::None),
        other => Err(format!(
            "Invalid SHEETFOLIO_SMTP_TLS: '{other}' (expected starttls, tls or none)"
        )),
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
