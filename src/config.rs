use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub job_api_base_url: Url,
    pub job_api_token: Option<String>,
    pub job_api_timeout_secs: u64,
    pub session_idle_timeout_secs: u64,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

const DEFAULT_JOB_API_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SESSION_IDLE_TIMEOUT_SECS: u64 = 2 * 60 * 60;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let job_api_base_url = get_env("JOB_API_BASE_URL")?;
        let job_api_base_url = Url::parse(&job_api_base_url)
            .map_err(|e| Error::Config(format!("Invalid value for JOB_API_BASE_URL: {}", e)))?;

        let job_api_timeout_secs = match env::var("JOB_API_TIMEOUT_SECS") {
            Ok(_) => get_env_parse("JOB_API_TIMEOUT_SECS")?,
            Err(_) => DEFAULT_JOB_API_TIMEOUT_SECS,
        };

        let session_idle_timeout_secs = match env::var("SESSION_IDLE_TIMEOUT_SECS") {
            Ok(_) => get_env_parse("SESSION_IDLE_TIMEOUT_SECS")?,
            Err(_) => DEFAULT_SESSION_IDLE_TIMEOUT_SECS,
        };
        if session_idle_timeout_secs == 0 {
            return Err(Error::Config(
                "SESSION_IDLE_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        let log_format = match env::var("LOG_FORMAT") {
            Ok(raw) if raw.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            job_api_base_url,
            job_api_token: env::var("JOB_API_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            job_api_timeout_secs,
            session_idle_timeout_secs,
            log_format,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(name)?;
    raw.parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
