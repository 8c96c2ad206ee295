use anyhow::{Context, Result, anyhow};
use std::env;
use std::sync::LazyLock;
use url::Url;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the school-platform REST API.
    pub platform_url: Url,
    /// Whether the session cookie is marked `Secure`. Off for local
    /// http development, on behind TLS.
    pub cookie_secure: bool,
}

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::from_env().expect("invalid server configuration"));

impl Config {
    pub fn from_env() -> Result<Self> {
        let platform_url = env_var("SCOLARIS_PLATFORM_URL")?
            .parse()
            .context("SCOLARIS_PLATFORM_URL is not a valid URL")?;
        let cookie_secure = match env::var("SCOLARIS_COOKIE_SECURE") {
            Ok(value) => value
                .parse()
                .context("SCOLARIS_COOKIE_SECURE must be true or false")?,
            Err(_) => false,
        };

        Ok(Self {
            platform_url,
            cookie_secure,
        })
    }
}

fn env_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| anyhow!("missing environment variable: {}", name))
}
