use reqwest::Url;

use crate::sync_error::SyncError;

pub const DEFAULT_ORIGIN: &str = "http://localhost:8081";
pub const ALBUMS_PATH: &str = "/albums";

static ORIGIN_ENV: &str = "ALBUMSYNC_ORIGIN";
static LENIENT_STATUS_ENV: &str = "ALBUMSYNC_LENIENT_STATUS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub origin: String,
    /// Accept any JSON body on create/list regardless of status code.
    pub lenient_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            origin: DEFAULT_ORIGIN.to_owned(),
            lenient_status: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(origin) = lookup(ORIGIN_ENV).filter(|o| !o.trim().is_empty()) {
            config.origin = origin.trim().to_owned();
        }
        if let Some(flag) = lookup(LENIENT_STATUS_ENV) {
            config.lenient_status = parse_flag(&flag);
        }
        config
    }

    pub fn albums_url(&self) -> Result<Url, SyncError> {
        let invalid = |reason: String| SyncError::InvalidOrigin {
            origin: self.origin.clone(),
            reason,
        };

        let base = Url::parse(&self.origin).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("origin cannot be a base url".to_owned()));
        }

        let joined = format!("{}{}", base.as_str().trim_end_matches('/'), ALBUMS_PATH);
        Url::parse(&joined).map_err(|e| invalid(e.to_string()))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
