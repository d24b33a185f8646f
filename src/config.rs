use anyhow::Context;
use std::{env, path::PathBuf, str::FromStr};

const DEFAULT_DATABASE_URL: &str = "sqlite://plants.db?mode=rwc";
const DEFAULT_PUBLIC_DIR: &str = "wwwroot";
const DEFAULT_PORT: u16 = 3002;
const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Runtime settings, read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Directory served as static files; uploaded photos go to its `images/` subdirectory.
    pub public_dir: PathBuf,
    pub port: u16,
    /// Upper bound for a whole multipart request body, in bytes.
    pub max_upload_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            port: DEFAULT_PORT,
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            public_dir: env::var_os("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            max_upload_size: parse_var("MAX_UPLOAD_SIZE")?.unwrap_or(defaults.max_upload_size),
        })
    }
}

fn parse_var<T>(name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Ok(value) = env::var(name) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .with_context(|| format!("{name} has an invalid value: {value:?}"))
}
