use envconfig::Envconfig;
use std::{env, error::Error, fmt::Display, str::FromStr};

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(from = "HTTP_PORT", default = "8080")]
    pub http_port: u16,
    /// Maximum request body size in bytes (default: 64KB)
    #[envconfig(from = "MAX_PAYLOAD_BYTES", default = "65536")]
    pub max_payload_bytes: usize,
    // Optional: either "json" or "plain"/"text"
    #[envconfig(from = "LOG_FORMAT")]
    pub log_format: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 8080,
            max_payload_bytes: 65536,
            log_format: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParseEnvError {
    pub name: String,
    pub value: String,
}

impl Display for ParseEnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ParseError {{ name: '{}', value: '{}' }}",
            self.name, self.value
        )
    }
}

impl Error for ParseEnvError {}

fn parse_value<T>(name: &str, val: String) -> Result<T, ParseEnvError>
where
    T: FromStr,
{
    val.parse::<T>().map_err(|_| ParseEnvError {
        name: name.to_string(),
        value: val,
    })
}

fn read_env<T>(name: &str) -> Result<Option<T>, ParseEnvError>
where
    T: FromStr,
{
    match env::var(name) {
        Ok(val) => parse_value(name, val).map(Some),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(os)) => Err(ParseEnvError {
            name: name.to_string(),
            value: format!("non-unicode: {:?}", os),
        }),
    }
}

fn read_with_prefix<T>(base: &str) -> Result<Option<T>, ParseEnvError>
where
    T: FromStr,
{
    let prefixed = format!("{}{}", Config::ENV_PREFIX, base);
    if let Some(v) = read_env::<T>(&prefixed)? {
        return Ok(Some(v));
    }
    read_env::<T>(base)
}

impl Config {
    pub const ENV_PREFIX: &'static str = "CRATER_GW_";

    /// Reads `CRATER_GW_<NAME>` first and falls back to the bare `<NAME>`.
    pub fn load_from_env() -> Result<Self, ParseEnvError> {
        let defaults = Config::default();
        let http_port = read_with_prefix::<u16>("HTTP_PORT")?
            .unwrap_or(defaults.http_port);
        let max_payload_bytes = read_with_prefix::<usize>("MAX_PAYLOAD_BYTES")?
            .unwrap_or(defaults.max_payload_bytes);
        let log_format = read_with_prefix::<String>("LOG_FORMAT")?;
        Ok(Config {
            http_port,
            max_payload_bytes,
            log_format,
        })
    }
}
