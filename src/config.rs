use anyhow::{anyhow, Result};
use clap::Parser;
use std::env;

use crate::theme::Theme;

const SMALL_URL_DEFAULT: &str = "http://www.filltext.com/?rows=32&id={number|1000}&firstName={firstName}&lastName={lastName}&email={email}&phone={phone|(xxx)xxx-xx-xx}&address={addressObject}&description={lorem|32}";
const LARGE_URL_DEFAULT: &str = "http://www.filltext.com/?rows=1000&id={number|1000}&firstName={firstName}&delay=3&lastName={lastName}&email={email}&phone={phone|(xxx)xxx-xx-xx}&address={addressObject}&description={lorem|32}";

/// Tabcat - Terminal Record Table Browser
///
/// Fetches a JSON record set and browses it as a sortable, searchable table.
/// Configuration priority: CLI args > Environment variables > Defaults
#[derive(Parser, Debug)]
#[command(name = "tabcat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal record table browser", long_about = None)]
pub struct CliArgs {
    /// URL for the small record set
    #[arg(long, env = "SMALL_DATA_URL")]
    pub small_url: Option<String>,

    /// URL for the large record set
    #[arg(long, env = "LARGE_DATA_URL")]
    pub large_url: Option<String>,

    /// Fetch timeout in milliseconds (1000-60000)
    #[arg(long, env = "FETCH_TIMEOUT_MS")]
    pub fetch_timeout_ms: Option<u64>,

    /// Target UI rendering FPS (1-120)
    #[arg(long, env = "RENDER_FPS")]
    pub render_fps: Option<u32>,

    /// Color theme: slate, dos-blue, amber-crt
    #[arg(long, env = "THEME")]
    pub theme: Option<String>,
}

/// A named data source the mode selector offers.
#[derive(Clone, Debug)]
pub struct Mode {
    pub label: &'static str,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub small_url: String,
    pub large_url: String,
    pub fetch_timeout_ms: u64,
    pub render_fps: u32,
    pub theme: Theme,
}

impl Config {
    /// The selectable data sources, in display order.
    pub fn modes(&self) -> Vec<Mode> {
        vec![
            Mode {
                label: "Small set (32 records)",
                url: self.small_url.clone(),
            },
            Mode {
                label: "Large set (1000 records)",
                url: self.large_url.clone(),
            },
        ]
    }
}

/// Validate that a value is within a given range (inclusive)
fn validate_in_range<T>(val: T, min: T, max: T, name: &str) -> Result<T>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if val < min || val > max {
        Err(anyhow!("{name} must be in range [{min}, {max}], got {val}"))
    } else {
        Ok(val)
    }
}

/// Basic URL scheme check; the record sets are plain http(s) endpoints.
fn validate_url(url: &str, name: &str) -> Result<()> {
    if url.is_empty() {
        return Err(anyhow!("{name} cannot be empty"));
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(anyhow!("{name} must start with http:// or https://"))
    }
}

/// Load configuration from CLI args and environment variables
/// Priority: CLI args > Environment variables > Defaults
pub fn load() -> Result<Config> {
    let args = CliArgs::parse();

    let small_url = args
        .small_url
        .or_else(|| env::var("SMALL_DATA_URL").ok())
        .unwrap_or_else(|| SMALL_URL_DEFAULT.to_string());
    validate_url(&small_url, "SMALL_DATA_URL")?;

    let large_url = args
        .large_url
        .or_else(|| env::var("LARGE_DATA_URL").ok())
        .unwrap_or_else(|| LARGE_URL_DEFAULT.to_string());
    validate_url(&large_url, "LARGE_DATA_URL")?;

    let fetch_timeout_ms = args
        .fetch_timeout_ms
        .or_else(|| {
            env::var("FETCH_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .unwrap_or(8000);
    let fetch_timeout_ms = validate_in_range(fetch_timeout_ms, 1000, 60000, "FETCH_TIMEOUT_MS")?;

    let render_fps = args
        .render_fps
        .or_else(|| env::var("RENDER_FPS").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(30);
    let render_fps = validate_in_range(render_fps, 1, 120, "RENDER_FPS")?;

    let theme = match args.theme.or_else(|| env::var("THEME").ok()) {
        Some(name) => Theme::parse(&name).map_err(|e| anyhow!(e))?,
        None => Theme::default(),
    };

    Ok(Config {
        small_url,
        large_url,
        fetch_timeout_ms,
        render_fps,
        theme,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_validation_accepts_bounds() {
        assert!(validate_in_range(1000u64, 1000, 60000, "X").is_ok());
        assert!(validate_in_range(60000u64, 1000, 60000, "X").is_ok());
    }

    #[test]
    fn range_validation_rejects_out_of_range() {
        assert!(validate_in_range(999u64, 1000, 60000, "X").is_err());
        assert!(validate_in_range(0u32, 1, 120, "RENDER_FPS").is_err());
        assert!(validate_in_range(121u32, 1, 120, "RENDER_FPS").is_err());
    }

    #[test]
    fn url_validation_requires_http_scheme() {
        assert!(validate_url("http://example.com/data", "X").is_ok());
        assert!(validate_url("https://example.com/data", "X").is_ok());
        assert!(validate_url("ftp://example.com", "X").is_err());
        assert!(validate_url("", "X").is_err());
    }

    #[test]
    fn default_urls_are_valid() {
        assert!(validate_url(SMALL_URL_DEFAULT, "SMALL_DATA_URL").is_ok());
        assert!(validate_url(LARGE_URL_DEFAULT, "LARGE_DATA_URL").is_ok());
    }
}
