use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::Uri;
use config::{Config as ConfigLoader, Environment};
use is_terminal::IsTerminal;
use once_cell::sync::Lazy;
use serde::Deserialize;

const PREFIX: &str = "IPLOOKUP";

pub static CONFIG: Lazy<Config> = Lazy::new(init_config);

#[derive(Debug, Default, PartialEq)]
pub enum LogStyle {
    #[default]
    Auto,
    Always,
    Never,
}

impl LogStyle {
    pub fn is_color(&self) -> bool {
        match self {
            LogStyle::Auto => std::io::stdout().is_terminal(),
            LogStyle::Always => true,
            LogStyle::Never => false,
        }
    }
}

impl<'de> Deserialize<'de> for LogStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?.to_lowercase();
        match s.as_str() {
            "auto" => Ok(LogStyle::Auto),
            "always" => Ok(LogStyle::Always),
            "never" => Ok(LogStyle::Never),
            _ => Err(serde::de::Error::unknown_variant(
                &s,
                &["auto", "always", "never"],
            )),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Log {
    pub level: String,
    pub style: LogStyle,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: String::from("iplookup=info"),
            style: LogStyle::default(),
        }
    }
}

/// Where lookups are forwarded to.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Lookup {
    pub url: String,
    pub timeout_seconds: u64,
}

impl Default for Lookup {
    fn default() -> Self {
        Self {
            url: String::from("http://localhost:5000/lookup"),
            timeout_seconds: 10,
        }
    }
}

impl Lookup {
    pub fn validate(&self) -> Result<(), String> {
        let uri = self
            .url
            .parse::<Uri>()
            .map_err(|err| format!("lookup url `{}` is invalid: {}", self.url, err))?;
        match uri.scheme_str() {
            Some("http") | Some("https") => {}
            _ => return Err(format!("lookup url `{}` must use http or https", self.url)),
        }
        if uri.host().is_none() {
            return Err(format!("lookup url `{}` has no host", self.url));
        }
        if self.timeout_seconds == 0 {
            return Err("lookup timeout must be greater than zero".into());
        }
        Ok(())
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Config {
    pub log: Log,
    pub addr: SocketAddr,
    pub web_dir: String,
    pub debug: bool,
    pub lookup: Lookup,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log: Log::default(),
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 3030),
            web_dir: String::from("dist"),
            debug: true,
            lookup: Lookup::default(),
        }
    }
}

pub fn init_config() -> Config {
    let config = ConfigLoader::builder()
        .add_source(
            Environment::with_prefix(PREFIX)
                .separator("_")
                .try_parsing(true),
        )
        .add_source(
            Environment::with_prefix(PREFIX)
                .separator("__")
                .prefix_separator("_")
                .try_parsing(true),
        )
        .build()
        .and_then(|cfg| cfg.try_deserialize::<Config>());

    match config {
        Ok(config) => {
            if let Err(err) = config.lookup.validate() {
                panic!("{}", err);
            }
            println!("{:#?}", config);
            config
        }
        Err(err) => {
            panic!("{:?}", err);
        }
    }
}
