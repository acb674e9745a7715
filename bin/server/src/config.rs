use crate::constants::{
    ALLOW_DOWNLOAD_ENV, ALLOW_UPLOAD_ENV, BIND_ENV, DEFAULT_BIND, DEFAULT_DEPOT, DEFAULT_HOST,
    DEFAULT_PORT, DEFAULT_SIZE_LIMIT, DEPOT_ENV, HOST_ENV, HTTP_DEFAULT_PORT, LISTEN_PORT_ENV,
    PORT_ENV, SIZE_LIMIT_ENV,
};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::FromStr;

/// Server configuration, parsed once at startup from flags and environment.
///
/// Flags take precedence over environment variables, which take precedence
/// over the defaults.
#[derive(Debug, Clone, Parser)]
#[command(name = "filedrop")]
#[command(about = "Minimal, CLI-friendly file drop service")]
pub struct Settings {
    /// Host name used in displayed URLs
    #[arg(long, env = HOST_ENV, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port used in displayed URLs ("none" or 0 to omit it)
    #[arg(long, env = PORT_ENV, default_value_t = PublicPort(Some(DEFAULT_PORT)))]
    pub port: PublicPort,

    /// Directory uploaded files are stored in
    #[arg(long, env = DEPOT_ENV, default_value = DEFAULT_DEPOT)]
    pub depot: PathBuf,

    /// Accept new uploads
    #[arg(
        long,
        env = ALLOW_UPLOAD_ENV,
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub allow_upload: bool,

    /// Serve stored files
    #[arg(
        long,
        env = ALLOW_DOWNLOAD_ENV,
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub allow_download: bool,

    /// IP address to listen on
    #[arg(long, env = BIND_ENV, default_value = DEFAULT_BIND)]
    pub bind: IpAddr,

    /// Port to listen on (defaults to the public port)
    #[arg(long, env = LISTEN_PORT_ENV)]
    pub listen_port: Option<u16>,

    /// Upload size limit in bytes
    #[arg(long, env = SIZE_LIMIT_ENV, default_value_t = DEFAULT_SIZE_LIMIT)]
    pub size_limit: usize,
}

/// Public port shown in URLs; `None` leaves the port out entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicPort(pub Option<u16>);

impl FromStr for PublicPort {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(PublicPort(None));
        }
        // Port 0 cannot be reached by a client, so it is treated as unset
        s.parse()
            .map(|port| PublicPort(Some(port).filter(|&port| port != 0)))
    }
}

impl fmt::Display for PublicPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(port) => write!(f, "{}", port),
            None => write!(f, "none"),
        }
    }
}

impl Settings {
    /// Base URL clients reach this server at, with the port only when it is
    /// set and not 80.
    pub fn public_base_url(&self) -> String {
        match self.port.0 {
            Some(port) if port != HTTP_DEFAULT_PORT => format!("http://{}:{}", self.host, port),
            _ => format!("http://{}", self.host),
        }
    }

    /// Public-facing download URL for a depot token
    pub fn download_url(&self, token: &str) -> String {
        format!("{}/{}", self.public_base_url(), token)
    }

    pub fn listen_port(&self) -> u16 {
        self.listen_port
            .or(self.port.0)
            .unwrap_or(DEFAULT_PORT)
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.listen_port())
    }
}
