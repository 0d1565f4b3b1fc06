//! Command-line interface parsing for the DataCiudadana API server
//!
//! The only runtime settings are where the server listens. Upstream URLs and
//! cache lifetimes are fixed in the data modules.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use thiserror::Error;

/// Port the server listens on unless told otherwise
pub const DEFAULT_PORT: u16 = 3000;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The bind address is not an IP address
    #[error("Invalid bind address: '{0}'. Expected an IP address such as 0.0.0.0 or 127.0.0.1")]
    InvalidBind(String),
}

/// DataCiudadana API - employment, security and economic open data over HTTP
#[derive(Parser, Debug)]
#[command(name = "dataciudadana")]
#[command(about = "HTTP JSON API for Chilean employment, security and economic indicators")]
#[command(version)]
pub struct Cli {
    /// TCP port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// IP address to bind
    ///
    /// Examples:
    ///   dataciudadana --bind 127.0.0.1   # local connections only
    #[arg(long, value_name = "IP", default_value = "0.0.0.0")]
    pub bind: String,
}

/// Server settings derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
        }
    }
}

impl ServerConfig {
    /// Creates a ServerConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(ServerConfig)` with the resolved listen address
    /// * `Err(CliError::InvalidBind)` if `--bind` is not an IP address
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let ip: IpAddr = cli
            .bind
            .parse()
            .map_err(|_| CliError::InvalidBind(cli.bind.clone()))?;

        Ok(ServerConfig {
            addr: SocketAddr::new(ip, cli.port),
        })
    }
}
