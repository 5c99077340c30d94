//! Command-line and environment configuration

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "hash-service")]
#[command(about = "SHA-256 checksum and verification service")]
pub struct Config {
    /// Port to listen on
    #[arg(long, default_value_t = 8443, env = "HASH_PORT")]
    pub port: u16,

    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0", env = "HASH_BIND")]
    pub bind: String,
}

impl Config {
    /// Socket address to listen on
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address: {}:{}", self.bind, self.port))
    }
}
