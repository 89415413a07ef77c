use clap::Parser;
use std::net::IpAddr;

/// Command-line arguments for the gateway binary.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather gateway")]
pub struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, default_value_t = 5000)]
    pub port: u16,
}
