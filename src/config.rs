use clap::Parser;
use std::path::PathBuf;

/// Startup configuration, taken entirely from the command line.
///
/// The listen address and the static file root are the only knobs; there is
/// no config file and nothing is read from the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "kiosk")]
#[command(about = "Minimal fixed-route HTTP server")]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, default_value_t = 80)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Directory served under /static/
    #[arg(long, default_value = "./static")]
    pub static_root: PathBuf,
}

impl Config {
    /// Full bind address, host and port joined.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
