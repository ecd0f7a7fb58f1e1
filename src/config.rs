//! Server configuration from environment and command line

use crate::error::{DealgateError, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Outcome of argument parsing: run with a config, or print usage and exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Serve(ServerConfig),
    Help,
}

pub const USAGE: &str = "\
dealgate-server - Role privileges and field allowlists over HTTP

USAGE:
    dealgate-server [OPTIONS]

OPTIONS:
    -H, --host <HOST>     Bind address (env DEALGATE_HOST, default: 0.0.0.0)
    -p, --port <PORT>     Listen on PORT (env PORT, default: 3000)
    -h, --help            Show this help message";

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.into(), port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build from a variable lookup. Takes the lookup as a function so tests
    /// need not touch the process environment.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(get: F) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(host) = get("DEALGATE_HOST") {
            cfg.host = host;
        }
        if let Some(port) = get("PORT") {
            cfg.port = parse_port(&port)?;
        }
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }
}

fn parse_port(s: &str) -> Result<u16> {
    s.trim()
        .parse()
        .map_err(|_| DealgateError::Config(format!("invalid port '{}'", s)))
}

/// Apply command line flags on top of `base`. Flags win over environment.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I, base: ServerConfig) -> Result<Command> {
    let mut cfg = base;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--host" | "-H" => {
                cfg.host = args
                    .next()
                    .ok_or_else(|| DealgateError::Config(format!("{} needs a value", arg)))?;
            }
            "--port" | "-p" => {
                let v = args
                    .next()
                    .ok_or_else(|| DealgateError::Config(format!("{} needs a value", arg)))?;
                cfg.port = parse_port(&v)?;
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(DealgateError::Config(format!("unknown argument '{}'", other))),
        }
    }
    Ok(Command::Serve(cfg))
}
