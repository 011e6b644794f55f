use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use std::net::{SocketAddr, ToSocketAddrs};

/// Output format of the console log layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Runtime configuration for the `folder-manager-server` binary.
///
/// All values are parsed from CLI arguments or environment variables (a `.env`
/// file in the working directory is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "folder-manager-server",
    version,
    about = "An HTTP service that resolves and provisions per-client folders"
)]
pub struct CliArgs {
    /// Server name reported in startup logs.
    ///
    /// Environment variable: `NAME`
    #[arg(long, env = "NAME", default_value_t = String::from("folder-manager"))]
    pub name: String,

    /// Interface or host name to bind.
    ///
    /// Environment variable: `BIND_ADDRESS`
    #[arg(long, env = "BIND_ADDRESS", default_value_t = String::from("0.0.0.0"))]
    pub bind_address: String,

    /// TCP port to listen on. `0` picks an ephemeral port.
    ///
    /// Environment variable: `PORT`
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Console log format.
    ///
    /// Environment variable: `LOG_FORMAT`
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub name: String,
    pub addr: SocketAddr,
    pub log_format: LogFormat,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let name = args.name.trim();
        if name.is_empty() {
            bail!("NAME must not be empty");
        }

        let addr = (args.bind_address.as_str(), args.port)
            .to_socket_addrs()
            .with_context(|| {
                format!(
                    "invalid BIND_ADDRESS/PORT `{}:{}`",
                    args.bind_address, args.port
                )
            })?
            .next()
            .with_context(|| format!("BIND_ADDRESS `{}` resolved to nothing", args.bind_address))?;

        Ok(Self {
            name: name.to_owned(),
            addr,
            log_format: args.log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str, port: &str, log_format: &str) -> CliArgs {
        CliArgs::try_parse_from([
            "folder-manager-server",
            "--name",
            name,
            "--bind-address",
            "127.0.0.1",
            "--port",
            port,
            "--log-format",
            log_format,
        ])
        .unwrap()
    }

    #[test]
    fn resolves_socket_address() {
        let config = ServerConfig::try_from(args("itest server", "9000", "pretty")).unwrap();
        assert_eq!(config.name, "itest server");
        assert_eq!(config.addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn accepts_ephemeral_port_and_json_logs() {
        let config = ServerConfig::try_from(args("itest server", "0", "json")).unwrap();
        assert_eq!(config.addr.port(), 0);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_blank_name() {
        let err = ServerConfig::try_from(args("  ", "9000", "pretty")).unwrap_err();
        assert_eq!(err.to_string(), "NAME must not be empty");
    }

    #[test]
    fn rejects_unparsable_port() {
        let parsed = CliArgs::try_parse_from(["folder-manager-server", "--port", "http"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn rejects_unknown_log_format() {
        let parsed = CliArgs::try_parse_from(["folder-manager-server", "--log-format", "xml"]);
        assert!(parsed.is_err());
    }
}
