use std::{net::SocketAddr, path::PathBuf};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "agent-manager",
    about = "Receive build callbacks and hand them to the build manager"
)]
pub struct Args {
    /// The listen address and port
    ///
    /// Overrides the address from the configuration file
    #[structopt(short, long)]
    pub address: Option<SocketAddr>,

    /// The configuration file location
    ///
    /// Where the configuration file should be loaded from. The environment
    /// variable AGENT_MANAGER_CONFIG can also be used.
    #[structopt(
        short,
        long,
        env = "AGENT_MANAGER_CONFIG",
        default_value = "agent-manager.toml"
    )]
    pub config: PathBuf,

    /// The minimum level to log at
    ///
    /// The minimum log level specification, supports the rust log format. The
    /// environment variable RUST_LOG can also be used.
    #[structopt(short, long, env = "RUST_LOG")]
    pub log_level: Option<String>,
}
