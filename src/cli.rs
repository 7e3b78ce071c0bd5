use std::{net::Ipv4Addr, path::PathBuf};

use clap::Parser;
use dns_resolver::constants;

/// Resolve a hostname to its IPv4 addresses with a single UDP query
#[derive(Parser, Debug)]
#[command(name = "dns-lookup")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Hostname to look up
    #[arg(short = 'H', long)]
    pub hostname: String,

    /// Name server to ask (defaults to the first IPv4 nameserver in resolv.conf)
    #[arg(short = 'a', long, value_name = "IPV4")]
    pub address: Option<Ipv4Addr>,

    /// Name server port
    #[arg(short, long, default_value_t = constants::DNS_PORT)]
    pub port: u16,

    /// Resolver configuration consulted when no address is given
    #[arg(long, value_name = "PATH", default_value = constants::DEFAULT_RESOLV_CONF)]
    pub resolv_conf: PathBuf,

    /// Receive timeout in milliseconds, 0 waits forever (defaults to resolv.conf or 5000)
    #[arg(short, long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Ask the server not to recurse
    #[arg(long)]
    pub no_recurse: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
