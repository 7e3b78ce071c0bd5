use std::{
    net::{Ipv4Addr, SocketAddr},
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use dns_resolver::{constants, lookup, LookupOptions, ResolvConf};
use tracing::{debug, info, warn};

mod cli;

use cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries addresses.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    for address in resolve(&args)? {
        println!("{}", address);
    }

    Ok(())
}

fn resolve(args: &Args) -> anyhow::Result<Vec<Ipv4Addr>> {
    let (server, options) = lookup_target(args).context("lookup failed")?;
    info!(%server, "Resolving {}", args.hostname);

    lookup(server, &args.hostname, &options).context("lookup failed")
}

/// Picks the server and options from the flags, falling back to resolv.conf.
fn lookup_target(args: &Args) -> anyhow::Result<(SocketAddr, LookupOptions)> {
    let resolv_conf = if args.address.is_none() || args.timeout_ms.is_none() {
        match ResolvConf::load(&args.resolv_conf) {
            Ok(conf) => Some(conf),
            Err(e) if args.address.is_none() => return Err(e.into()),
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    } else {
        None
    };

    let server_ip = match args.address {
        Some(ip) => ip,
        None => resolv_conf
            .as_ref()
            .context("no name server given")?
            .first_ipv4_nameserver()?,
    };

    let timeout_ms = args
        .timeout_ms
        .or_else(|| {
            let timeout = resolv_conf.as_ref()?.timeout()?;
            Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX))
        })
        .unwrap_or(constants::DEFAULT_TIMEOUT_MS);
    debug!(timeout_ms, "Using receive timeout");

    let options = LookupOptions {
        recursion_desired: !args.no_recurse,
        timeout: Some(Duration::from_millis(timeout_ms)),
        ..Default::default()
    };
    Ok((SocketAddr::from((server_ip, args.port)), options))
}
