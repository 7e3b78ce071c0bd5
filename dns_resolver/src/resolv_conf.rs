use std::{
    fs,
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
    time::Duration,
};

use tracing::{debug, warn};

use crate::{constants, error::ConfigError};

/// The parts of resolv.conf(5) a single-server lookup needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvConf {
    nameservers: Vec<IpAddr>,
    timeout: Option<Duration>,
    path: Option<PathBuf>,
}

impl ResolvConf {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut conf = Self::parse(&content);
        conf.path = Some(path.to_path_buf());
        debug!(
            "Loaded {} nameserver(s) from {}",
            conf.nameservers.len(),
            path.display()
        );
        Ok(conf)
    }

    pub fn parse(content: &str) -> Self {
        let mut conf = ResolvConf::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("nameserver") => match parts.next().map(str::parse::<IpAddr>) {
                    Some(Ok(ip)) => conf.nameservers.push(ip),
                    _ => warn!("Skipping malformed nameserver line: {:?}", line),
                },
                Some("options") => {
                    for option in parts {
                        if let Some(secs) = option.strip_prefix("timeout:") {
                            match secs.parse::<u64>() {
                                Ok(secs) => {
                                    // Same ceiling glibc applies.
                                    let secs = secs.min(constants::MAX_RESOLV_CONF_TIMEOUT_SECS);
                                    conf.timeout = Some(Duration::from_secs(secs));
                                }
                                Err(_) => warn!("Skipping malformed option: {:?}", option),
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        conf
    }

    pub fn nameservers(&self) -> &[IpAddr] {
        &self.nameservers
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn first_ipv4_nameserver(&self) -> Result<Ipv4Addr, ConfigError> {
        self.nameservers
            .iter()
            .find_map(|ip| match ip {
                IpAddr::V4(ip) => Some(*ip),
                IpAddr::V6(_) => None,
            })
            .ok_or_else(|| ConfigError::NoNameserver {
                path: self.path.clone().unwrap_or_default(),
            })
    }
}
