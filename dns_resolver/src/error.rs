use std::{io, net::SocketAddr, path::PathBuf, time::Duration};

use thiserror::Error;

use crate::record_type::RecordType;

pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// Failures while encoding a query or decoding a received message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("truncated buffer: needed {needed} bytes, {remaining} remaining")]
    TruncatedBuffer { needed: usize, remaining: usize },

    #[error("cannot encode name: {0}")]
    NameEncoding(String),

    #[error("cannot decode name: {0}")]
    NameDecoding(String),

    #[error("invalid rdata for {record_type} record: {length} bytes")]
    InvalidRdata {
        record_type: RecordType,
        length: usize,
    },

    #[error("too many entries in {section} section: {len}")]
    SectionOverflow { section: &'static str, len: usize },
}

impl CodecError {
    pub fn name_encoding(reason: impl Into<String>) -> Self {
        Self::NameEncoding(reason.into())
    }

    pub fn name_decoding(reason: impl Into<String>) -> Self {
        Self::NameDecoding(reason.into())
    }
}

/// Failures of a single UDP lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("socket I/O failed")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("no response from {server} within {timeout:?}")]
    Timeout { server: SocketAddr, timeout: Duration },

    #[error("no response matched transaction id {id} ({discarded} datagrams discarded)")]
    UnmatchedResponses { id: u16, discarded: usize },

    #[error("server answered with rcode {rcode}")]
    ServerFailure { rcode: u16 },

    #[error("no address records for {hostname}")]
    NoAnswer { hostname: String },
}

/// Failures while reading resolver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no IPv4 nameserver configured in {}", .path.display())]
    NoNameserver { path: PathBuf },
}
