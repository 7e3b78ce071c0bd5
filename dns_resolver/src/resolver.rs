use std::{
    io::ErrorKind,
    net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket},
    time::Duration,
};

use tracing::{debug, trace, warn};

use crate::{
    build_query, constants, decode_message, dns_packet::DNSPacket, error::LookupError,
    header_flags::RCODE_NO_ERROR,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOptions {
    pub recursion_desired: bool,
    /// `None` blocks until a datagram arrives.
    pub timeout: Option<Duration>,
    /// Datagrams with a foreign transaction id tolerated before giving up.
    pub max_stray_responses: usize,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            recursion_desired: true,
            timeout: Some(Duration::from_millis(constants::DEFAULT_TIMEOUT_MS)),
            max_stray_responses: constants::DEFAULT_MAX_STRAY_RESPONSES,
        }
    }
}

/// Sends one A query to `server` and waits for the response carrying its id.
pub fn send_query(
    server: SocketAddr,
    domain_name: &str,
    options: &LookupOptions,
) -> Result<DNSPacket, LookupError> {
    let (id, query) = build_query(domain_name, options.recursion_desired)?;

    let local: SocketAddr = match server {
        SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
        SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
    };
    let socket = UdpSocket::bind(local)?;
    // A zero duration is rejected by the socket layer.
    let timeout = options.timeout.filter(|t| !t.is_zero());
    socket.set_read_timeout(timeout)?;
    socket.connect(server)?;

    let sent = socket.send(&query)?;
    debug!(id, sent, %server, "Sent query for {}", domain_name);

    let mut response_buffer = [0; constants::UDP_DNS_RESPONSE_SIZE];
    let mut discarded = 0;
    loop {
        let received = match socket.recv(&mut response_buffer) {
            Ok(received) => received,
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                return Err(LookupError::Timeout {
                    server,
                    timeout: timeout.unwrap_or_default(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        trace!(received, "Received datagram from {}", server);

        let packet = decode_message(&response_buffer[..received])?;
        if packet.id() == id && packet.flags().is_response() {
            debug!(
                id,
                answers = packet.records().len(),
                rcode = packet.flags().rcode(),
                "Received response"
            );
            if packet.flags().truncated() {
                warn!(id, "Response is truncated; using the records it carries");
            }
            return Ok(packet);
        }

        discarded += 1;
        warn!(
            expected = id,
            got = packet.id(),
            "Discarding datagram that does not answer the query"
        );
        if discarded > options.max_stray_responses {
            return Err(LookupError::UnmatchedResponses { id, discarded });
        }
    }
}

/// Resolves `domain_name` to the IPv4 addresses in the answer section.
pub fn lookup(
    server: SocketAddr,
    domain_name: &str,
    options: &LookupOptions,
) -> Result<Vec<Ipv4Addr>, LookupError> {
    let packet = send_query(server, domain_name, options)?;

    let rcode = packet.flags().rcode();
    if rcode != RCODE_NO_ERROR {
        return Err(LookupError::ServerFailure { rcode });
    }

    let addresses = packet.addresses();
    if addresses.is_empty() {
        return Err(LookupError::NoAnswer {
            hostname: domain_name.to_string(),
        });
    }
    Ok(addresses)
}
