//! Minimal DNS client: encodes A queries, decodes responses, and performs a
//! single UDP exchange with one name server.

use rand::Rng;

pub mod byte_cursor;
pub mod class;
pub mod constants;
pub mod dns_header;
pub mod dns_name;
pub mod dns_packet;
pub mod dns_question;
pub mod dns_record;
pub mod error;
pub mod header_flags;
pub mod record_data;
pub mod record_type;
pub mod resolv_conf;
pub mod resolver;

pub use dns_packet::DNSPacket;
pub use error::{CodecError, ConfigError, LookupError};
pub use resolv_conf::ResolvConf;
pub use resolver::{lookup, send_query, LookupOptions};

/// Serializes a single-question A/IN query.
///
/// Only the header and question section are produced.
pub fn encode_query(
    id: u16,
    domain_name: &str,
    recursion_desired: bool,
) -> error::Result<Vec<u8>> {
    if dns_name::is_root(domain_name) {
        return Err(CodecError::name_encoding("hostname has no labels"));
    }
    DNSPacket::query(id, domain_name, recursion_desired).to_bytes()
}

/// Decodes a received datagram, trusting its section counts.
pub fn decode_message(data: &[u8]) -> error::Result<DNSPacket> {
    DNSPacket::parse(data)
}

/// Encodes a query under a fresh random transaction id.
pub fn build_query(
    domain_name: &str,
    recursion_desired: bool,
) -> error::Result<(u16, Vec<u8>)> {
    let id = rand::thread_rng().gen_range(0..=u16::MAX);
    let bytes = encode_query(id, domain_name, recursion_desired)?;
    Ok((id, bytes))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{class::Class, record_type::RecordType};

    const SCENARIO_A: [u8; 29] = [
        0x04, 0xD2, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // header
        0x07, 0x65, 0x78, 0x61, 0x6D, 0x70, 0x6C, 0x65, 0x03, 0x63, 0x6F, 0x6D, 0x00, // name
        0x00, 0x01, 0x00, 0x01, // type, class
    ];

    #[test]
    fn test_encode_query() {
        let bytes = encode_query(1234, "example.com", true).unwrap();
        assert_eq!(bytes, SCENARIO_A);
    }

    #[test]
    fn test_reencode_decoded_query() {
        let packet = decode_message(&SCENARIO_A).unwrap();
        assert_eq!(packet.to_bytes().unwrap(), SCENARIO_A);
    }

    #[test]
    fn test_decode_answer() {
        let mut response = SCENARIO_A.to_vec();
        response[2] = 0x81;
        response[3] = 0x80;
        response[7] = 1;
        response.extend(&SCENARIO_A[12..25]);
        response.extend([0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x01, 0x2C, 0x00, 0x04]);
        response.extend([0x5D, 0xB8, 0xD8, 0x22]);

        let packet = decode_message(&response).unwrap();
        assert_eq!(packet.answers(), vec!["93.184.216.34"]);
        assert_eq!(packet.records()[0].ttl(), 300);
    }

    #[test]
    fn test_decode_short_header() {
        for len in 0..constants::DNS_HEADER_SIZE {
            assert!(
                matches!(
                    decode_message(&SCENARIO_A[..len]),
                    Err(CodecError::TruncatedBuffer { .. })
                ),
                "length {}",
                len
            );
        }
    }

    #[test]
    fn test_encode_query_empty_hostname() {
        assert!(matches!(
            encode_query(1, "", true),
            Err(CodecError::NameEncoding(_))
        ));
        assert!(matches!(
            encode_query(1, ".", true),
            Err(CodecError::NameEncoding(_))
        ));
    }

    #[test]
    fn test_build_query_uses_its_id() {
        let (id, bytes) = build_query("example.com", false).unwrap();
        let packet = decode_message(&bytes).unwrap();
        assert_eq!(packet.id(), id);
        assert!(!packet.flags().recursion_desired());
    }

    proptest! {
        #[test]
        fn query_round_trips(
            id in any::<u16>(),
            labels in prop::collection::vec("[a-zA-Z0-9-]{1,255}", 1..5),
            recursion_desired in any::<bool>()
        ) {
            let hostname = labels.join(".");
            let bytes = encode_query(id, &hostname, recursion_desired).unwrap();
            let packet = decode_message(&bytes).unwrap();

            prop_assert_eq!(packet.id(), id);
            prop_assert_eq!(packet.flags().recursion_desired(), recursion_desired);
            prop_assert!(!packet.flags().is_response());
            prop_assert_eq!(packet.questions().len(), 1);
            let question = &packet.questions()[0];
            prop_assert_eq!(question.name(), hostname.as_str());
            prop_assert_eq!(question.type_(), RecordType::A);
            prop_assert_eq!(question.class(), Class::In);
            prop_assert!(packet.records().is_empty());
        }
    }
}
