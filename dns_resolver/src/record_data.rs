use std::net::Ipv4Addr;

use crate::{
    constants,
    error::{CodecError, Result},
    record_type::RecordType,
};

/// Rdata of a resource record, dispatched on the record's type.
///
/// Only address records are interpreted. Every other type keeps its raw
/// bytes, which are exactly `rdata_length` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Other(Vec<u8>),
}

impl RecordData {
    pub fn parse(type_: RecordType, rdata: &[u8]) -> Result<Self> {
        match type_ {
            RecordType::A => {
                let [a, b, c, d] = rdata else {
                    return Err(CodecError::InvalidRdata {
                        record_type: type_,
                        length: rdata.len(),
                    });
                };
                Ok(RecordData::A(Ipv4Addr::new(*a, *b, *c, *d)))
            }
            _ => Ok(RecordData::Other(rdata.to_vec())),
        }
    }

    pub fn get_a(&self) -> Option<&Ipv4Addr> {
        match self {
            RecordData::A(ip) => Some(ip),
            _ => None,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            RecordData::A(ip) => ip.octets().to_vec(),
            RecordData::Other(data) => data.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordData::A(_) => constants::IPV4_RDATA_LENGTH,
            RecordData::Other(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
