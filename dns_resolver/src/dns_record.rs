use crate::{
    byte_cursor::ByteCursor,
    class::Class,
    dns_name::{decode_dns_name, encode_owner_name},
    error::{CodecError, Result},
    record_data::RecordData,
    record_type::RecordType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DNSRecord {
    name: String,
    type_: RecordType,
    class: Class,
    ttl: u32,
    data: RecordData,
}

impl DNSRecord {
    pub fn new(
        name: impl Into<String>,
        type_: RecordType,
        class: Class,
        ttl: u32,
        data: RecordData,
    ) -> Self {
        Self {
            name: name.into(),
            type_,
            class,
            ttl,
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn type_(&self) -> RecordType {
        self.type_
    }
    pub fn class(&self) -> Class {
        self.class
    }
    pub fn ttl(&self) -> u32 {
        self.ttl
    }
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let data_length =
            u16::try_from(self.data.len()).map_err(|_| CodecError::SectionOverflow {
                section: "rdata",
                len: self.data.len(),
            })?;

        Ok([
            encode_owner_name(&self.name)?,
            u16::from(self.type_).to_be_bytes().to_vec(),
            u16::from(self.class).to_be_bytes().to_vec(),
            self.ttl.to_be_bytes().to_vec(),
            data_length.to_be_bytes().to_vec(),
            self.data.to_bytes(),
        ]
        .concat())
    }

    /// Parses one record; the rdata length field bounds the rdata read.
    pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let name = decode_dns_name(cursor)?;

        let type_ = RecordType::from(cursor.read_u16()?);
        let class = Class::from(cursor.read_u16()?);
        let ttl = cursor.read_u32()?;
        let data_length = cursor.read_u16()?;
        let rdata = cursor.read_bytes(data_length as usize)?;

        Ok(DNSRecord {
            name,
            type_,
            class,
            ttl,
            data: RecordData::parse(type_, rdata)?,
        })
    }
}
