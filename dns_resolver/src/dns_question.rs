use crate::{
    byte_cursor::ByteCursor,
    class::Class,
    dns_name::{decode_dns_name, encode_owner_name},
    error::Result,
    record_type::RecordType,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DNSQuestion {
    name: String,
    type_: RecordType,
    class: Class,
}

impl DNSQuestion {
    pub fn new(name: impl Into<String>, type_: RecordType, class: Class) -> Self {
        Self {
            name: name.into(),
            type_,
            class,
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

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok([
            encode_owner_name(&self.name)?,
            u16::from(self.type_).to_be_bytes().to_vec(),
            u16::from(self.class).to_be_bytes().to_vec(),
        ]
        .concat())
    }

    pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let name = decode_dns_name(cursor)?;
        Ok(DNSQuestion {
            name,
            type_: cursor.read_u16()?.into(),
            class: cursor.read_u16()?.into(),
        })
    }
}
