use crate::{byte_cursor::ByteCursor, error::Result, header_flags::HeaderFlags};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DNSHeader {
    id: u16,
    flags: HeaderFlags,
    num_questions: u16,
    num_answers: u16,
    num_authorities: u16,
    num_additionals: u16,
}

impl DNSHeader {
    pub fn new(id: u16, flags: HeaderFlags) -> Self {
        Self {
            id,
            flags,
            ..Default::default()
        }
    }

    pub fn with_counts(mut self, questions: u16, answers: u16) -> Self {
        self.num_questions = questions;
        self.num_answers = answers;
        self
    }

    pub fn id(&self) -> u16 {
        self.id
    }
    pub fn flags(&self) -> HeaderFlags {
        self.flags
    }
    pub fn num_questions(&self) -> u16 {
        self.num_questions
    }
    pub fn num_answers(&self) -> u16 {
        self.num_answers
    }
    pub fn num_authorities(&self) -> u16 {
        self.num_authorities
    }
    pub fn num_additionals(&self) -> u16 {
        self.num_additionals
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        [
            self.id.to_be_bytes(),
            self.flags.bits().to_be_bytes(),
            self.num_questions.to_be_bytes(),
            self.num_answers.to_be_bytes(),
            self.num_authorities.to_be_bytes(),
            self.num_additionals.to_be_bytes(),
        ]
        .concat()
    }

    pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        // Each of the 6 fields is a 2-byte integer, so there are 12 bytes in all to read.
        Ok(DNSHeader {
            id: cursor.read_u16()?,
            flags: cursor.read_u16()?.into(),
            num_questions: cursor.read_u16()?,
            num_answers: cursor.read_u16()?,
            num_authorities: cursor.read_u16()?,
            num_additionals: cursor.read_u16()?,
        })
    }
}
