use std::net::Ipv4Addr;

use crate::{
    byte_cursor::ByteCursor,
    class::Class,
    dns_header::DNSHeader,
    dns_question::DNSQuestion,
    dns_record::DNSRecord,
    error::{CodecError, Result},
    header_flags::HeaderFlags,
    record_type::RecordType,
};

/// A DNS message: header, questions and answers.
///
/// Authority and additional sections are only counted. Decoding stops after
/// the answer section and leaves any trailing bytes unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DNSPacket {
    header: DNSHeader,
    questions: Vec<DNSQuestion>,
    answers: Vec<DNSRecord>,
}

impl DNSPacket {
    /// A standard query (QR=0, OPCODE=0) for the A record of `domain_name`.
    pub fn query(id: u16, domain_name: &str, recursion_desired: bool) -> Self {
        let mut flags = HeaderFlags::default();
        flags.set_recursion_desired(recursion_desired);

        DNSPacket {
            header: DNSHeader::new(id, flags).with_counts(1, 0),
            questions: vec![DNSQuestion::new(domain_name, RecordType::A, Class::In)],
            answers: vec![],
        }
    }

    pub fn new(
        id: u16,
        flags: HeaderFlags,
        questions: Vec<DNSQuestion>,
        answers: Vec<DNSRecord>,
    ) -> Result<Self> {
        let header = DNSHeader::new(id, flags).with_counts(
            section_len("question", questions.len())?,
            section_len("answer", answers.len())?,
        );
        Ok(DNSPacket {
            header,
            questions,
            answers,
        })
    }

    pub fn header(&self) -> &DNSHeader {
        &self.header
    }
    pub fn id(&self) -> u16 {
        self.header.id()
    }
    pub fn flags(&self) -> HeaderFlags {
        self.header.flags()
    }
    pub fn questions(&self) -> &[DNSQuestion] {
        &self.questions
    }
    pub fn records(&self) -> &[DNSRecord] {
        &self.answers
    }

    /// Addresses carried by the A records of the answer section, in order.
    pub fn addresses(&self) -> Vec<Ipv4Addr> {
        self.answers
            .iter()
            .filter_map(|record| record.data().get_a())
            .copied()
            .collect()
    }

    /// Dotted-decimal form of [`DNSPacket::addresses`].
    pub fn answers(&self) -> Vec<String> {
        self.addresses().iter().map(Ipv4Addr::to_string).collect()
    }

    pub fn parse(data: &[u8]) -> Result<Self> {
        DNSPacket::try_from(data)
    }

    /// Header, questions and answers. Authority and additional counts are
    /// written as zero since those sections are not carried.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let header = DNSHeader::new(self.header.id(), self.header.flags()).with_counts(
            section_len("question", self.questions.len())?,
            section_len("answer", self.answers.len())?,
        );

        let mut bytes = header.to_bytes();
        for question in &self.questions {
            bytes.extend(question.to_bytes()?);
        }
        for answer in &self.answers {
            bytes.extend(answer.to_bytes()?);
        }

        Ok(bytes)
    }
}

fn section_len(section: &'static str, len: usize) -> Result<u16> {
    u16::try_from(len).map_err(|_| CodecError::SectionOverflow { section, len })
}

impl TryFrom<&[u8]> for DNSPacket {
    type Error = CodecError;

    fn try_from(packet: &[u8]) -> Result<Self, Self::Error> {
        let mut cursor = ByteCursor::new(packet);
        let header = DNSHeader::parse(&mut cursor)?;

        let mut questions = vec![];
        for _ in 0..header.num_questions() {
            questions.push(DNSQuestion::parse(&mut cursor)?);
        }

        let mut answers = vec![];
        for _ in 0..header.num_answers() {
            answers.push(DNSRecord::parse(&mut cursor)?);
        }

        Ok(DNSPacket {
            header,
            questions,
            answers,
        })
    }
}
