use crate::{
    constants, dns_header::DNSHeader, dns_question::DNSQuestion, dns_record::DNSRecord,
    error::WireError, rcode::ResponseCode, record_data::RecordData,
};

/// A fully decoded DNS message.
///
/// The raw bytes are kept alongside the sections because record data such
/// as NS targets can only be interpreted against the whole message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DNSPacket {
    header: DNSHeader,
    questions: Vec<DNSQuestion>,
    answers: Vec<DNSRecord>,
    authorities: Vec<DNSRecord>,
    additionals: Vec<DNSRecord>,
    raw: Vec<u8>,
}

impl DNSPacket {
    pub fn header(&self) -> &DNSHeader {
        &self.header
    }
    pub fn id(&self) -> u16 {
        self.header.id()
    }
    pub fn rcode(&self) -> ResponseCode {
        self.header.rcode()
    }
    /// The first question, present when QDCOUNT is at least one.
    pub fn question(&self) -> Option<&DNSQuestion> {
        self.questions.first()
    }
    pub fn questions(&self) -> &[DNSQuestion] {
        &self.questions
    }
    pub fn answers(&self) -> &[DNSRecord] {
        &self.answers
    }
    pub fn authorities(&self) -> &[DNSRecord] {
        &self.authorities
    }
    pub fn additionals(&self) -> &[DNSRecord] {
        &self.additionals
    }
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Interprets `record`, which must come from one of this packet's sections.
    pub fn record_data(&self, record: &DNSRecord) -> Result<RecordData, WireError> {
        record.data(&self.raw)
    }

    /// Decodes a whole message. Either every counted section decodes or the
    /// call fails; running off the end of the buffer anywhere is reported as
    /// [`WireError::TruncatedMessage`].
    pub fn parse(data: &[u8]) -> Result<Self, WireError> {
        Self::decode(data).map_err(|e| match e {
            WireError::OutOfBounds { offset, .. } => WireError::TruncatedMessage { offset },
            other => other,
        })
    }

    fn decode(packet: &[u8]) -> Result<Self, WireError> {
        let header = DNSHeader::parse(packet)?;
        let mut current_pos = constants::DNS_HEADER_SIZE;

        let mut questions = vec![];
        for _ in 0..header.num_questions() {
            let (question, next) = DNSQuestion::parse(packet, current_pos)?;
            current_pos = next;
            questions.push(question);
        }

        let (answers, current_pos) = parse_section(packet, current_pos, header.num_answers())?;
        let (authorities, current_pos) =
            parse_section(packet, current_pos, header.num_authorities())?;
        let (additionals, _) = parse_section(packet, current_pos, header.num_additionals())?;

        Ok(DNSPacket {
            header,
            questions,
            answers,
            authorities,
            additionals,
            raw: packet.to_vec(),
        })
    }
}

impl TryFrom<&[u8]> for DNSPacket {
    type Error = WireError;

    fn try_from(packet: &[u8]) -> Result<Self, Self::Error> {
        DNSPacket::parse(packet)
    }
}

fn parse_section(
    packet: &[u8],
    mut current_pos: usize,
    count: u16,
) -> Result<(Vec<DNSRecord>, usize), WireError> {
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let (record, next) = DNSRecord::parse(packet, current_pos)?;
        current_pos = next;
        records.push(record);
    }
    Ok((records, current_pos))
}
