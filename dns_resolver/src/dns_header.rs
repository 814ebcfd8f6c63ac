use crate::{
    constants::{self, RECURSION_DESIRED},
    error::WireError,
    rcode::ResponseCode,
    wire::read_u16,
};

const QR_BIT: u16 = 1 << 15;
const OPCODE_SHIFT: u16 = 11;
const AA_BIT: u16 = 1 << 10;
const TC_BIT: u16 = 1 << 9;
const RA_BIT: u16 = 1 << 7;
const Z_SHIFT: u16 = 4;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DNSHeader {
    id: u16,
    flags: u16,
    num_questions: u16,
    num_answers: u16,
    num_authorities: u16,
    num_additionals: u16,
}

impl DNSHeader {
    /// Header of a single-question query.
    pub fn new(id: u16, flags: u16) -> Self {
        Self {
            id,
            flags,
            num_questions: 1,
            ..Default::default()
        }
    }

    pub fn id(&self) -> u16 {
        self.id
    }
    pub fn flags(&self) -> u16 {
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

    pub fn is_response(&self) -> bool {
        self.flags & QR_BIT != 0
    }
    pub fn opcode(&self) -> u8 {
        ((self.flags >> OPCODE_SHIFT) & 0x0F) as u8
    }
    pub fn authoritative(&self) -> bool {
        self.flags & AA_BIT != 0
    }
    pub fn truncated(&self) -> bool {
        self.flags & TC_BIT != 0
    }
    pub fn recursion_desired(&self) -> bool {
        self.flags & RECURSION_DESIRED != 0
    }
    pub fn recursion_available(&self) -> bool {
        self.flags & RA_BIT != 0
    }
    /// Reserved bits, carried but never validated.
    pub fn z(&self) -> u8 {
        ((self.flags >> Z_SHIFT) & 0x07) as u8
    }
    pub fn rcode(&self) -> ResponseCode {
        ResponseCode::from((self.flags & 0x0F) as u8)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        [
            self.id.to_be_bytes(),
            self.flags.to_be_bytes(),
            self.num_questions.to_be_bytes(),
            self.num_answers.to_be_bytes(),
            self.num_authorities.to_be_bytes(),
            self.num_additionals.to_be_bytes(),
        ]
        .concat()
    }

    /// Reads the six header fields in wire order.
    pub fn parse(value: &[u8]) -> Result<Self, WireError> {
        if value.len() < constants::DNS_HEADER_SIZE {
            return Err(WireError::MessageTooShort(value.len()));
        }
        let (id, cursor) = read_u16(value, 0)?;
        let (flags, cursor) = read_u16(value, cursor)?;
        let (num_questions, cursor) = read_u16(value, cursor)?;
        let (num_answers, cursor) = read_u16(value, cursor)?;
        let (num_authorities, cursor) = read_u16(value, cursor)?;
        let (num_additionals, _) = read_u16(value, cursor)?;

        Ok(DNSHeader {
            id,
            flags,
            num_questions,
            num_answers,
            num_authorities,
            num_additionals,
        })
    }
}

impl TryFrom<&[u8]> for DNSHeader {
    type Error = WireError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        DNSHeader::parse(value)
    }
}
