use std::net::Ipv4Addr;

use crate::{
    class::Class,
    constants,
    error::WireError,
    name::decode_name,
    record_data::RecordData,
    record_type::RecordType,
    wire::{read_bytes, read_u16, read_u32},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DNSRecord {
    name: String,
    type_: RecordType,
    class: Class,
    ttl: u32,
    rdata: Vec<u8>,
    // Where the RDATA starts in the message it was decoded from.
    rdata_offset: usize,
}

impl DNSRecord {
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
    pub fn rdata(&self) -> &[u8] {
        &self.rdata
    }

    /// Decodes one resource record at `cursor`, returning it with the offset
    /// just past its RDATA.
    pub fn parse(message: &[u8], cursor: usize) -> Result<(Self, usize), WireError> {
        let (name, cursor) = decode_name(message, cursor)?;
        let (type_, cursor) = read_u16(message, cursor)?;
        let (class, cursor) = read_u16(message, cursor)?;
        let (ttl, cursor) = read_u32(message, cursor)?;
        let (data_length, cursor) = read_u16(message, cursor)?;
        let (rdata, next) = read_bytes(message, cursor, data_length as usize)?;

        Ok((
            DNSRecord {
                name,
                type_: type_.into(),
                class: class.into(),
                ttl,
                rdata: rdata.to_vec(),
                rdata_offset: cursor,
            },
            next,
        ))
    }

    /// Interprets the RDATA. NS targets are decoded against the whole
    /// `message`, since their compression pointers reach outside the RDATA.
    ///
    /// `message` must be the buffer this record was parsed from; the RDATA
    /// offset means nothing in any other buffer. Prefer
    /// [`DNSPacket::record_data`](crate::dns_packet::DNSPacket::record_data),
    /// which always pairs the two.
    pub fn data(&self, message: &[u8]) -> Result<RecordData, WireError> {
        match self.type_ {
            RecordType::A => {
                let [a, b, c, d] = self.rdata[..] else {
                    return Err(WireError::RdataLength {
                        type_: self.type_,
                        expected: constants::IPV4_RDATA_SIZE,
                        actual: self.rdata.len(),
                    });
                };
                Ok(RecordData::A(Ipv4Addr::new(a, b, c, d)))
            }
            RecordType::NS => {
                let (name, end) = decode_name(message, self.rdata_offset)?;
                let consumed = end - self.rdata_offset;
                if consumed != self.rdata.len() {
                    return Err(WireError::RdataLength {
                        type_: self.type_,
                        expected: self.rdata.len(),
                        actual: consumed,
                    });
                }
                Ok(RecordData::NS(name))
            }
            RecordType::Other(_) => Ok(RecordData::Other(self.rdata.clone())),
        }
    }

    /// The address of a well-formed A record.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match (self.type_, &self.rdata[..]) {
            (RecordType::A, &[a, b, c, d]) => Some(Ipv4Addr::new(a, b, c, d)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a_record() {
        let message: &[u8] = &[
            3, b'f', b'o', b'o', 0, // name
            0, 1, // type
            0, 1, // class
            0, 0, 0x0e, 0x10, // ttl
            0, 4, // rdata length
            0xC0, 0xA8, 0x00, 0x01, // rdata
        ];
        let (record, next) = DNSRecord::parse(message, 0).unwrap();

        assert_eq!(next, message.len());
        assert_eq!(record.name(), "foo");
        assert_eq!(record.type_(), RecordType::A);
        assert_eq!(record.class(), Class::In);
        assert_eq!(record.ttl(), 3600);
        assert_eq!(
            record.data(message).unwrap(),
            RecordData::A(Ipv4Addr::new(192, 168, 0, 1))
        );
        assert_eq!(record.ipv4().unwrap().to_string(), "192.168.0.1");
    }

    #[test]
    fn test_a_record_with_bad_length() {
        let message: &[u8] = &[0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 3, 10, 0, 0];
        let (record, _) = DNSRecord::parse(message, 0).unwrap();
        assert_eq!(
            record.data(message),
            Err(WireError::RdataLength {
                type_: RecordType::A,
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(record.ipv4(), None);
    }

    #[test]
    fn test_ns_record_resolves_against_whole_message() {
        let message: &[u8] = &[
            3, b'c', b'o', b'm', 0, // offset 0
            0xC0, 0, // owner: pointer to "com"
            0, 2, // type
            0, 1, // class
            0, 2, 0xa3, 0x00, // ttl
            0, 9, // rdata length
            1, b'a', 4, b'g', b't', b'l', b'd', 0xC0, 0, // rdata: "a.gtld" + pointer to "com"
        ];

        let (record, next) = DNSRecord::parse(message, 5).unwrap();
        assert_eq!(next, message.len());
        assert_eq!(record.name(), "com");
        assert_eq!(record.type_(), RecordType::NS);
        assert_eq!(record.ttl(), 172800);
        assert_eq!(
            record.data(message).unwrap(),
            RecordData::NS("a.gtld.com".to_string())
        );
        // the pointer means nothing inside the RDATA slice alone
        assert!(decode_name(record.rdata(), 0).is_err());
    }

    #[test]
    fn test_ns_name_overruns_rdata() {
        let message: &[u8] = &[
            0, // owner: root
            0, 2, 0, 1, 0, 0, 0, 0, // type, class, ttl
            0, 2, // rdata length claims 2 bytes
            3, b'c', b'o', b'm', 0,
        ];
        let (record, next) = DNSRecord::parse(message, 0).unwrap();
        assert_eq!(next, 13);
        assert_eq!(
            record.data(message),
            Err(WireError::RdataLength {
                type_: RecordType::NS,
                expected: 2,
                actual: 5
            })
        );
    }

    #[test]
    fn test_other_type_is_opaque() {
        let message: &[u8] = &[0, 0, 16, 0, 1, 0, 0, 0, 60, 0, 3, 2, b'h', b'i'];
        let (record, _) = DNSRecord::parse(message, 0).unwrap();
        assert_eq!(record.type_(), RecordType::Other(16));
        assert_eq!(
            record.data(message).unwrap(),
            RecordData::Other(vec![2, b'h', b'i'])
        );
    }

    #[test]
    fn test_rdata_past_end() {
        let message: &[u8] = &[0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 4, 10, 0];
        assert!(matches!(
            DNSRecord::parse(message, 0),
            Err(WireError::OutOfBounds { offset: 11, width: 4, .. })
        ));
    }
}
