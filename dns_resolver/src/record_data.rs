use std::net::Ipv4Addr;

/// RDATA interpreted according to the record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    NS(String),
    Other(Vec<u8>),
}

impl RecordData {
    pub fn as_ns(&self) -> Option<&str> {
        match self {
            RecordData::NS(name) => Some(name),
            _ => None,
        }
    }
}
