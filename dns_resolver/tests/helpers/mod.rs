#![allow(dead_code)]

use std::{collections::VecDeque, io, net::Ipv4Addr, time::Duration};

use dns_resolver::{name::encode_dns_name, Transport, TransportError};

/// Builds an uncompressed response message.
pub struct ResponseBuilder {
    id: u16,
    rcode: u8,
    question: Option<String>,
    answers: Vec<Vec<u8>>,
    authorities: Vec<Vec<u8>>,
    additionals: Vec<Vec<u8>>,
}

fn record(name: &str, type_: u16, rdata: &[u8]) -> Vec<u8> {
    let mut bytes = encode_dns_name(name).unwrap();
    bytes.extend(type_.to_be_bytes());
    bytes.extend(1u16.to_be_bytes());
    bytes.extend(3600u32.to_be_bytes());
    bytes.extend((rdata.len() as u16).to_be_bytes());
    bytes.extend(rdata);
    bytes
}

impl ResponseBuilder {
    pub fn new(question: &str) -> Self {
        Self {
            id: 0,
            rcode: 0,
            question: Some(question.to_string()),
            answers: vec![],
            authorities: vec![],
            additionals: vec![],
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn answer(mut self, name: &str, ip: Ipv4Addr) -> Self {
        self.answers.push(record(name, 1, &ip.octets()));
        self
    }

    pub fn name_server(mut self, zone: &str, target: &str) -> Self {
        self.authorities
            .push(record(zone, 2, &encode_dns_name(target).unwrap()));
        self
    }

    pub fn glue(mut self, name: &str, ip: Ipv4Addr) -> Self {
        self.additionals.push(record(name, 1, &ip.octets()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut bytes = vec![];
        bytes.extend(self.id.to_be_bytes());
        bytes.extend((0x8000u16 | self.rcode as u16).to_be_bytes());
        bytes.extend((self.question.is_some() as u16).to_be_bytes());
        bytes.extend((self.answers.len() as u16).to_be_bytes());
        bytes.extend((self.authorities.len() as u16).to_be_bytes());
        bytes.extend((self.additionals.len() as u16).to_be_bytes());
        if let Some(question) = &self.question {
            bytes.extend(encode_dns_name(question).unwrap());
            bytes.extend([0, 1, 0, 1]);
        }
        for section in [self.answers, self.authorities, self.additionals] {
            for record in section {
                bytes.extend(record);
            }
        }
        bytes
    }
}

pub enum Reply {
    /// Response whose id is rewritten to match the query.
    Matching(Vec<u8>),
    /// Response sent as-is, whatever its id.
    Verbatim(Vec<u8>),
    Timeout,
    /// Socket failure, as when the server's port is unreachable.
    NetworkError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub server: Ipv4Addr,
    pub query: Vec<u8>,
}

impl Exchange {
    pub fn query_id(&self) -> u16 {
        u16::from_be_bytes([self.query[0], self.query[1]])
    }
}

/// Plays back canned replies in order and records every query it is given.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: VecDeque<Reply>,
    pub exchanges: Vec<Exchange>,
}

impl ScriptedTransport {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            exchanges: vec![],
        }
    }

    pub fn servers(&self) -> Vec<Ipv4Addr> {
        self.exchanges.iter().map(|e| e.server).collect()
    }
}

impl Transport for &mut ScriptedTransport {
    fn exchange(
        &mut self,
        server: Ipv4Addr,
        query: &[u8],
        _timeout: Duration,
    ) -> Result<Vec<u8>, TransportError> {
        self.exchanges.push(Exchange {
            server,
            query: query.to_vec(),
        });
        match self.replies.pop_front() {
            Some(Reply::Matching(mut bytes)) => {
                bytes[..2].copy_from_slice(&query[..2]);
                Ok(bytes)
            }
            Some(Reply::Verbatim(bytes)) => Ok(bytes),
            Some(Reply::NetworkError) => Err(TransportError::Network {
                server,
                source: io::ErrorKind::ConnectionRefused.into(),
            }),
            Some(Reply::Timeout) | None => Err(TransportError::Timeout { server }),
        }
    }
}
