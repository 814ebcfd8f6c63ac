use std::{io, net::Ipv4Addr};

use thiserror::Error;

use crate::{rcode::ResponseCode, record_type::RecordType};

/// Failures while reading or writing DNS wire data.
///
/// Any of these is fatal to the single encode or decode that produced it; a
/// partially decoded message is never handed out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("read of {width} byte(s) at offset {offset} exceeds buffer of {len} bytes")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },

    #[error("unsupported integer width: {0} bytes")]
    UnsupportedWidth(usize),

    #[error("message of {0} bytes is shorter than a DNS header")]
    MessageTooShort(usize),

    #[error("message truncated at offset {offset}")]
    TruncatedMessage { offset: usize },

    #[error("label of {0} bytes exceeds 63")]
    LabelTooLong(usize),

    #[error("name of {0} bytes exceeds 255")]
    NameTooLong(usize),

    #[error("compression pointer loop at offset {offset}")]
    CompressionLoop { offset: usize },

    #[error("{type_:?} record data is {actual} bytes, expected {expected}")]
    RdataLength {
        type_: RecordType,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("timed out waiting for {server}")]
    Timeout { server: Ipv4Addr },

    #[error("network error talking to {server}: {source}")]
    Network {
        server: Ipv4Addr,
        #[source]
        source: io::Error,
    },
}

/// Reasons an iterative resolution stops without an answer.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Wire(#[from] WireError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("response id {received} does not match query id {expected}")]
    MismatchedResponseId { expected: u16, received: u16 },

    #[error("{server} answered with {rcode}")]
    ServerFailure { server: Ipv4Addr, rcode: ResponseCode },

    #[error("{server} returned neither an answer nor a usable referral")]
    NoAnswerNoReferral { server: Ipv4Addr },

    #[error("{server} answered without any A record")]
    NoAddressInAnswer { server: Ipv4Addr },

    #[error("gave up after {limit} hops")]
    TooManyHops { limit: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
