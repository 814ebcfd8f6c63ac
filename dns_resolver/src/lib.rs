//! Iterative DNS resolution over the raw wire protocol.
//!
//! Starting from a root server, [`Resolver`] follows referrals (NS records in
//! the authority section plus glue A records in the additional section) until
//! some server answers authoritatively for the requested name.

use class::Class;
use dns_header::DNSHeader;
use dns_question::DNSQuestion;
use record_type::RecordType;

pub mod class;
pub mod config;
pub mod constants;
pub mod dns_header;
pub mod dns_packet;
pub mod dns_question;
pub mod dns_record;
pub mod error;
pub mod name;
pub mod rcode;
pub mod record_data;
pub mod record_type;
pub mod referral;
pub mod resolver;
pub mod transport;
pub mod wire;

pub use config::ResolverConfig;
pub use dns_packet::DNSPacket;
pub use error::{ConfigError, ResolveError, TransportError, WireError};
pub use resolver::{Answer, Hop, Resolution, Resolver};
pub use transport::{Transport, UdpTransport};

/// Builds the query for an A record of `domain_name`: a 12-byte header with
/// only RD set and one IN question.
pub fn build_query(id: u16, domain_name: &str) -> Result<Vec<u8>, WireError> {
    let header = DNSHeader::new(id, constants::RECURSION_DESIRED);

    let question = DNSQuestion::new(domain_name, RecordType::A, Class::In);

    let mut bytes = header.to_bytes();
    bytes.extend(question.to_bytes()?);

    Ok(bytes)
}
