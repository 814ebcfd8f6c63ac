//! Picking the next server out of a referral.

use std::net::Ipv4Addr;

use tracing::debug;

use crate::{dns_record::DNSRecord, error::WireError, record_type::RecordType};

/// Names of the NS records in `authorities`, in wire order.
///
/// `message` is the full response the records were decoded from; NS targets
/// are commonly compressed against names elsewhere in it.
pub fn extract_ns_servers(
    authorities: &[DNSRecord],
    message: &[u8],
) -> Result<Vec<String>, WireError> {
    authorities
        .iter()
        .filter(|record| record.type_() == RecordType::NS)
        .map(|record| {
            let data = record.data(message)?;
            Ok(data.as_ns().unwrap_or_default().to_string())
        })
        .collect()
}

/// Address from the first A record in `additionals` owned by `name`,
/// compared case-insensitively.
pub fn find_glue_address(name: &str, additionals: &[DNSRecord]) -> Option<Ipv4Addr> {
    additionals
        .iter()
        .filter(|record| record.type_() == RecordType::A)
        .filter(|record| record.name().eq_ignore_ascii_case(name))
        .find_map(DNSRecord::ipv4)
}

/// First NS name, in the order given, that has glue.
pub fn select_next_server(ns_names: &[String], additionals: &[DNSRecord]) -> Option<Ipv4Addr> {
    ns_names.iter().find_map(|name| {
        let ip = find_glue_address(name, additionals)?;
        debug!(name_server = %name, %ip, "selected glue");
        Some(ip)
    })
}
