//! Human readable trace of a resolution, one block per server queried.

use std::io::{self, Write};

use dns_resolver::{record_data::RecordData, DNSPacket, Hop, Resolution};
use tracing::debug;

const SEPARATOR: &str = "----------------------------------------------------------------";

pub fn write_hop(out: &mut impl Write, hop: &Hop<'_>) -> io::Result<()> {
    match hop {
        Hop::Querying { server, .. } => {
            writeln!(out, "{SEPARATOR}")?;
            writeln!(out, "DNS server to query: {server}")
        }
        Hop::Received { packet, .. } => write_packet(out, packet),
    }
}

fn write_packet(out: &mut impl Write, packet: &DNSPacket) -> io::Result<()> {
    writeln!(out, "Reply received. Content overview:")?;
    writeln!(out, "{} Answers.", packet.answers().len())?;
    writeln!(out, "{} Intermediate Name Servers.", packet.authorities().len())?;
    writeln!(out, "{} Additional Information Records.", packet.additionals().len())?;

    writeln!(out, "Answers section:")?;
    if packet.answers().is_empty() {
        writeln!(out)?;
    }
    for record in packet.answers() {
        if let Some(ip) = record.ipv4() {
            writeln!(out, "Name : {} IP: {ip}", record.name())?;
        }
    }

    writeln!(out, "Authority Section:")?;
    if packet.authorities().is_empty() {
        writeln!(out, "(empty)")?;
    }
    for record in packet.authorities() {
        match packet.record_data(record) {
            Ok(RecordData::NS(ns)) => {
                writeln!(out, "Name : {} Name Server: {ns}", record.name())?
            }
            Ok(_) => {}
            Err(e) => debug!(owner = record.name(), error = %e, "skipping unreadable authority record"),
        }
    }

    writeln!(out, "Additional Information Section:")?;
    if packet.additionals().is_empty() {
        writeln!(out, "(empty)")?;
    }
    for record in packet.additionals() {
        if let Some(ip) = record.ipv4() {
            writeln!(out, "Name : {} IP : {ip}", record.name())?;
        }
    }
    Ok(())
}

pub fn write_resolution(
    out: &mut impl Write,
    domain_name: &str,
    resolution: &Resolution,
) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    match resolution {
        Resolution::Answered(answers) => {
            writeln!(out, "Final IP addresses:")?;
            for answer in answers {
                writeln!(out, "  {} -> {}", answer.name, answer.address)?;
            }
        }
        Resolution::NxDomain { .. } => {
            writeln!(out, "Domain does not exist (NXDOMAIN): {domain_name}")?;
        }
        Resolution::Failed(e) => writeln!(out, "Resolution failed: {e}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use dns_resolver::{name::encode_dns_name, Answer, ResolveError};

    use super::*;

    fn record(bytes: &mut Vec<u8>, name: &str, type_: u16, rdata: Vec<u8>) {
        bytes.extend(encode_dns_name(name).unwrap());
        bytes.extend(type_.to_be_bytes());
        bytes.extend([0, 1, 0, 0, 0, 60]);
        bytes.extend((rdata.len() as u16).to_be_bytes());
        bytes.extend(rdata);
    }

    fn render(hop: Hop<'_>) -> String {
        let mut out = vec![];
        write_hop(&mut out, &hop).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_querying_block() {
        let output = render(Hop::Querying {
            server: Ipv4Addr::new(198, 41, 0, 4),
            hop: 1,
            query_id: 1,
        });
        assert_eq!(output, format!("{SEPARATOR}\nDNS server to query: 198.41.0.4\n"));
    }

    #[test]
    fn test_referral_block() {
        let mut bytes = vec![0, 1, 0x81, 0x00, 0, 0, 0, 0, 0, 2, 0, 1];
        record(&mut bytes, "com", 2, encode_dns_name("a.gtld-servers.net").unwrap());
        // NS whose RDATA is not a name
        record(&mut bytes, "com", 2, vec![0xC0]);
        record(&mut bytes, "a.gtld-servers.net", 1, vec![192, 5, 6, 30]);
        let packet = DNSPacket::parse(&bytes).unwrap();

        let output = render(Hop::Received {
            server: Ipv4Addr::new(198, 41, 0, 4),
            hop: 1,
            packet: &packet,
        });

        assert_eq!(
            output,
            "Reply received. Content overview:\n\
             0 Answers.\n\
             2 Intermediate Name Servers.\n\
             1 Additional Information Records.\n\
             Answers section:\n\
             \n\
             Authority Section:\n\
             Name : com Name Server: a.gtld-servers.net\n\
             Additional Information Section:\n\
             Name : a.gtld-servers.net IP : 192.5.6.30\n"
        );
    }

    #[test]
    fn test_answer_block() {
        let mut bytes = vec![0, 1, 0x81, 0x80, 0, 0, 0, 1, 0, 0, 0, 0];
        record(&mut bytes, "example.com", 1, vec![93, 184, 216, 34]);
        let packet = DNSPacket::parse(&bytes).unwrap();

        let output = render(Hop::Received {
            server: Ipv4Addr::new(199, 43, 135, 53),
            hop: 3,
            packet: &packet,
        });

        assert!(output.contains("Answers section:\nName : example.com IP: 93.184.216.34\n"));
        assert!(output.contains("Authority Section:\n(empty)\n"));
        assert!(output.ends_with("Additional Information Section:\n(empty)\n"));
    }

    #[test]
    fn test_final_outcomes() {
        let mut out = vec![];
        let answered = Resolution::Answered(vec![Answer {
            name: "example.com".to_string(),
            address: Ipv4Addr::new(93, 184, 216, 34),
        }]);
        write_resolution(&mut out, "example.com", &answered).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .ends_with("Final IP addresses:\n  example.com -> 93.184.216.34\n"));

        let mut out = vec![];
        let nxdomain = Resolution::NxDomain {
            server: Ipv4Addr::new(192, 5, 6, 30),
        };
        write_resolution(&mut out, "missing.example.com", &nxdomain).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .ends_with("Domain does not exist (NXDOMAIN): missing.example.com\n"));

        let mut out = vec![];
        let failed = Resolution::Failed(ResolveError::TooManyHops { limit: 16 });
        write_resolution(&mut out, "example.com", &failed).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with(&format!("{SEPARATOR}\nResolution failed: ")));
    }
}
