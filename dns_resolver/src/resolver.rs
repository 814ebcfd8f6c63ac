//! The iterative resolution loop.
//!
//! Each hop sends one query to the current server and classifies the decoded
//! response as an answer, a referral to the next server, or a terminal
//! failure. Hops run strictly one after another.

use std::net::Ipv4Addr;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::{
    build_query,
    config::ResolverConfig,
    dns_packet::DNSPacket,
    error::ResolveError,
    rcode::ResponseCode,
    record_data::RecordData,
    record_type::RecordType,
    referral::{extract_ns_servers, select_next_server},
    transport::{Transport, UdpTransport},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub name: String,
    pub address: Ipv4Addr,
}

/// Final outcome of [`Resolver::resolve`].
#[derive(Debug)]
pub enum Resolution {
    Answered(Vec<Answer>),
    /// A server authoritatively said the name does not exist.
    NxDomain { server: Ipv4Addr },
    Failed(ResolveError),
}

/// Where a resolution currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionState {
    pub server: Ipv4Addr,
    /// Referrals followed so far.
    pub hops: usize,
    pub query_id: u16,
}

impl ResolutionState {
    pub fn new(root: Ipv4Addr, query_id: u16) -> Self {
        Self {
            server: root,
            hops: 0,
            query_id,
        }
    }

    /// State for querying `next`, with a fresh query id.
    pub fn refer(self, next: Ipv4Addr) -> Self {
        Self {
            server: next,
            hops: self.hops + 1,
            query_id: self.query_id.wrapping_add(1),
        }
    }
}

#[derive(Debug)]
pub enum Transition {
    Answered(Vec<Answer>),
    Referred(Ipv4Addr),
    NxDomain,
    Failed(ResolveError),
}

/// Decides what a decoded response from `server` means for the resolution.
pub fn classify(packet: &DNSPacket, server: Ipv4Addr) -> Transition {
    match packet.rcode() {
        ResponseCode::NoError => {}
        ResponseCode::NameError => return Transition::NxDomain,
        rcode => return Transition::Failed(ResolveError::ServerFailure { server, rcode }),
    }

    if !packet.answers().is_empty() {
        return match collect_answers(packet) {
            Ok(answers) if answers.is_empty() => {
                Transition::Failed(ResolveError::NoAddressInAnswer { server })
            }
            Ok(answers) => Transition::Answered(answers),
            Err(e) => Transition::Failed(e),
        };
    }

    if packet.authorities().is_empty() {
        return Transition::Failed(ResolveError::NoAnswerNoReferral { server });
    }

    let ns_names = match extract_ns_servers(packet.authorities(), packet.raw()) {
        Ok(names) => names,
        Err(e) => return Transition::Failed(e.into()),
    };
    match select_next_server(&ns_names, packet.additionals()) {
        Some(next) => Transition::Referred(next),
        None => {
            warn!(%server, ?ns_names, "referral without usable glue");
            Transition::Failed(ResolveError::NoAnswerNoReferral { server })
        }
    }
}

fn collect_answers(packet: &DNSPacket) -> Result<Vec<Answer>, ResolveError> {
    let mut answers = vec![];
    for record in packet.answers() {
        if record.type_() != RecordType::A {
            continue;
        }
        if let RecordData::A(address) = packet.record_data(record)? {
            answers.push(Answer {
                name: record.name().to_string(),
                address,
            });
        }
    }
    Ok(answers)
}

/// Progress reported to the observer of [`Resolver::resolve_with`].
#[derive(Debug, Clone, Copy)]
pub enum Hop<'a> {
    Querying {
        server: Ipv4Addr,
        hop: usize,
        query_id: u16,
    },
    Received {
        server: Ipv4Addr,
        hop: usize,
        packet: &'a DNSPacket,
    },
}

pub struct Resolver<T> {
    transport: T,
    config: ResolverConfig,
    next_query_id: u16,
}

impl Resolver<UdpTransport> {
    pub fn from_config(config: ResolverConfig) -> Self {
        let transport = UdpTransport::new(config.port, config.max_response_size);
        Self::new(transport, config)
    }
}

impl<T: Transport> Resolver<T> {
    pub fn new(transport: T, config: ResolverConfig) -> Self {
        let next_query_id = config
            .initial_query_id
            .unwrap_or_else(|| rand::thread_rng().gen());
        Self {
            transport,
            config,
            next_query_id,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves the A records of `domain_name`, starting at `root`.
    pub fn resolve(&mut self, domain_name: &str, root: Ipv4Addr) -> Resolution {
        self.resolve_with(domain_name, root, |_| {})
    }

    /// Like [`Resolver::resolve`], reporting each query and each decoded
    /// response to `observer` as it happens.
    pub fn resolve_with<F>(&mut self, domain_name: &str, root: Ipv4Addr, mut observer: F) -> Resolution
    where
        F: FnMut(Hop<'_>),
    {
        let mut state = ResolutionState::new(root, self.next_query_id);

        let resolution = loop {
            if state.hops >= self.config.max_hops {
                break Resolution::Failed(ResolveError::TooManyHops {
                    limit: self.config.max_hops,
                });
            }

            observer(Hop::Querying {
                server: state.server,
                hop: state.hops + 1,
                query_id: state.query_id,
            });
            let packet = match self.query(domain_name, &state) {
                Ok(packet) => packet,
                Err(e) => break Resolution::Failed(e),
            };
            observer(Hop::Received {
                server: state.server,
                hop: state.hops + 1,
                packet: &packet,
            });

            match classify(&packet, state.server) {
                Transition::Referred(next) => {
                    debug!(from = %state.server, to = %next, "following referral");
                    state = state.refer(next);
                }
                Transition::Answered(answers) => break Resolution::Answered(answers),
                Transition::NxDomain => {
                    break Resolution::NxDomain {
                        server: state.server,
                    }
                }
                Transition::Failed(e) => break Resolution::Failed(e),
            }
        };

        self.next_query_id = state.query_id.wrapping_add(1);
        if let Resolution::Failed(e) = &resolution {
            warn!(domain = domain_name, hops = state.hops, error = %e, "resolution failed");
        }
        resolution
    }

    fn query(
        &mut self,
        domain_name: &str,
        state: &ResolutionState,
    ) -> Result<DNSPacket, ResolveError> {
        info!(
            server = %state.server,
            hop = state.hops + 1,
            query_id = state.query_id,
            domain = domain_name,
            "querying"
        );
        let query = build_query(state.query_id, domain_name)?;
        let response = self
            .transport
            .exchange(state.server, &query, self.config.timeout())?;
        let packet = DNSPacket::parse(&response)?;

        if packet.id() != state.query_id {
            warn!(
                server = %state.server,
                expected = state.query_id,
                received = packet.id(),
                "discarding response with mismatched id"
            );
            return Err(ResolveError::MismatchedResponseId {
                expected: state.query_id,
                received: packet.id(),
            });
        }

        debug!(
            server = %state.server,
            answers = packet.answers().len(),
            authorities = packet.authorities().len(),
            additionals = packet.additionals().len(),
            rcode = %packet.rcode(),
            "decoded response"
        );
        Ok(packet)
    }
}
