//! Single request/response exchange with a name server.

use std::{
    io,
    net::{Ipv4Addr, UdpSocket},
    time::Duration,
};

use tracing::trace;

use crate::{constants, error::TransportError};

/// Sends one query and waits for one response.
///
/// Implementations must not retry on their own; a timeout or socket failure
/// is reported and the caller decides what happens next.
pub trait Transport {
    fn exchange(
        &mut self,
        server: Ipv4Addr,
        query: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, TransportError>;
}

/// DNS over UDP, one ephemeral socket per exchange.
#[derive(Debug, Clone)]
pub struct UdpTransport {
    port: u16,
    max_response_size: usize,
}

impl UdpTransport {
    pub fn new(port: u16, max_response_size: usize) -> Self {
        Self {
            port,
            max_response_size,
        }
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new(constants::DNS_PORT, constants::UDP_DNS_RESPONSE_SIZE)
    }
}

impl Transport for UdpTransport {
    fn exchange(
        &mut self,
        server: Ipv4Addr,
        query: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, TransportError> {
        let network = |source: io::Error| TransportError::Network { server, source };

        // Dropped on every path out of this function.
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).map_err(network)?;
        socket.set_read_timeout(Some(timeout)).map_err(network)?;
        // Connecting filters out datagrams from anyone but `server`.
        socket.connect((server, self.port)).map_err(network)?;

        let sent = socket.send(query).map_err(network)?;
        trace!(%server, bytes_sent = sent, "UDP query sent");

        let mut response_buffer = vec![0; self.max_response_size];
        let received = socket.recv(&mut response_buffer).map_err(|e| match e.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
                TransportError::Timeout { server }
            }
            _ => network(e),
        })?;
        trace!(%server, bytes_received = received, "UDP response received");

        response_buffer.truncate(received);
        Ok(response_buffer)
    }
}
