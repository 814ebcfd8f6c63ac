pub const DNS_PORT: u16 = 53;
pub const UDP_DNS_RESPONSE_SIZE: usize = 2048;
pub const DNS_HEADER_SIZE: usize = 12;
pub const IPV4_RDATA_SIZE: usize = 4;
// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1
pub const RECURSION_DESIRED: u16 = 1 << 8;
// https://datatracker.ietf.org/doc/html/rfc1035#section-2.3.4
pub const MAX_LABEL_LENGTH: usize = 63;
pub const MAX_NAME_LENGTH: usize = 255;
// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.4
pub const POINTER_MASK: u8 = 0b1100_0000;
pub const POINTER_OFFSET_MASK: u8 = 0b0011_1111;
