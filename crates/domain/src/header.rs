/// Read-only view of the raw DNS header handed to `ipfilter`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DnsHeader {
    pub id: u16,
    pub aa: bool,
    pub ad: bool,
    pub cd: bool,
    pub ra: bool,
    pub rd: bool,
    pub tc: bool,
    pub opcode: u8,
    pub rcode: u8,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}
