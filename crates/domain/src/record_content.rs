//! Typed record content keyed by DNS type code.
//!
//! Content handed in by scripts arrives as zone-format text; a per-type
//! parser table turns it into a tagged value. Types without a registered
//! parser pass through opaquely, declared types reject invalid content
//! outright.

use crate::errors::HookError;
use crate::qtype;
use hickory_proto::rr::Name;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordContent {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(Name),
    Ns(Name),
    Ptr(Name),
    Txt(String),
    Generic(String),
}

type ParseFn = fn(&str) -> Option<RecordContent>;

const PARSERS: &[(u16, ParseFn)] = &[
    (qtype::A, parse_a),
    (qtype::AAAA, parse_aaaa),
    (qtype::CNAME, parse_cname),
    (qtype::NS, parse_ns),
    (qtype::PTR, parse_ptr),
    (qtype::TXT, parse_txt),
];

fn parse_a(text: &str) -> Option<RecordContent> {
    text.parse().ok().map(RecordContent::A)
}

fn parse_aaaa(text: &str) -> Option<RecordContent> {
    text.parse().ok().map(RecordContent::Aaaa)
}

fn parse_cname(text: &str) -> Option<RecordContent> {
    Name::from_str(text).ok().map(RecordContent::Cname)
}

fn parse_ns(text: &str) -> Option<RecordContent> {
    Name::from_str(text).ok().map(RecordContent::Ns)
}

fn parse_ptr(text: &str) -> Option<RecordContent> {
    Name::from_str(text).ok().map(RecordContent::Ptr)
}

fn parse_txt(text: &str) -> Option<RecordContent> {
    Some(RecordContent::Txt(text.to_string()))
}

impl RecordContent {
    /// Parse zone-format text for the given record type. No partial record
    /// content is ever produced: invalid text for a declared type fails.
    pub fn parse(rtype: u16, text: &str) -> Result<Self, HookError> {
        match PARSERS.iter().find(|(code, _)| *code == rtype) {
            Some((_, parse)) => parse(text).ok_or_else(|| HookError::InvalidContent {
                rtype,
                content: text.to_string(),
            }),
            None => Ok(RecordContent::Generic(text.to_string())),
        }
    }

    /// Zone-format text representation.
    pub fn zone_repr(&self) -> String {
        self.to_string()
    }

    pub fn as_ip(&self) -> Option<IpAddr> {
        match self {
            RecordContent::A(addr) => Some(IpAddr::V4(*addr)),
            RecordContent::Aaaa(addr) => Some(IpAddr::V6(*addr)),
            _ => None,
        }
    }
}

impl fmt::Display for RecordContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordContent::A(addr) => write!(f, "{}", addr),
            RecordContent::Aaaa(addr) => write!(f, "{}", addr),
            RecordContent::Cname(name) => write!(f, "{}", name),
            RecordContent::Ns(name) => write!(f, "{}", name),
            RecordContent::Ptr(name) => write!(f, "{}", name),
            RecordContent::Txt(text) => write!(f, "{}", text),
            RecordContent::Generic(text) => write!(f, "{}", text),
        }
    }
}
