//! Per-invocation question context handed to hook callables.

use crate::errors::HookError;
use crate::followup::FollowupAction;
use crate::record::{HookRecord, RecordPlace};
use bytes::Bytes;
use hickory_proto::rr::Name;
use std::net::SocketAddr;

/// One EDNS option from the incoming query, externally owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdnsOption {
    pub code: u16,
    pub data: Bytes,
}

/// Mutable exchange structure built fresh from caller state for every hook
/// invocation and discarded afterwards. The final record sequence, result
/// code, non-cacheable flag and applied-policy label are folded back into
/// caller-owned storage by the driver; nothing here survives across two
/// resolver queries.
pub struct DnsQuestion<'a> {
    pub qname: Name,
    pub qtype: u16,
    pub local: SocketAddr,
    pub remote: SocketAddr,
    pub is_stream: bool,
    pub tag: u32,
    pub records: Vec<HookRecord>,
    pub rcode: i32,
    /// Non-cacheable marker: the answer depends on external state. Honored
    /// by the caller even when the hook reports "not handled".
    pub variable: bool,
    pub applied_policy: String,
    pub followup: Option<FollowupAction>,
    /// Raw answer of the most recent probe exchange, for resumed callables.
    pub udp_answer: Option<Bytes>,
    edns_options: Option<&'a [EdnsOption]>,
    policy_tags: Option<&'a mut Vec<String>>,
}

impl<'a> DnsQuestion<'a> {
    pub fn new(
        qname: Name,
        qtype: u16,
        remote: SocketAddr,
        local: SocketAddr,
        is_stream: bool,
    ) -> Self {
        Self {
            qname,
            qtype,
            local,
            remote,
            is_stream,
            tag: 0,
            records: Vec::new(),
            rcode: 0,
            variable: false,
            applied_policy: String::new(),
            followup: None,
            udp_answer: None,
            edns_options: None,
            policy_tags: None,
        }
    }

    pub fn with_tag(mut self, tag: u32) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_records(mut self, records: Vec<HookRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_edns_options(mut self, options: Option<&'a [EdnsOption]>) -> Self {
        self.edns_options = options;
        self
    }

    pub fn with_policy_tags(mut self, tags: Option<&'a mut Vec<String>>) -> Self {
        self.policy_tags = tags;
        self
    }

    pub fn edns_options(&self) -> &[EdnsOption] {
        self.edns_options.unwrap_or(&[])
    }

    pub fn get_edns_option(&self, code: u16) -> Option<&[u8]> {
        self.edns_options()
            .iter()
            .find(|option| option.code == code)
            .map(|option| option.data.as_ref())
    }

    /// Append a tag to the caller-owned policy-tag list, when one was
    /// supplied. The list is append-only from a hook's perspective.
    pub fn add_policy_tag(&mut self, tag: impl Into<String>) {
        if let Some(tags) = self.policy_tags.as_deref_mut() {
            tags.push(tag.into());
        }
    }

    pub fn policy_tags(&self) -> Option<&[String]> {
        self.policy_tags.as_deref().map(|tags| tags.as_slice())
    }

    /// Append a record; content is parsed for the declared type and invalid
    /// content is rejected without creating a record. Owner defaults to the
    /// query name, TTL to 3600.
    pub fn add_record(
        &mut self,
        rtype: u16,
        content: &str,
        place: RecordPlace,
        ttl: Option<u32>,
        name: Option<Name>,
    ) -> Result<(), HookError> {
        let record = HookRecord::new(
            name.unwrap_or_else(|| self.qname.clone()),
            rtype,
            ttl.unwrap_or(3600),
            place,
            content,
        )?;
        self.records.push(record);
        Ok(())
    }

    pub fn add_answer(
        &mut self,
        rtype: u16,
        content: &str,
        ttl: Option<u32>,
        name: Option<Name>,
    ) -> Result<(), HookError> {
        self.add_record(rtype, content, RecordPlace::Answer, ttl, name)
    }
}
