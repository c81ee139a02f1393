use crate::errors::HookError;
use crate::record_content::RecordContent;
use hickory_proto::rr::Name;
use std::net::IpAddr;

/// Section placement priority; the insertion order of records within a
/// sequence reflects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordPlace {
    Answer,
    Authority,
    Additional,
}

/// One DNS resource record as seen by hooks. Scripts may rewrite the type
/// and content of an existing record in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookRecord {
    pub name: Name,
    pub rtype: u16,
    pub ttl: u32,
    pub place: RecordPlace,
    pub content: RecordContent,
}

impl HookRecord {
    pub fn new(
        name: Name,
        rtype: u16,
        ttl: u32,
        place: RecordPlace,
        content: &str,
    ) -> Result<Self, HookError> {
        let content = RecordContent::parse(rtype, content)?;
        Ok(Self {
            name,
            rtype,
            ttl,
            place,
            content,
        })
    }

    /// Replace the content, re-parsed at the record's current type.
    pub fn change_content(&mut self, content: &str) -> Result<(), HookError> {
        self.content = RecordContent::parse(self.rtype, content)?;
        Ok(())
    }

    /// Address carried by A/AAAA content, if any.
    pub fn as_ip(&self) -> Option<IpAddr> {
        self.content.as_ip()
    }
}
