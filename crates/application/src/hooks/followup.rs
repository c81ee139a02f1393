//! Built-in follow-up continuations run by the driver loop: CNAME chasing
//! and the two NAT64 synthesis resolutions. The probe-then-resume exchange
//! stays in the driver because it re-enters script logic.

use super::ScriptHooks;
use hickory_proto::rr::Name;
use scriptor_domain::{nat64, qtype, HookError, HookRecord, RecordContent, RecordPlace};
use std::net::Ipv6Addr;

impl ScriptHooks {
    /// Chase the first CNAME in the sequence at the original qtype,
    /// appending whatever the sub-resolution yields. No CNAME means result
    /// code 0 and an untouched sequence.
    pub(super) async fn follow_cname(
        &self,
        rtype: u16,
        records: &mut Vec<HookRecord>,
    ) -> Result<i32, HookError> {
        let target = records.iter().find_map(|record| {
            if record.rtype != qtype::CNAME {
                return None;
            }
            match &record.content {
                RecordContent::Cname(target) => Some(target.clone()),
                _ => None,
            }
        });
        let Some(target) = target else {
            return Ok(0);
        };

        let resolution = self.resolver.resolve(&target, rtype).await?;
        records.extend(resolution.records);
        Ok(resolution.rcode)
    }

    /// NAT64: resolve `name` at type A and append the answers rewritten in
    /// place into AAAA records under the /96 `prefix`. Owner names and TTLs
    /// survive the rewrite.
    pub(super) async fn fake_aaaa(
        &self,
        name: &Name,
        prefix: Ipv6Addr,
        records: &mut Vec<HookRecord>,
    ) -> Result<i32, HookError> {
        let mut resolution = self.resolver.resolve(name, qtype::A).await?;
        for record in resolution.records.iter_mut() {
            if record.rtype != qtype::A || record.place != RecordPlace::Answer {
                continue;
            }
            if let RecordContent::A(addr) = record.content {
                record.content = RecordContent::Aaaa(nat64::embed_v4(prefix, addr));
                record.rtype = qtype::AAAA;
            }
        }
        records.extend(resolution.records);
        Ok(resolution.rcode)
    }

    /// NAT64 reverse: map the reverse-IPv6 `name` onto the embedded IPv4
    /// reverse name, resolve PTR there and rename the answers back to
    /// `name`. The sequence is replaced outright; a name with fewer than 8
    /// labels yields -1 with an empty sequence.
    pub(super) async fn fake_ptr(
        &self,
        name: &Name,
        records: &mut Vec<HookRecord>,
    ) -> Result<i32, HookError> {
        records.clear();
        let Some((_, ptr_name)) = nat64::embedded_v4_ptr_name(name)? else {
            return Ok(-1);
        };

        let mut resolution = self.resolver.resolve(&ptr_name, qtype::PTR).await?;
        for record in resolution.records.iter_mut() {
            if record.rtype == qtype::PTR && record.place == RecordPlace::Answer {
                record.name = name.clone();
            }
        }
        *records = resolution.records;
        Ok(resolution.rcode)
    }
}
