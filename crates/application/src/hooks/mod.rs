//! Generic hook driver.
//!
//! For every phase the driver builds a question context from caller state,
//! invokes the registered callable (if any), interprets at most one pending
//! follow-up action per invocation and folds the mutated context back into
//! the caller's slots. "Not handled" leaves caller state alone apart from
//! the non-cacheable flag, which is OR-ed through unconditionally.

mod followup;

use crate::ports::{
    DirectResolver, GetTagFn, HookFn, IpFilterFn, ProbeExchange, ScriptRuntime, TagQuery,
};
use hickory_proto::rr::Name;
use scriptor_domain::{DnsHeader, DnsQuestion, EdnsOption, FollowupAction, HookError, HookRecord};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

const PRERESOLVE: &str = "preresolve";
const NODATA: &str = "nodata";
const NXDOMAIN: &str = "nxdomain";
const POSTRESOLVE: &str = "postresolve";
const PREOUTQUERY: &str = "preoutquery";

/// Identity of the query a hook runs against.
#[derive(Debug, Clone)]
pub struct HookQuery {
    pub remote: SocketAddr,
    pub local: SocketAddr,
    pub qname: Name,
    pub qtype: u16,
    pub is_stream: bool,
}

/// Script hook engine. One instance per resolver, shared across queries;
/// the callable registry is resolved once at load time and all mutable
/// state lives in the per-invocation question context.
pub struct ScriptHooks {
    runtime: Arc<dyn ScriptRuntime>,
    resolver: Arc<dyn DirectResolver>,
    probe: Arc<dyn ProbeExchange>,
    preresolve: Option<HookFn>,
    nodata: Option<HookFn>,
    nxdomain: Option<HookFn>,
    postresolve: Option<HookFn>,
    preoutquery: Option<HookFn>,
    ipfilter: Option<IpFilterFn>,
    gettag: Option<GetTagFn>,
}

impl ScriptHooks {
    /// Execute the script source once and resolve the optional entry points
    /// by name. A script that cannot be read or fails to execute aborts
    /// construction.
    pub fn load(
        runtime: Arc<dyn ScriptRuntime>,
        source: &Path,
        resolver: Arc<dyn DirectResolver>,
        probe: Arc<dyn ProbeExchange>,
    ) -> Result<Self, HookError> {
        runtime.load(source)?;
        Ok(Self {
            preresolve: runtime.hook(PRERESOLVE),
            nodata: runtime.hook(NODATA),
            nxdomain: runtime.hook(NXDOMAIN),
            postresolve: runtime.hook(POSTRESOLVE),
            preoutquery: runtime.hook(PREOUTQUERY),
            ipfilter: runtime.ipfilter(),
            gettag: runtime.gettag(),
            runtime,
            resolver,
            probe,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn preresolve(
        &self,
        query: &HookQuery,
        edns_options: Option<&[EdnsOption]>,
        tag: u32,
        records: &mut Vec<HookRecord>,
        applied_policy: Option<&mut String>,
        policy_tags: Option<&mut Vec<String>>,
        rcode: &mut i32,
        variable: &mut bool,
    ) -> Result<bool, HookError> {
        self.gen_hook(
            self.preresolve.as_ref(),
            query,
            edns_options,
            tag,
            records,
            applied_policy,
            policy_tags,
            rcode,
            Some(variable),
        )
        .await
    }

    pub async fn nxdomain(
        &self,
        query: &HookQuery,
        records: &mut Vec<HookRecord>,
        rcode: &mut i32,
        variable: &mut bool,
    ) -> Result<bool, HookError> {
        self.gen_hook(
            self.nxdomain.as_ref(),
            query,
            None,
            0,
            records,
            None,
            None,
            rcode,
            Some(variable),
        )
        .await
    }

    pub async fn nodata(
        &self,
        query: &HookQuery,
        records: &mut Vec<HookRecord>,
        rcode: &mut i32,
        variable: &mut bool,
    ) -> Result<bool, HookError> {
        self.gen_hook(
            self.nodata.as_ref(),
            query,
            None,
            0,
            records,
            None,
            None,
            rcode,
            Some(variable),
        )
        .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn postresolve(
        &self,
        query: &HookQuery,
        records: &mut Vec<HookRecord>,
        applied_policy: Option<&mut String>,
        policy_tags: Option<&mut Vec<String>>,
        rcode: &mut i32,
        variable: &mut bool,
    ) -> Result<bool, HookError> {
        self.gen_hook(
            self.postresolve.as_ref(),
            query,
            None,
            0,
            records,
            applied_policy,
            policy_tags,
            rcode,
            Some(variable),
        )
        .await
    }

    /// `remote` is the nameserver about to be queried, `local` the original
    /// requestor.
    pub async fn preoutquery(
        &self,
        query: &HookQuery,
        records: &mut Vec<HookRecord>,
        rcode: &mut i32,
    ) -> Result<bool, HookError> {
        self.gen_hook(
            self.preoutquery.as_ref(),
            query,
            None,
            0,
            records,
            None,
            None,
            rcode,
            None,
        )
        .await
    }

    /// Pure block/pass predicate over the raw header; never blocks when no
    /// callable is registered.
    pub fn ipfilter(
        &self,
        remote: SocketAddr,
        local: SocketAddr,
        header: &DnsHeader,
    ) -> Result<bool, HookError> {
        match &self.ipfilter {
            Some(filter) => filter(remote, local, header),
            None => Ok(false),
        }
    }

    /// Classify a query before resolution starts. Returned tag strings are
    /// appended, in order, to the caller-owned policy-tag list.
    pub fn gettag(
        &self,
        tag_query: &TagQuery<'_>,
        policy_tags: Option<&mut Vec<String>>,
    ) -> Result<u32, HookError> {
        let Some(gettag) = &self.gettag else {
            return Ok(0);
        };
        let (tag, tags) = gettag(tag_query)?;
        if let (Some(slot), Some(tags)) = (policy_tags, tags) {
            slot.extend(tags);
        }
        Ok(tag)
    }

    #[allow(clippy::too_many_arguments)]
    async fn gen_hook(
        &self,
        hook: Option<&HookFn>,
        query: &HookQuery,
        edns_options: Option<&[EdnsOption]>,
        tag: u32,
        records: &mut Vec<HookRecord>,
        applied_policy: Option<&mut String>,
        policy_tags: Option<&mut Vec<String>>,
        rcode: &mut i32,
        mut variable: Option<&mut bool>,
    ) -> Result<bool, HookError> {
        let Some(hook) = hook else {
            return Ok(false);
        };

        let mut dq = DnsQuestion::new(
            query.qname.clone(),
            query.qtype,
            query.remote,
            query.local,
            query.is_stream,
        )
        .with_tag(tag)
        .with_records(records.clone())
        .with_edns_options(edns_options)
        .with_policy_tags(policy_tags);

        let handled = hook(&mut dq)?;
        if let Some(flag) = variable.as_deref_mut() {
            // the name may have been flagged non-cacheable even though the
            // hook left the answer alone
            *flag |= dq.variable;
        }
        if !handled {
            return Ok(false);
        }

        let mut rc = dq.rcode;
        loop {
            let Some(action) = dq.followup.take() else {
                break;
            };
            match action {
                FollowupAction::FollowCname => {
                    rc = self.follow_cname(query.qtype, &mut dq.records).await?;
                }
                FollowupAction::FakeAaaa { name, prefix } => {
                    rc = self.fake_aaaa(&name, prefix, &mut dq.records).await?;
                }
                FollowupAction::FakePtr { name } => {
                    rc = self.fake_ptr(&name, &mut dq.records).await?;
                }
                FollowupAction::UdpQuery {
                    dest,
                    payload,
                    callback,
                } => {
                    dq.udp_answer = Some(self.probe.exchange(dest, &payload).await?);
                    let Some(resume) = self.runtime.hook(&callback) else {
                        warn!(
                            callback = %callback,
                            "udp query callback not registered, abandoning hook invocation"
                        );
                        return Ok(false);
                    };
                    let resumed = resume(&mut dq)?;
                    if let Some(flag) = variable.as_deref_mut() {
                        *flag |= dq.variable;
                    }
                    if !resumed {
                        return Ok(false);
                    }
                    rc = dq.rcode;
                }
            }
        }

        *rcode = rc;
        *records = std::mem::take(&mut dq.records);
        if let Some(slot) = applied_policy {
            *slot = std::mem::take(&mut dq.applied_policy);
        }
        Ok(true)
    }
}
