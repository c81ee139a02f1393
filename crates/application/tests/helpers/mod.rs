#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use hickory_proto::rr::Name;
use scriptor_application::ports::{
    DirectResolution, DirectResolver, GetTagFn, HookFn, IpFilterFn, ProbeExchange, ScriptRuntime,
    TagQuery,
};
use scriptor_application::{HookQuery, ScriptHooks};
use scriptor_domain::{qtype, DnsHeader, DnsQuestion, HookError, HookRecord, RecordPlace};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct MockResolver {
    responses: Mutex<HashMap<(String, u16), DirectResolution>>,
    calls: Mutex<Vec<(String, u16)>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, name: &str, rtype: u16, resolution: DirectResolution) {
        self.responses
            .lock()
            .unwrap()
            .insert((name.to_string(), rtype), resolution);
    }

    pub fn calls(&self) -> Vec<(String, u16)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectResolver for MockResolver {
    async fn resolve(&self, name: &Name, rtype: u16) -> Result<DirectResolution, HookError> {
        let key = (name.to_string().to_lowercase(), rtype);
        self.calls.lock().unwrap().push(key.clone());
        self.responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| {
                HookError::ResolutionFailed(format!(
                    "no mock response for {} type {}",
                    key.0, key.1
                ))
            })
    }
}

pub struct MockProbe {
    answer: Bytes,
    requests: Mutex<Vec<(SocketAddr, Vec<u8>)>>,
}

impl MockProbe {
    pub fn new() -> Self {
        Self::with_answer(b"")
    }

    pub fn with_answer(answer: &[u8]) -> Self {
        Self {
            answer: Bytes::copy_from_slice(answer),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(SocketAddr, Vec<u8>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProbeExchange for MockProbe {
    async fn exchange(&self, dest: SocketAddr, payload: &[u8]) -> Result<Bytes, HookError> {
        self.requests.lock().unwrap().push((dest, payload.to_vec()));
        Ok(self.answer.clone())
    }
}

#[derive(Default)]
pub struct MockRuntime {
    hooks: Mutex<HashMap<String, HookFn>>,
    ipfilter: Mutex<Option<IpFilterFn>>,
    gettag: Mutex<Option<GetTagFn>>,
    fail_load: bool,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_load: true,
            ..Self::default()
        }
    }

    pub fn register<F>(&self, name: &str, hook: F)
    where
        F: for<'a> Fn(&mut DnsQuestion<'a>) -> Result<bool, HookError> + Send + Sync + 'static,
    {
        self.hooks
            .lock()
            .unwrap()
            .insert(name.to_string(), Arc::new(hook));
    }

    pub fn set_ipfilter<F>(&self, filter: F)
    where
        F: Fn(SocketAddr, SocketAddr, &DnsHeader) -> Result<bool, HookError>
            + Send
            + Sync
            + 'static,
    {
        *self.ipfilter.lock().unwrap() = Some(Arc::new(filter));
    }

    pub fn set_gettag<F>(&self, gettag: F)
    where
        F: Fn(&TagQuery<'_>) -> Result<(u32, Option<Vec<String>>), HookError>
            + Send
            + Sync
            + 'static,
    {
        *self.gettag.lock().unwrap() = Some(Arc::new(gettag));
    }
}

impl ScriptRuntime for MockRuntime {
    fn load(&self, source: &Path) -> Result<(), HookError> {
        if self.fail_load {
            return Err(HookError::ScriptLoad {
                path: source.display().to_string(),
                reason: "mock load failure".to_string(),
            });
        }
        Ok(())
    }

    fn hook(&self, name: &str) -> Option<HookFn> {
        self.hooks.lock().unwrap().get(name).cloned()
    }

    fn ipfilter(&self) -> Option<IpFilterFn> {
        self.ipfilter.lock().unwrap().clone()
    }

    fn gettag(&self) -> Option<GetTagFn> {
        self.gettag.lock().unwrap().clone()
    }
}

pub fn name(text: &str) -> Name {
    Name::from_str(text).unwrap()
}

pub fn record(owner: &str, rtype: u16, ttl: u32, place: RecordPlace, content: &str) -> HookRecord {
    HookRecord::new(name(owner), rtype, ttl, place, content).unwrap()
}

pub fn a_record(owner: &str, addr: &str) -> HookRecord {
    record(owner, qtype::A, 3600, RecordPlace::Answer, addr)
}

pub fn cname_record(owner: &str, target: &str) -> HookRecord {
    record(owner, qtype::CNAME, 3600, RecordPlace::Answer, target)
}

pub fn ptr_record(owner: &str, target: &str) -> HookRecord {
    record(owner, qtype::PTR, 3600, RecordPlace::Answer, target)
}

pub fn remote() -> SocketAddr {
    "198.51.100.7:40000".parse().unwrap()
}

pub fn local() -> SocketAddr {
    "192.0.2.1:53".parse().unwrap()
}

pub fn query(qname: &str, rtype: u16) -> HookQuery {
    HookQuery {
        remote: remote(),
        local: local(),
        qname: name(qname),
        qtype: rtype,
        is_stream: false,
    }
}

pub fn engine(
    runtime: Arc<MockRuntime>,
    resolver: Arc<MockResolver>,
    probe: Arc<MockProbe>,
) -> ScriptHooks {
    ScriptHooks::load(runtime, Path::new("hooks.lua"), resolver, probe).unwrap()
}
