use bytes::Bytes;
use hickory_proto::rr::Name;
use std::net::{Ipv6Addr, SocketAddr};

/// A deferred action requested by a hook, executed by the engine before
/// control returns to the resolver. At most one may be pending on a
/// question context; it is taken off the context when interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowupAction {
    /// Chase the first CNAME in the record sequence at the original qtype.
    FollowCname,

    /// Resolve `name` at type A and rewrite the answers into AAAA records
    /// under the /96 `prefix` (NAT64).
    FakeAaaa { name: Name, prefix: Ipv6Addr },

    /// Map a reverse-IPv6 query name onto the embedded IPv4 reverse name
    /// and resolve PTR there (NAT64 reverse).
    FakePtr { name: Name },

    /// One-shot datagram exchange against `dest`, then resume into the
    /// callable registered under `callback`.
    UdpQuery {
        dest: SocketAddr,
        payload: Bytes,
        callback: String,
    },
}
