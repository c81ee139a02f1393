//! Read-only tables a scripting runtime exposes to scripts: policy-decision
//! codes, DNS result codes, log-level names, the record type-name table and
//! the current time.

use crate::qtype;

/// Decisions a policy hook can hand back through its result code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PolicyDecision {
    Pass = -1,
    Drop = -2,
    Truncate = -3,
}

pub mod rcode {
    pub const NOERROR: i32 = 0;
    pub const FORMERR: i32 = 1;
    pub const SERVFAIL: i32 = 2;
    pub const NXDOMAIN: i32 = 3;
    pub const NOTIMP: i32 = 4;
    pub const REFUSED: i32 = 5;
    pub const YXDOMAIN: i32 = 6;
    pub const YXRRSET: i32 = 7;
    pub const NXRRSET: i32 = 8;
    pub const NOTAUTH: i32 = 9;
    pub const NOTZONE: i32 = 10;
}

pub const RCODE_NAMES: &[(&str, i32)] = &[
    ("NOERROR", rcode::NOERROR),
    ("FORMERR", rcode::FORMERR),
    ("SERVFAIL", rcode::SERVFAIL),
    ("NXDOMAIN", rcode::NXDOMAIN),
    ("NOTIMP", rcode::NOTIMP),
    ("REFUSED", rcode::REFUSED),
    ("YXDOMAIN", rcode::YXDOMAIN),
    ("YXRRSET", rcode::YXRRSET),
    ("NXRRSET", rcode::NXRRSET),
    ("NOTAUTH", rcode::NOTAUTH),
    ("NOTZONE", rcode::NOTZONE),
];

/// Syslog-style level names scripts use when logging.
pub const LOG_LEVELS: &[(&str, i32)] = &[
    ("Emergency", 0),
    ("Alert", 1),
    ("Critical", 2),
    ("Error", 3),
    ("Warning", 4),
    ("Notice", 5),
    ("Info", 6),
    ("Debug", 7),
];

/// Wall-clock instant exposed to scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnixTime {
    pub sec: i64,
    pub usec: i64,
}

pub fn now() -> UnixTime {
    let now = chrono::Utc::now();
    UnixTime {
        sec: now.timestamp(),
        usec: i64::from(now.timestamp_subsec_micros()),
    }
}

/// Flat name/value table a runtime publishes under its global namespace:
/// policy decisions, result codes and record type codes.
pub fn globals() -> Vec<(&'static str, i64)> {
    let mut table = vec![
        ("PASS", PolicyDecision::Pass as i64),
        ("DROP", PolicyDecision::Drop as i64),
        ("TRUNCATE", PolicyDecision::Truncate as i64),
    ];
    for (name, code) in RCODE_NAMES {
        table.push((*name, i64::from(*code)));
    }
    for (name, code) in qtype::NAMES {
        table.push((*name, i64::from(*code)));
    }
    table
}
