mod direct_resolver;
mod metrics;
mod probe;
mod script_runtime;

pub use direct_resolver::{DirectResolution, DirectResolver};
pub use metrics::{Counter, MetricRegistry};
pub use probe::ProbeExchange;
pub use script_runtime::{GetTagFn, HookFn, IpFilterFn, ScriptRuntime, TagQuery};
