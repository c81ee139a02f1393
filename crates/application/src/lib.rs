//! Scriptor Application Layer
pub mod hooks;
pub mod ports;
pub mod services;

pub use hooks::{HookQuery, ScriptHooks};
