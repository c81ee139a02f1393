//! Scriptor Domain Layer
pub mod config;
pub mod errors;
pub mod followup;
pub mod header;
pub mod nat64;
pub mod qtype;
pub mod question;
pub mod record;
pub mod record_content;
pub mod script_env;

pub use config::HooksConfig;
pub use errors::HookError;
pub use followup::FollowupAction;
pub use header::DnsHeader;
pub use question::{DnsQuestion, EdnsOption};
pub use record::{HookRecord, RecordPlace};
pub use record_content::RecordContent;
