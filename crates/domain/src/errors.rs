use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum HookError {
    #[error("Unable to read script from '{path}': {reason}")]
    ScriptLoad { path: String, reason: String },

    #[error("Script execution failed: {0}")]
    ScriptFailure(String),

    #[error("Invalid domain name: {0}")]
    InvalidName(String),

    #[error("Invalid content for record type {rtype}: {content}")]
    InvalidContent { rtype: u16, content: String },

    #[error("Malformed reverse lookup name: {0}")]
    MalformedReverseName(String),

    #[error("Direct resolution failed: {0}")]
    ResolutionFailed(String),

    #[error("UDP probe to {dest} failed: {reason}")]
    ProbeFailed { dest: String, reason: String },
}
