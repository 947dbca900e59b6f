use thiserror::Error;

/// Errors raised by fact construction and evaluation.
#[derive(Error, Debug)]
pub enum Error {
    /// The security patch string is not of the form `YYYY-MM-DD`.
    #[error("malformed security patch date '{input}' (expected YYYY-MM-DD)")]
    MalformedPatchDate { input: String },

    /// A fact value is outside its declared domain.
    #[error("invalid fact '{fact}': {reason}")]
    InvalidFact { fact: &'static str, reason: String },

    /// A signal could not be collected from the device.
    #[error("signal '{signal}' is unavailable")]
    SignalUnavailable {
        signal: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// The policy configuration violates a range or ordering constraint.
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
}

impl Error {
    pub(crate) fn invalid_fact(fact: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidFact {
            fact,
            reason: reason.into(),
        }
    }
}
