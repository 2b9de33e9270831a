#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod classifier;
pub mod correlation;
pub mod error;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use classifier::rules::{MESSAGE_RULES, MessageRule, REJECTION_MARKERS};
pub use classifier::sink::{DiagnosticSink, NoopSink, TracingSink};
pub use classifier::{
    ClassifiedError, ClassifierConfig, DEFAULT_CONTEXT, ErrorClassifier, ErrorCode,
    classify_error, classify_transaction_error,
};
pub use correlation::{CorrelationId, new_correlation_id};
pub use error::Error;
pub use types::{CodeValue, RawError};
