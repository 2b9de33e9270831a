pub mod rules;
pub mod sink;

use crate::types::RawError;
use sink::{DiagnosticSink, NoopSink, TracingSink};

pub const DEFAULT_CONTEXT: &str = "transaction";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ActionRejected,
    InsufficientFunds,
    ContractError,
    GasExceedsAllowance,
    NonceError,
    GasPriceError,
    UnknownError,
}

/// The normalized outcome handed to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ClassifiedError {
    message: String,
    code: ErrorCode,
}

impl ClassifiedError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Label used by [`ErrorClassifier::classify_default`].
    pub default_context: String,
    /// When false, the sink is never called.
    pub log_diagnostics: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            default_context: DEFAULT_CONTEXT.to_string(),
            log_diagnostics: true,
        }
    }
}

/// Maps raw wallet/provider/contract errors onto [`ErrorCode`]s.
///
/// Holds no mutable state; one instance can serve concurrent callers as long as
/// its sink is `Sync`.
pub struct ErrorClassifier<S> {
    sink: S,
    log_diagnostics: bool,
    default_context: String,
}

impl Default for ErrorClassifier<TracingSink> {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl ErrorClassifier<NoopSink> {
    pub fn silent() -> Self {
        Self::new(NoopSink).with_logging(false)
    }
}

impl<S: DiagnosticSink> ErrorClassifier<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            log_diagnostics: true,
            default_context: DEFAULT_CONTEXT.to_string(),
        }
    }

    pub fn from_config(config: &ClassifierConfig, sink: S) -> Self {
        Self {
            sink,
            log_diagnostics: config.log_diagnostics,
            default_context: config.default_context.clone(),
        }
    }

    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_diagnostics = enabled;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Classify `raw`, recording it against `context` first when logging is on.
    ///
    /// `context` only labels the diagnostic; it never influences the result.
    pub fn classify(&self, raw: &RawError, context: &str) -> ClassifiedError {
        if self.log_diagnostics {
            self.sink.record(context, raw);
        }
        classify_raw(raw)
    }

    pub fn classify_default(&self, raw: &RawError) -> ClassifiedError {
        self.classify(raw, &self.default_context)
    }
}

/// Classify with the `tracing` sink, logging only when `log_to_console` is set.
pub fn classify_error(raw: &RawError, context: &str, log_to_console: bool) -> ClassifiedError {
    ErrorClassifier::new(TracingSink)
        .with_logging(log_to_console)
        .classify(raw, context)
}

/// [`classify_error`] with the `"transaction"` context and logging on.
pub fn classify_transaction_error(raw: &RawError) -> ClassifiedError {
    classify_error(raw, DEFAULT_CONTEXT, true)
}

fn classify_raw(raw: &RawError) -> ClassifiedError {
    let code = raw.code();
    let message = raw.message();
    let is_rejected = message.is_some_and(rules::is_rejection_message);

    if is_rejected || code.as_ref().is_some_and(rules::is_rejection_code) {
        return ClassifiedError::new(ErrorCode::ActionRejected, rules::REJECTED_MESSAGE);
    }

    if code.as_ref().is_some_and(rules::is_insufficient_funds_code) {
        return ClassifiedError::new(
            ErrorCode::InsufficientFunds,
            rules::INSUFFICIENT_FUNDS_MESSAGE,
        );
    }

    if let Some(reason) = raw.reason() {
        return ClassifiedError::new(ErrorCode::ContractError, reason);
    }

    if let Some(message) = message {
        return match rules::match_message_rule(message) {
            Some(rule) => ClassifiedError::new(rule.code, rule.message),
            None => ClassifiedError::new(ErrorCode::UnknownError, message),
        };
    }

    ClassifiedError::new(ErrorCode::UnknownError, rules::DEFAULT_MESSAGE)
}
