use std::sync::Once;

use strum::IntoEnumIterator;
use tracing_wasm::{ConsoleConfig, WASMLayerConfigBuilder};
use wasm_bindgen::prelude::*;

use crate::classifier::{self, ClassifiedError, DEFAULT_CONTEXT, ErrorCode};
use crate::correlation::CorrelationId;
use crate::types::RawError;

static CONSOLE_LOGGING: Once = Once::new();

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

fn install_console_subscriber() {
    let mut builder = WASMLayerConfigBuilder::new();
    let config = builder
        .set_report_logs_in_timings(false)
        .set_max_level(tracing::Level::INFO)
        .set_console_config(ConsoleConfig::ReportWithConsoleColor)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}

/// Runs `install` at most once per `guard`, and only when console output is wanted.
fn prepare_console(log_to_console: bool, guard: &Once, install: impl FnOnce()) -> bool {
    if log_to_console {
        guard.call_once(install);
    }
    log_to_console
}

/// Route `tracing` diagnostics to the browser console. Safe to call repeatedly.
#[wasm_bindgen]
pub fn init_logging() {
    prepare_console(true, &CONSOLE_LOGGING, install_console_subscriber);
}

/// Classify a JSON-encoded wallet/provider error into `{message, code}`.
///
/// Unparseable JSON is treated as an error with no fields. When
/// `log_to_console` is true (the default) the raw error is written to the
/// browser console via `console.error`.
#[wasm_bindgen]
pub fn classify_transaction_error(
    json: &str,
    context: Option<String>,
    log_to_console: Option<bool>,
) -> JsValue {
    let log = prepare_console(
        log_to_console.unwrap_or(true),
        &CONSOLE_LOGGING,
        install_console_subscriber,
    );
    let raw = RawError::from_json(json).unwrap_or_else(|_| RawError::empty());
    let result: ClassifiedError = classifier::classify_error(
        &raw,
        context.as_deref().unwrap_or(DEFAULT_CONTEXT),
        log,
    );
    to_js(&result)
}

/// Fresh `transaction-<millis>-<suffix>` id.
#[wasm_bindgen]
pub fn generate_id() -> String {
    CorrelationId::generate().into()
}

/// Every code string, in declaration order.
#[wasm_bindgen]
pub fn error_codes() -> JsValue {
    let codes: Vec<String> = ErrorCode::iter().map(|code| code.to_string()).collect();
    to_js(&codes)
}
