#![expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]

use std::sync::Mutex;

use tx_error_classifier::{
    ClassifiedError, CorrelationId, DiagnosticSink, ErrorClassifier, ErrorCode, RawError,
    classify_error, classify_transaction_error, new_correlation_id,
};

#[derive(serde::Deserialize)]
struct Fixture {
    name: String,
    error: RawError,
    expected_code: ErrorCode,
    expected_message: String,
}

fn load_fixtures(filename: &str) -> Vec<Fixture> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = format!("{manifest_dir}/tests/fixtures/{filename}");
    let data =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
}

#[derive(Default)]
struct CollectingSink {
    contexts: Mutex<Vec<String>>,
}

impl DiagnosticSink for CollectingSink {
    fn record(&self, context: &str, _raw: &RawError) {
        self.contexts.lock().unwrap().push(context.to_string());
    }
}

#[test]
fn provider_errors_classify_as_expected() {
    let fixtures = load_fixtures("provider_errors.json");
    assert!(!fixtures.is_empty());

    for fixture in &fixtures {
        let result = classify_error(&fixture.error, &fixture.name, false);
        assert_eq!(
            result,
            ClassifiedError::new(fixture.expected_code, fixture.expected_message.clone()),
            "wrong classification for {}",
            fixture.name
        );
    }
}

#[test]
fn every_code_is_reachable_from_fixtures() {
    let fixtures = load_fixtures("provider_errors.json");
    let classifier = ErrorClassifier::silent();

    for code in [
        ErrorCode::ActionRejected,
        ErrorCode::InsufficientFunds,
        ErrorCode::ContractError,
        ErrorCode::GasExceedsAllowance,
        ErrorCode::NonceError,
        ErrorCode::GasPriceError,
        ErrorCode::UnknownError,
    ] {
        assert!(
            fixtures
                .iter()
                .any(|f| classifier.classify(&f.error, &f.name).code() == code),
            "no fixture produces {code}"
        );
    }
}

#[test]
fn one_diagnostic_per_attempt_tagged_with_correlation_id() {
    let fixtures = load_fixtures("provider_errors.json");
    let sink = CollectingSink::default();
    let classifier = ErrorClassifier::new(&sink);

    let ids: Vec<CorrelationId> = fixtures.iter().map(|_| new_correlation_id()).collect();
    for (fixture, id) in fixtures.iter().zip(&ids) {
        classifier.classify(&fixture.error, id.as_str());
    }

    let contexts = sink.contexts.lock().unwrap().clone();
    let expected: Vec<String> = ids.iter().map(ToString::to_string).collect();
    assert_eq!(contexts, expected);
}

#[test]
fn json_text_round_trips_through_classifier() {
    let raw = RawError::from_json(
        r#"{"code":"CALL_EXCEPTION","reason":"LINKTUM: transfer amount exceeds balance"}"#,
    )
    .unwrap();
    let result = classify_transaction_error(&raw);
    assert_eq!(result.code(), ErrorCode::ContractError);

    let encoded = serde_json::to_string(&result).unwrap();
    assert_eq!(
        encoded,
        r#"{"message":"LINKTUM: transfer amount exceeds balance","code":"CONTRACT_ERROR"}"#
    );
    let decoded: ClassifiedError = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, result);
}

#[test]
fn classified_error_converts_into_boxed_error() {
    fn submit(raw: &RawError) -> Result<(), Box<dyn std::error::Error>> {
        let classified = classify_error(raw, "submit", false);
        if classified.code() == ErrorCode::ActionRejected {
            return Err(classified.into());
        }
        Ok(())
    }

    let err = submit(&RawError::new(serde_json::json!({ "code": 4001 }))).unwrap_err();
    assert_eq!(err.to_string(), "Transaction Rejected by user");
}
