//! Correlation ids tag every log line produced while a single transaction attempt
//! is in flight.
//!
//! Shape: `transaction-<unix millis>-<3 base36 chars>`. The time component never
//! repeats within a process, so ids from one process are distinct; across
//! processes uniqueness is best effort only. Do not use them as primary keys.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use rand::Rng;

use crate::error::Error;

pub const PREFIX: &str = "transaction";
pub const SUFFIX_LEN: usize = 3;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

static LAST_MILLIS: AtomicI64 = AtomicI64::new(i64::MIN);

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CorrelationId {
    id: String,
    millis: i64,
}

impl CorrelationId {
    pub fn generate() -> Self {
        let millis = next_millis(chrono::Utc::now().timestamp_millis());
        let mut rng = rand::rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
            .collect();
        Self {
            id: format!("{PREFIX}-{millis}-{suffix}"),
            millis,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// The millisecond timestamp embedded in the id.
    pub fn timestamp_millis(&self) -> i64 {
        self.millis
    }
}

pub fn new_correlation_id() -> CorrelationId {
    CorrelationId::generate()
}

/// Clamp `now` above the last issued timestamp.
fn next_millis(now: i64) -> i64 {
    let mut last = LAST_MILLIS.load(Ordering::Relaxed);
    loop {
        let next = now.max(last.saturating_add(1));
        match LAST_MILLIS.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed)
        {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

fn split(s: &str) -> Option<(i64, &str)> {
    let rest = s.strip_prefix(PREFIX)?.strip_prefix('-')?;
    let (millis, suffix) = rest.split_once('-')?;
    if millis.is_empty() || !millis.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if suffix.len() != SUFFIX_LEN || !suffix.bytes().all(|b| BASE36.contains(&b)) {
        return None;
    }
    Some((millis.parse().ok()?, suffix))
}

impl FromStr for CorrelationId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (millis, _) = split(s).ok_or_else(|| Error::Parse {
            reason: format!("invalid correlation id: {s:?}"),
        })?;
        Ok(Self {
            id: s.to_string(),
            millis,
        })
    }
}

impl TryFrom<String> for CorrelationId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CorrelationId> for String {
    fn from(id: CorrelationId) -> Self {
        id.id
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
