use crate::classifier::ErrorCode;
use crate::types::CodeValue;

pub const DEFAULT_MESSAGE: &str = "Transaction Failed!";
pub const REJECTED_MESSAGE: &str = "Transaction Rejected by user";
pub const INSUFFICIENT_FUNDS_MESSAGE: &str = "Insufficient funds for transaction";

/// EIP-1193 `userRejectedRequest`.
pub const USER_REJECTED_RPC_CODE: i64 = 4001;
/// Geth's catch-all server error, raised for balance shortfalls.
pub const INSUFFICIENT_FUNDS_RPC_CODE: i64 = -32000;
pub const REJECTED_CODE_TEXT: &str = "ACTION_REJECTED";
pub const INSUFFICIENT_FUNDS_CODE_TEXT: &str = "INSUFFICIENT_FUNDS";

/// Message fragments wallets use when the user dismisses a signature prompt.
pub const REJECTION_MARKERS: &[&str] = &[
    "User denied transaction signature",
    "Rejected Transaction",
    "User rejected the request",
    "ACTIONS_REJECTED",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRule {
    pub needle: &'static str,
    pub code: ErrorCode,
    pub message: &'static str,
}

/// Node error fragments, checked top to bottom. First hit wins.
pub const MESSAGE_RULES: &[MessageRule] = &[
    MessageRule {
        needle: "gas required exceeds allowance",
        code: ErrorCode::GasExceedsAllowance,
        message: "Gas required exceeds your ETH balance",
    },
    MessageRule {
        needle: "nonce too low",
        code: ErrorCode::NonceError,
        message: "Transaction with same nonce already processed",
    },
    MessageRule {
        needle: "replacement transaction underpriced",
        code: ErrorCode::GasPriceError,
        message: "Gas price too low to replace pending transaction",
    },
];

pub fn is_rejection_message(message: &str) -> bool {
    REJECTION_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

pub fn match_message_rule(message: &str) -> Option<&'static MessageRule> {
    MESSAGE_RULES
        .iter()
        .find(|rule| message.contains(rule.needle))
}

pub fn is_rejection_code(code: &CodeValue) -> bool {
    code.is_text(REJECTED_CODE_TEXT) || code.is_number(USER_REJECTED_RPC_CODE)
}

pub fn is_insufficient_funds_code(code: &CodeValue) -> bool {
    code.is_text(INSUFFICIENT_FUNDS_CODE_TEXT) || code.is_number(INSUFFICIENT_FUNDS_RPC_CODE)
}
