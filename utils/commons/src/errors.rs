use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Only the collection owner has access (Error code: -4).
    Unauthorized,
    /// Whitelist is enabled and the sender is not on it (Error code: -5).
    NotWhitelisted,
    /// Attached amount is below the total mint cost (Error code: -6).
    InsufficientPayment,
    /// Item price plus processing overhead does not fit an amount (Error code: -7).
    InvalidPrice,
    /// No item index is left to allocate (Error code: -8).
    IndexExhausted,
    /// Failed to invoke a transfer (Error code: -9).
    InvokeTransferError,
    /// Merged content does not fit a content descriptor (Error code: -10).
    ContentTooLong,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_log_error_mapping() {
        claim_eq!(
            CustomContractError::from(LogError::Full),
            CustomContractError::LogFull
        );
        claim_eq!(
            CustomContractError::from(LogError::Malformed),
            CustomContractError::LogMalformed
        );
    }
}
