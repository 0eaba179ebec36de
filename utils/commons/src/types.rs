use super::*;

/// Contract token ID type.
/// Items are numbered densely from zero, so the index itself is the token ID.
pub type ContractTokenId = TokenIdU64;

/// Contract token amount type.
/// Every item is unique, so the only amount ever minted is 1.
pub type ContractTokenAmount = TokenAmountU8;

/// Standard CIS-2 event specialized to the token types of this collection.
pub type ContractEvent = Cis2Event<ContractTokenId, ContractTokenAmount>;
