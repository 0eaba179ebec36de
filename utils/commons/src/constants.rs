use super::*;

/// Fixed amount charged on top of the item price for every mint, in
/// micro CCD. Forwarded to the collection owner together with the price.
pub const PROCESSING_OVERHEAD: Amount = Amount::from_micro_ccd(50_000);

/// Content prefix marking an off-chain metadata URL.
pub const OFFCHAIN_CONTENT_PREFIX: u8 = 0x01;

/// Content prefix reserved for on-chain metadata dictionaries.
pub const ONCHAIN_CONTENT_PREFIX: u8 = 0x00;

/// Longest content descriptor a u16 length prefix can carry.
pub const MAX_CONTENT_LEN: usize = u16::MAX as usize;

/// Domain separator mixed into every derived item address.
pub const ITEM_ADDRESS_DOMAIN: &[u8] = b"NftCollection.item";

// CIS-2 reserves tags from `u8::MAX` down to `u8::MAX - 4`.

/// Tag for the Custom Whitelist Added event.
pub const WHITELIST_ADD_TAG: u8 = u8::MAX - 5;

/// Tag for the Custom Whitelist Removed event.
pub const WHITELIST_REMOVE_TAG: u8 = u8::MAX - 6;

/// Tag for the Custom Whitelist Toggled event.
pub const WHITELIST_TOGGLE_TAG: u8 = u8::MAX - 7;
