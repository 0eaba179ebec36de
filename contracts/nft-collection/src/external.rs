use commons::ContentDescriptor;
use concordium_std::*;

use crate::address::ItemAddress;

/// Deployment parameters of a collection.
#[derive(Debug, Serialize, SchemaType)]
pub struct InitParams {
    /// Account allowed to administer the collection.
    pub owner: AccountAddress,
    /// Collection level metadata.
    pub content: ContentDescriptor,
    /// Price of a single item, without the processing overhead.
    pub item_price: Amount,
    /// Whether minting starts restricted to the whitelist.
    pub whitelist_enabled: bool,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct MintParams {
    /// Item level metadata.
    pub content: ContentDescriptor,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct WhitelistParams {
    pub addr: Address,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct WhitelistViewParams {
    pub skip: u32,
    pub show: u32,
}

#[derive(Debug, Serialize, SchemaType)]
pub struct NftContentParams {
    pub index: u64,
    pub individual_content: ContentDescriptor,
}

#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct CollectionData {
    /// Index the next minted item gets, equal to the number of minted items.
    pub next_item_index: u64,
    pub owner: AccountAddress,
    pub content: ContentDescriptor,
}

#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct NftData {
    pub index: u64,
    pub address: ItemAddress,
    pub owner: Address,
    pub content: ContentDescriptor,
}

#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct MintConfig {
    pub item_price: Amount,
    pub processing_overhead: Amount,
}
