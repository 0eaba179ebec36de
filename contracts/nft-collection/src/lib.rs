//! A fixed-price NFT collection.
//!
//! Items are minted one at a time with sequential indices. Every item address
//! is derived from the collection address and the item index, so it can be
//! computed before the item exists. Minting can be restricted to a whitelist
//! administered by the collection owner.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod address;
mod contract;
pub mod events;
pub mod external;
pub mod state;
