//! It exposes all common structs, types, constants and errors shared by the
//! NFT collection contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{constants::*, content::*, errors::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod content;
mod errors;
mod types;
