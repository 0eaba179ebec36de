use commons::ITEM_ADDRESS_DOMAIN;
use concordium_std::*;
use sha3::{Digest, Keccak256};

/// Address of a single item of the collection.
///
/// Derived from the collection contract address and the item index only, so it
/// is known before the item is minted and never needs to be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ItemAddress(pub [u8; 32]);

impl schema::SchemaType for ItemAddress {
    fn get_type() -> schema::Type {
        schema::Type::Array(32, Box::new(schema::Type::U8))
    }
}

impl Serial for ItemAddress {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        out.write_all(&self.0)
    }
}

impl Deserial for ItemAddress {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let mut bytes = [0u8; 32];
        source.read_exact(&mut bytes)?;
        Ok(ItemAddress(bytes))
    }
}

/// Address of the item with `index` in the collection deployed at `collection`.
pub fn item_address(collection: &ContractAddress, index: u64) -> ItemAddress {
    let mut hasher = Keccak256::default();
    hasher.update(ITEM_ADDRESS_DOMAIN);
    hasher.update(collection.index.to_le_bytes());
    hasher.update(collection.subindex.to_le_bytes());
    hasher.update(index.to_le_bytes());
    ItemAddress(hasher.finalize().into())
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    const COLLECTION: ContractAddress = ContractAddress {
        index: 7,
        subindex: 0,
    };
    const OTHER_COLLECTION: ContractAddress = ContractAddress {
        index: 8,
        subindex: 0,
    };

    #[concordium_test]
    fn test_item_address_is_deterministic() {
        claim_eq!(item_address(&COLLECTION, 0), item_address(&COLLECTION, 0));
        claim_eq!(
            item_address(&COLLECTION, 1_000),
            item_address(&COLLECTION, 1_000)
        );
    }

    #[concordium_test]
    fn test_item_address_depends_on_index() {
        let addresses: Vec<ItemAddress> = (0..64).map(|i| item_address(&COLLECTION, i)).collect();

        for (i, a) in addresses.iter().enumerate() {
            for b in addresses.iter().skip(i + 1) {
                claim_ne!(a, b);
            }
        }
    }

    #[concordium_test]
    fn test_item_address_depends_on_collection() {
        claim_ne!(
            item_address(&COLLECTION, 0),
            item_address(&OTHER_COLLECTION, 0)
        );
        claim_ne!(
            item_address(&COLLECTION, 0),
            item_address(
                &ContractAddress {
                    index: 7,
                    subindex: 1,
                },
                0
            )
        );
    }

    #[concordium_test]
    fn test_item_address_is_not_null() {
        claim_ne!(item_address(&COLLECTION, 0), ItemAddress([0u8; 32]));
    }

    #[concordium_test]
    fn test_item_address_serialization() {
        let address = item_address(&COLLECTION, 3);
        let bytes = to_bytes(&address);

        claim_eq!(bytes.len(), 32);
        claim_eq!(bytes.as_slice(), &address.0[..]);
    }
}
