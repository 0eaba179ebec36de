use super::*;
use core::convert::TryFrom;

/// Opaque metadata descriptor of a collection or an item.
///
/// The first byte is a tag telling how the rest is encoded
/// (`OFFCHAIN_CONTENT_PREFIX` for a URL pointing to the metadata JSON). The
/// contract stores and returns these bytes but never interprets the payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentDescriptor(pub Vec<u8>);

impl ContentDescriptor {
    /// Descriptor pointing to off-chain metadata at `url`.
    pub fn offchain(url: &str) -> Self {
        let mut bytes = Vec::with_capacity(url.len() + 1);
        bytes.push(OFFCHAIN_CONTENT_PREFIX);
        bytes.extend_from_slice(url.as_bytes());
        ContentDescriptor(bytes)
    }

    /// Leading tag byte, `None` for an empty descriptor.
    pub fn tag(&self) -> Option<u8> {
        self.0.first().copied()
    }

    /// Everything after the tag byte.
    pub fn payload(&self) -> &[u8] {
        self.0.get(1..).unwrap_or(&[])
    }

    /// Combines collection level content with the content of one item.
    /// The collection payload is the common prefix, the item payload the
    /// individual suffix.
    ///
    /// Fails with `ContentTooLong` if the result exceeds `MAX_CONTENT_LEN`.
    pub fn merge(
        &self,
        individual: &ContentDescriptor,
    ) -> Result<ContentDescriptor, CustomContractError> {
        let common = self.payload();
        let own = individual.payload();

        let len = 1 + common.len() + own.len();
        ensure!(len <= MAX_CONTENT_LEN, CustomContractError::ContentTooLong);

        let mut bytes = Vec::with_capacity(len);
        bytes.push(OFFCHAIN_CONTENT_PREFIX);
        bytes.extend_from_slice(common);
        bytes.extend_from_slice(own);
        Ok(ContentDescriptor(bytes))
    }
}

impl schema::SchemaType for ContentDescriptor {
    fn get_type() -> schema::Type {
        schema::Type::List(schema::SizeLength::U16, Box::new(schema::Type::U8))
    }
}

impl Serial for ContentDescriptor {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        let len = u16::try_from(self.0.len()).map_err(|_| W::Err::default())?;
        out.write_u16(len)?;
        out.write_all(&self.0)
    }
}

impl Deserial for ContentDescriptor {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let len = source.read_u16()? as usize;
        let mut buffer = Vec::with_capacity(len);
        buffer.resize(len, 0u8);
        source.read_exact(&mut buffer)?;
        Ok(ContentDescriptor(buffer))
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    const COLLECTION_URL: &str = "https://example.org/ipfs/collection/";
    const ITEM_URL: &str = "item-0.json";

    #[concordium_test]
    fn test_offchain_descriptor() {
        let content = ContentDescriptor::offchain(COLLECTION_URL);

        claim_eq!(content.tag(), Some(OFFCHAIN_CONTENT_PREFIX));
        claim_eq!(content.payload(), COLLECTION_URL.as_bytes());
        claim_eq!(content.0.len(), COLLECTION_URL.len() + 1);
    }

    #[concordium_test]
    fn test_empty_descriptor() {
        let content = ContentDescriptor::default();

        claim_eq!(content.tag(), None);
        claim!(content.payload().is_empty());
    }

    #[concordium_test]
    fn test_merge() {
        let collection = ContentDescriptor::offchain(COLLECTION_URL);
        let item = ContentDescriptor::offchain(ITEM_URL);

        let merged = collection.merge(&item).expect_report("Failed to merge");

        claim_eq!(merged.tag(), Some(OFFCHAIN_CONTENT_PREFIX));
        claim_eq!(
            merged.payload(),
            "https://example.org/ipfs/collection/item-0.json".as_bytes()
        );
    }

    #[concordium_test]
    fn test_merge_ignores_item_tag() {
        let collection = ContentDescriptor::offchain(COLLECTION_URL);
        let item = ContentDescriptor(b"\x00raw".to_vec());

        let merged = collection.merge(&item).expect_report("Failed to merge");

        claim_eq!(merged.tag(), Some(OFFCHAIN_CONTENT_PREFIX));
        claim!(merged.payload().ends_with(b"raw"));
    }

    #[concordium_test]
    fn test_merge_too_long() {
        let collection = ContentDescriptor(vec![OFFCHAIN_CONTENT_PREFIX; 40_000]);
        let item = ContentDescriptor(vec![OFFCHAIN_CONTENT_PREFIX; 40_000]);

        // Both fit on their own
        claim!(collection.serial(&mut Vec::new()).is_ok());
        claim!(item.serial(&mut Vec::new()).is_ok());

        claim_eq!(
            collection.merge(&item),
            Err(CustomContractError::ContentTooLong)
        );
    }

    #[concordium_test]
    fn test_merge_max_len() {
        let collection = ContentDescriptor(vec![OFFCHAIN_CONTENT_PREFIX; 30_000]);
        let item = ContentDescriptor(vec![OFFCHAIN_CONTENT_PREFIX; MAX_CONTENT_LEN - 30_000 + 1]);

        let merged = collection.merge(&item).expect_report("Failed to merge");

        claim_eq!(merged.0.len(), MAX_CONTENT_LEN);
        claim!(merged.serial(&mut Vec::new()).is_ok());
        claim_eq!(
            collection.merge(&ContentDescriptor(vec![0u8; MAX_CONTENT_LEN - 30_000 + 2])),
            Err(CustomContractError::ContentTooLong)
        );
    }

    #[concordium_test]
    fn test_serialization() {
        let content = ContentDescriptor::offchain(ITEM_URL);
        let bytes = to_bytes(&content);

        // u16 length prefix followed by the raw descriptor
        claim_eq!(bytes.len(), 2 + ITEM_URL.len() + 1);
        claim_eq!(bytes[0] as usize, ITEM_URL.len() + 1);
        claim_eq!(bytes[1], 0);

        let parsed: ContentDescriptor = from_bytes(&bytes).expect_report("Failed to parse");
        claim_eq!(parsed, content);
    }

    #[concordium_test]
    fn test_oversized_serialization_fails() {
        let content = ContentDescriptor(vec![0u8; u16::MAX as usize + 1]);
        let mut out = Vec::new();

        claim!(content.serial(&mut out).is_err());
    }

    #[concordium_test]
    fn test_truncated_deserialization_fails() {
        let bytes = [10u8, 0, OFFCHAIN_CONTENT_PREFIX, b'a'];

        let parsed: ParseResult<ContentDescriptor> = from_bytes(&bytes);
        claim!(parsed.is_err());
    }
}
