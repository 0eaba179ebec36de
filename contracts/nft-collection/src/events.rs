use commons::{WHITELIST_ADD_TAG, WHITELIST_REMOVE_TAG, WHITELIST_TOGGLE_TAG};
use concordium_std::*;

/// Tagged Custom event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum CustomEvent {
    /// Address allowed to mint while the whitelist is enabled
    WhitelistAdded(Address),
    /// Address no longer allowed to mint while the whitelist is enabled
    WhitelistRemoved(Address),
    /// New whitelist mode
    WhitelistToggled(bool),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::WhitelistAdded(address) => {
                out.write_u8(WHITELIST_ADD_TAG)?;
                address.serial(out)
            }
            CustomEvent::WhitelistRemoved(address) => {
                out.write_u8(WHITELIST_REMOVE_TAG)?;
                address.serial(out)
            }
            CustomEvent::WhitelistToggled(enabled) => {
                out.write_u8(WHITELIST_TOGGLE_TAG)?;
                enabled.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            WHITELIST_ADD_TAG => Address::deserial(source).map(CustomEvent::WhitelistAdded),
            WHITELIST_REMOVE_TAG => Address::deserial(source).map(CustomEvent::WhitelistRemoved),
            WHITELIST_TOGGLE_TAG => bool::deserial(source).map(CustomEvent::WhitelistToggled),
            _ => Err(ParseError::default()),
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_event_tags() {
        let address = Address::Account(AccountAddress([3; 32]));

        claim_eq!(
            to_bytes(&CustomEvent::WhitelistAdded(address))[0],
            WHITELIST_ADD_TAG
        );
        claim_eq!(
            to_bytes(&CustomEvent::WhitelistRemoved(address))[0],
            WHITELIST_REMOVE_TAG
        );
        claim_eq!(
            to_bytes(&CustomEvent::WhitelistToggled(true)),
            vec![WHITELIST_TOGGLE_TAG, 1]
        );
    }

    #[concordium_test]
    fn test_unknown_tag() {
        let parsed: ParseResult<CustomEvent> = from_bytes(&[0u8, 1]);

        claim!(parsed.is_err());
    }
}
