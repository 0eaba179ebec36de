use commons::{ContentDescriptor, CustomContractError, PROCESSING_OVERHEAD};
use concordium_std::*;

use crate::external::InitParams;

/// A minted item. Created once and never changed afterwards.
#[derive(Debug, Clone, Serialize, SchemaType, PartialEq, Eq)]
pub struct Item {
    /// Address that minted the item.
    pub owner: Address,
    /// Item level metadata supplied at mint time.
    pub content: ContentDescriptor,
}

/// Every message that can change the collection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Mint { content: ContentDescriptor },
    AddToWhitelist { addr: Address },
    RemoveFromWhitelist { addr: Address },
    ToggleWhitelist,
}

/// Effect of a message that was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Minted {
        index: u64,
        owner: Address,
        /// Total mint cost owed to the collection owner.
        payout: Amount,
        /// Excess over the total mint cost owed back to the payer.
        refund: Amount,
    },
    WhitelistAdded(Address),
    WhitelistRemoved(Address),
    WhitelistToggled(bool),
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Account allowed to administer the collection.
    pub owner: AccountAddress,
    /// Collection level metadata.
    pub content: ContentDescriptor,
    /// Price of a single item, without the processing overhead.
    pub item_price: Amount,
    /// Index the next minted item gets.
    pub next_item_index: u64,
    /// Whether minting is restricted to the whitelist.
    pub whitelist_enabled: bool,
    /// Addresses allowed to mint while the whitelist is enabled.
    pub whitelist: StateSet<Address, S>,
    /// Minted items by index.
    pub items: StateMap<u64, Item, S>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new collection with no items.
    ///
    /// Fails if the total mint cost overflows, so `mint_cost` cannot fail later.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        params: InitParams,
    ) -> Result<Self, CustomContractError> {
        total_cost(params.item_price).ok_or(CustomContractError::InvalidPrice)?;

        Ok(Self {
            owner: params.owner,
            content: params.content,
            item_price: params.item_price,
            next_item_index: 0,
            whitelist_enabled: params.whitelist_enabled,
            whitelist: state_builder.new_set(),
            items: state_builder.new_map(),
        })
    }

    /// Amount `Mint` requires without any refund.
    pub fn mint_cost(&self) -> Result<Amount, CustomContractError> {
        total_cost(self.item_price).ok_or(CustomContractError::InvalidPrice)
    }

    pub fn is_owner(&self, address: &Address) -> bool {
        address.matches_account(&self.owner)
    }

    pub fn is_whitelisted(&self, address: &Address) -> bool {
        self.whitelist.contains(address)
    }

    /// Whether `address` may mint right now.
    pub fn can_mint(&self, address: &Address) -> bool {
        !self.whitelist_enabled || self.is_whitelisted(address)
    }

    pub fn item(&self, index: u64) -> Option<Item> {
        self.items.get(&index).map(|item| Item::clone(&item))
    }

    /// Whitelisted addresses, skipping the first `skip` and returning at most `show`.
    pub fn view_whitelist(&self, skip: u32, show: u32) -> Vec<Address> {
        self.whitelist
            .iter()
            .skip(skip as usize)
            .take(show as usize)
            .map(|a| *a)
            .collect()
    }

    /// Applies a single message sent by `sender` with `amount` attached.
    ///
    /// Every check happens before the first write, so a rejected message leaves
    /// the state exactly as it was.
    pub fn apply(
        &mut self,
        sender: Address,
        amount: Amount,
        message: Message,
    ) -> Result<Outcome, CustomContractError> {
        match message {
            Message::Mint { content } => self.mint(sender, amount, content),
            Message::AddToWhitelist { addr } => {
                ensure!(self.is_owner(&sender), CustomContractError::Unauthorized);
                self.whitelist.insert(addr);
                Ok(Outcome::WhitelistAdded(addr))
            }
            Message::RemoveFromWhitelist { addr } => {
                ensure!(self.is_owner(&sender), CustomContractError::Unauthorized);
                self.whitelist.remove(&addr);
                Ok(Outcome::WhitelistRemoved(addr))
            }
            Message::ToggleWhitelist => {
                ensure!(self.is_owner(&sender), CustomContractError::Unauthorized);
                self.whitelist_enabled = !self.whitelist_enabled;
                Ok(Outcome::WhitelistToggled(self.whitelist_enabled))
            }
        }
    }

    fn mint(
        &mut self,
        sender: Address,
        amount: Amount,
        content: ContentDescriptor,
    ) -> Result<Outcome, CustomContractError> {
        ensure!(self.can_mint(&sender), CustomContractError::NotWhitelisted);

        let cost = self.mint_cost()?;
        let refund = amount
            .micro_ccd
            .checked_sub(cost.micro_ccd)
            .map(Amount::from_micro_ccd)
            .ok_or(CustomContractError::InsufficientPayment)?;

        let index = self.next_item_index;
        let next_item_index = index
            .checked_add(1)
            .ok_or(CustomContractError::IndexExhausted)?;

        self.items.insert(
            index,
            Item {
                owner: sender,
                content,
            },
        );
        self.next_item_index = next_item_index;

        Ok(Outcome::Minted {
            index,
            owner: sender,
            payout: cost,
            refund,
        })
    }
}

fn total_cost(item_price: Amount) -> Option<Amount> {
    item_price
        .micro_ccd
        .checked_add(PROCESSING_OVERHEAD.micro_ccd)
        .map(Amount::from_micro_ccd)
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([1; 32]);
    const USER_1: AccountAddress = AccountAddress([16; 32]);
    const USER_2: AccountAddress = AccountAddress([17; 32]);
    const CONTRACT_1: ContractAddress = ContractAddress {
        index: 16,
        subindex: 0,
    };

    const ITEM_PRICE: Amount = Amount::from_micro_ccd(500_000);

    fn item_content() -> ContentDescriptor {
        ContentDescriptor::offchain("https://example.org/item.json")
    }

    fn new_state(whitelist_enabled: bool) -> State<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        State::new(
            &mut state_builder,
            InitParams {
                owner: OWNER,
                content: ContentDescriptor::offchain("https://example.org/collection.json"),
                item_price: ITEM_PRICE,
                whitelist_enabled,
            },
        )
        .expect_report("Failed to create state")
    }

    fn mint_cost() -> Amount {
        Amount::from_micro_ccd(ITEM_PRICE.micro_ccd + PROCESSING_OVERHEAD.micro_ccd)
    }

    fn mint_message() -> Message {
        Message::Mint {
            content: item_content(),
        }
    }

    #[concordium_test]
    fn test_new_state() {
        let state = new_state(true);

        claim_eq!(state.owner, OWNER);
        claim_eq!(state.next_item_index, 0);
        claim_eq!(state.item_price, ITEM_PRICE);
        claim!(state.whitelist_enabled);
        claim!(state.view_whitelist(0, 10).is_empty());
        claim_eq!(state.item(0), None);
    }

    #[concordium_test]
    fn test_new_state_rejects_overflowing_price() {
        let mut state_builder = TestStateBuilder::new();
        let result = State::new(
            &mut state_builder,
            InitParams {
                owner: OWNER,
                content: ContentDescriptor::default(),
                item_price: Amount::from_micro_ccd(u64::MAX),
                whitelist_enabled: false,
            },
        );

        claim_eq!(result.err(), Some(CustomContractError::InvalidPrice));
    }

    #[concordium_test]
    fn test_mint_cost() {
        let state = new_state(false);

        claim_eq!(state.mint_cost(), Ok(mint_cost()));
    }

    #[concordium_test]
    fn test_sequential_indices() {
        let mut state = new_state(false);

        for expected in 0..20u64 {
            let outcome = state.apply(Address::Account(USER_1), mint_cost(), mint_message());

            claim_eq!(
                outcome,
                Ok(Outcome::Minted {
                    index: expected,
                    owner: Address::Account(USER_1),
                    payout: mint_cost(),
                    refund: Amount::zero(),
                })
            );
            claim_eq!(state.next_item_index, expected + 1);
        }

        for index in 0..20u64 {
            claim!(state.item(index).is_some());
        }
        claim_eq!(state.item(20), None);
    }

    #[concordium_test]
    fn test_mint_stores_item() {
        let mut state = new_state(false);

        let outcome = state.apply(Address::Contract(CONTRACT_1), mint_cost(), mint_message());

        claim!(outcome.is_ok());
        claim_eq!(
            state.item(0),
            Some(Item {
                owner: Address::Contract(CONTRACT_1),
                content: item_content(),
            })
        );
    }

    #[concordium_test]
    fn test_mint_refunds_excess() {
        let mut state = new_state(false);
        let excess = Amount::from_micro_ccd(50_000);
        let amount = Amount::from_micro_ccd(mint_cost().micro_ccd + excess.micro_ccd);

        let outcome = state.apply(Address::Account(USER_1), amount, mint_message());

        claim_eq!(
            outcome,
            Ok(Outcome::Minted {
                index: 0,
                owner: Address::Account(USER_1),
                payout: mint_cost(),
                refund: excess,
            })
        );
    }

    #[concordium_test]
    fn test_mint_insufficient_payment() {
        let mut state = new_state(false);
        let amount = Amount::from_micro_ccd(mint_cost().micro_ccd - 1);

        let outcome = state.apply(Address::Account(USER_1), amount, mint_message());

        claim_eq!(outcome, Err(CustomContractError::InsufficientPayment));
        claim_eq!(state.next_item_index, 0);
        claim_eq!(state.item(0), None);

        // The price alone does not cover the overhead
        let outcome = state.apply(Address::Account(USER_1), ITEM_PRICE, mint_message());
        claim_eq!(outcome, Err(CustomContractError::InsufficientPayment));
        claim_eq!(state.next_item_index, 0);
    }

    #[concordium_test]
    fn test_mint_not_whitelisted() {
        let mut state = new_state(true);

        let outcome = state.apply(Address::Account(USER_1), mint_cost(), mint_message());

        claim_eq!(outcome, Err(CustomContractError::NotWhitelisted));
        claim_eq!(state.next_item_index, 0);
        claim_eq!(state.item(0), None);
    }

    #[concordium_test]
    fn test_whitelist_checked_before_payment() {
        let mut state = new_state(true);

        let outcome = state.apply(Address::Account(USER_1), Amount::zero(), mint_message());

        claim_eq!(outcome, Err(CustomContractError::NotWhitelisted));
    }

    #[concordium_test]
    fn test_mint_index_exhausted() {
        let mut state = new_state(false);
        state.next_item_index = u64::MAX;

        let outcome = state.apply(Address::Account(USER_1), mint_cost(), mint_message());

        claim_eq!(outcome, Err(CustomContractError::IndexExhausted));
        claim_eq!(state.next_item_index, u64::MAX);
        claim_eq!(state.item(u64::MAX), None);
    }

    #[concordium_test]
    fn test_whitelist_admission() {
        let mut state = new_state(true);
        let user = Address::Account(USER_1);

        claim!(!state.can_mint(&user));

        let outcome = state.apply(
            Address::Account(OWNER),
            Amount::zero(),
            Message::AddToWhitelist { addr: user },
        );
        claim_eq!(outcome, Ok(Outcome::WhitelistAdded(user)));
        claim!(state.can_mint(&user));
        claim!(!state.can_mint(&Address::Account(USER_2)));

        let outcome = state.apply(user, mint_cost(), mint_message());
        claim!(outcome.is_ok());
        claim_eq!(state.next_item_index, 1);
    }

    #[concordium_test]
    fn test_whitelist_add_remove_idempotent() {
        let mut state = new_state(true);
        let owner = Address::Account(OWNER);
        let user = Address::Account(USER_1);

        for _ in 0..2 {
            let outcome = state.apply(
                owner,
                Amount::zero(),
                Message::AddToWhitelist { addr: user },
            );
            claim_eq!(outcome, Ok(Outcome::WhitelistAdded(user)));
            claim!(state.is_whitelisted(&user));
            claim_eq!(state.view_whitelist(0, 10), vec![user]);
        }

        for _ in 0..2 {
            let outcome = state.apply(
                owner,
                Amount::zero(),
                Message::RemoveFromWhitelist { addr: user },
            );
            claim_eq!(outcome, Ok(Outcome::WhitelistRemoved(user)));
            claim!(!state.is_whitelisted(&user));
            claim!(state.view_whitelist(0, 10).is_empty());
        }
    }

    #[concordium_test]
    fn test_toggle_twice_restores_mode() {
        for initial in [true, false] {
            let mut state = new_state(initial);
            let owner = Address::Account(OWNER);

            let outcome = state.apply(owner, Amount::zero(), Message::ToggleWhitelist);
            claim_eq!(outcome, Ok(Outcome::WhitelistToggled(!initial)));
            claim_eq!(state.whitelist_enabled, !initial);

            let outcome = state.apply(owner, Amount::zero(), Message::ToggleWhitelist);
            claim_eq!(outcome, Ok(Outcome::WhitelistToggled(initial)));
            claim_eq!(state.whitelist_enabled, initial);
        }
    }

    #[concordium_test]
    fn test_admin_messages_unauthorized() {
        let mut state = new_state(true);
        let intruders = [
            Address::Account(USER_1),
            Address::Contract(ContractAddress {
                index: 1,
                subindex: 0,
            }),
        ];

        for intruder in intruders.iter() {
            let outcome = state.apply(
                *intruder,
                Amount::zero(),
                Message::AddToWhitelist { addr: *intruder },
            );
            claim_eq!(outcome, Err(CustomContractError::Unauthorized));
            claim!(!state.is_whitelisted(intruder));

            let outcome = state.apply(*intruder, Amount::zero(), Message::ToggleWhitelist);
            claim_eq!(outcome, Err(CustomContractError::Unauthorized));
            claim!(state.whitelist_enabled);
        }

        state
            .apply(
                Address::Account(OWNER),
                Amount::zero(),
                Message::AddToWhitelist {
                    addr: Address::Account(USER_2),
                },
            )
            .expect_report("Owner failed to whitelist");

        let outcome = state.apply(
            Address::Account(USER_1),
            Amount::zero(),
            Message::RemoveFromWhitelist {
                addr: Address::Account(USER_2),
            },
        );
        claim_eq!(outcome, Err(CustomContractError::Unauthorized));
        claim!(state.is_whitelisted(&Address::Account(USER_2)));
    }

    #[concordium_test]
    fn test_whitelist_does_not_touch_minted_items() {
        let mut state = new_state(false);
        let owner = Address::Account(OWNER);
        let user = Address::Account(USER_1);

        state
            .apply(user, mint_cost(), mint_message())
            .expect_report("Mint failed");

        state
            .apply(owner, Amount::zero(), Message::ToggleWhitelist)
            .expect_report("Toggle failed");
        state
            .apply(owner, Amount::zero(), Message::RemoveFromWhitelist { addr: user })
            .expect_report("Remove failed");

        claim_eq!(state.next_item_index, 1);
        claim_eq!(
            state.item(0),
            Some(Item {
                owner: user,
                content: item_content(),
            })
        );
    }

    #[concordium_test]
    fn test_view_whitelist_pagination() {
        let mut state = new_state(true);
        let owner = Address::Account(OWNER);

        let mut expected: Vec<Address> = (16u8..48u8)
            .map(|n| Address::Account(AccountAddress([n; 32])))
            .collect();
        for addr in expected.iter() {
            state
                .apply(owner, Amount::zero(), Message::AddToWhitelist { addr: *addr })
                .expect_report("Owner failed to whitelist");
        }

        let mut seen = Vec::new();
        let show = 10;
        loop {
            let page = state.view_whitelist(seen.len() as u32, show);
            let last = page.len() != show as usize;
            seen.extend(page);
            if last {
                break;
            }
        }

        seen.sort();
        expected.sort();
        claim_eq!(seen, expected);
    }
}
