use commons::{ContentDescriptor, ContractEvent, CustomContractError, PROCESSING_OVERHEAD};
use concordium_cis2::{MintEvent, TokenAmountU8, TokenIdU64};
use concordium_std::*;

use crate::address::{item_address, ItemAddress};
use crate::events::CustomEvent;
use crate::external::*;
use crate::state::{Message, Outcome, State};

/// Initialize the collection with no items.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Item price plus processing overhead overflows.
#[init(contract = "NftCollection", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params = InitParams::deserial(&mut ctx.parameter_cursor())?;

    // Construct the initial contract state.
    let state = State::new(state_builder, params)?;

    Ok(state)
}

/// Mint the next item of the collection to the sender.
/// The item gets the current `next_item_index` and the counter advances by
/// one. Logs a CIS-2 `Mint` event. The total mint cost is transferred to the
/// collection owner and anything above it goes back to the invoker.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Whitelist is enabled and the sender is not whitelisted.
/// - Attached amount is below item price plus processing overhead.
/// - No item index is left.
/// - Fails to log `Mint` event.
#[receive(
    mutable,
    payable,
    contract = "NftCollection",
    name = "mint",
    parameter = "MintParams",
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let params = MintParams::deserial(&mut ctx.parameter_cursor())?;

    dispatch(
        ctx,
        host,
        amount,
        logger,
        Message::Mint {
            content: params.content,
        },
    )
}

/// Allow an address to mint while the whitelist is enabled.
/// Succeeds even if the address is already whitelisted.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is not the collection owner.
/// - Fails to log `WhitelistAdded` event.
#[receive(
    mutable,
    contract = "NftCollection",
    name = "addToWhitelist",
    parameter = "WhitelistParams",
    enable_logger
)]
fn add_to_whitelist<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let params = WhitelistParams::deserial(&mut ctx.parameter_cursor())?;

    dispatch(
        ctx,
        host,
        Amount::zero(),
        logger,
        Message::AddToWhitelist { addr: params.addr },
    )
}

/// Remove an address from the whitelist.
/// Succeeds even if the address is not whitelisted.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Sender is not the collection owner.
/// - Fails to log `WhitelistRemoved` event.
#[receive(
    mutable,
    contract = "NftCollection",
    name = "removeFromWhitelist",
    parameter = "WhitelistParams",
    enable_logger
)]
fn remove_from_whitelist<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let params = WhitelistParams::deserial(&mut ctx.parameter_cursor())?;

    dispatch(
        ctx,
        host,
        Amount::zero(),
        logger,
        Message::RemoveFromWhitelist { addr: params.addr },
    )
}

/// Flip the whitelist mode.
///
/// It rejects if:
/// - Sender is not the collection owner.
/// - Fails to log `WhitelistToggled` event.
#[receive(
    mutable,
    contract = "NftCollection",
    name = "toggleWhitelist",
    enable_logger
)]
fn toggle_whitelist<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    dispatch(ctx, host, Amount::zero(), logger, Message::ToggleWhitelist)
}

/// Applies `message` to the state, then logs and settles the outcome.
fn dispatch<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
    message: Message,
) -> ReceiveResult<()> {
    let outcome = host.state_mut().apply(ctx.sender(), amount, message)?;

    match outcome {
        Outcome::Minted {
            index,
            owner,
            payout,
            refund,
        } => {
            // Event for minted NFT.
            logger
                .log(&ContractEvent::Mint(MintEvent {
                    token_id: TokenIdU64(index),
                    amount: TokenAmountU8(1),
                    owner,
                }))
                .map_err(CustomContractError::from)?;

            // Transfer the item price and overhead to the collection owner
            if payout != Amount::zero() {
                host
                    .invoke_transfer(&host.state().owner, payout)
                    .map_err(CustomContractError::from)?;
            }

            // Refund the remaining CCD if necessary
            if refund != Amount::zero() {
                host.invoke_transfer(&ctx.invoker(), refund)
                    .map_err(CustomContractError::from)?;
            }
        }
        Outcome::WhitelistAdded(address) => {
            logger
                .log(&CustomEvent::WhitelistAdded(address))
                .map_err(CustomContractError::from)?;
        }
        Outcome::WhitelistRemoved(address) => {
            logger
                .log(&CustomEvent::WhitelistRemoved(address))
                .map_err(CustomContractError::from)?;
        }
        Outcome::WhitelistToggled(enabled) => {
            logger
                .log(&CustomEvent::WhitelistToggled(enabled))
                .map_err(CustomContractError::from)?;
        }
    }

    Ok(())
}

/// View the item counter, owner and content of the collection.
#[receive(
    contract = "NftCollection",
    name = "getCollectionData",
    return_value = "CollectionData"
)]
fn get_collection_data<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<CollectionData> {
    let state = host.state();

    Ok(CollectionData {
        next_item_index: state.next_item_index,
        owner: state.owner,
        content: state.content.clone(),
    })
}

/// Address of the item with the given index. Works for indices that are not
/// minted yet.
#[receive(
    contract = "NftCollection",
    name = "getNftAddressByIndex",
    parameter = "u64",
    return_value = "ItemAddress"
)]
fn get_nft_address_by_index<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    _host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<ItemAddress> {
    let index: u64 = ctx.parameter_cursor().get()?;

    Ok(item_address(&ctx.self_address(), index))
}

/// Exact amount `mint` requires without a refund.
#[receive(
    contract = "NftCollection",
    name = "getNftMintTotalCost",
    return_value = "Amount"
)]
fn get_nft_mint_total_cost<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Amount> {
    Ok(host.state().mint_cost()?)
}

#[receive(
    contract = "NftCollection",
    name = "getMintConfig",
    return_value = "MintConfig"
)]
fn get_mint_config<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<MintConfig> {
    Ok(MintConfig {
        item_price: host.state().item_price,
        processing_overhead: PROCESSING_OVERHEAD,
    })
}

#[receive(
    contract = "NftCollection",
    name = "isWhitelistEnabled",
    return_value = "bool"
)]
fn is_whitelist_enabled<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<bool> {
    Ok(host.state().whitelist_enabled)
}

#[receive(
    contract = "NftCollection",
    name = "isWhitelisted",
    parameter = "Address",
    return_value = "bool"
)]
fn is_whitelisted<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<bool> {
    let address: Address = ctx.parameter_cursor().get()?;

    Ok(host.state().is_whitelisted(&address))
}

/// Function to view whitelisted addresses page by page.
#[receive(
    contract = "NftCollection",
    name = "viewWhitelist",
    parameter = "WhitelistViewParams",
    return_value = "Vec<Address>"
)]
fn view_whitelist<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Vec<Address>> {
    let params = WhitelistViewParams::deserial(&mut ctx.parameter_cursor())?;

    Ok(host.state().view_whitelist(params.skip, params.show))
}

/// Full content of an item: the collection content merged with the given
/// individual content. The index is not looked up.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Merged content is longer than a content descriptor allows.
#[receive(
    contract = "NftCollection",
    name = "getNftContent",
    parameter = "NftContentParams",
    return_value = "ContentDescriptor"
)]
fn get_nft_content<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<ContentDescriptor> {
    let params = NftContentParams::deserial(&mut ctx.parameter_cursor())?;

    Ok(host.state().content.merge(&params.individual_content)?)
}

/// View a minted item, `None` if the index is not minted yet.
#[receive(
    contract = "NftCollection",
    name = "getNftData",
    parameter = "u64",
    return_value = "Option<NftData>"
)]
fn get_nft_data<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Option<NftData>> {
    let index: u64 = ctx.parameter_cursor().get()?;

    let data = host.state().item(index).map(|item| NftData {
        index,
        address: item_address(&ctx.self_address(), index),
        owner: item.owner,
        content: item.content,
    });

    Ok(data)
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([1; 32]);
    const USER_1: AccountAddress = AccountAddress([16; 32]);
    const USER_2: AccountAddress = AccountAddress([17; 32]);
    const COLLECTION: ContractAddress = ContractAddress {
        index: 42,
        subindex: 0,
    };
    const CONTRACT_1: ContractAddress = ContractAddress {
        index: 16,
        subindex: 0,
    };

    const ITEM_PRICE: Amount = Amount::from_micro_ccd(500_000);
    const COLLECTION_URL: &str = "https://example.org/ipfs/collection.json";
    const ITEM_URL: &str = "https://example.org/ipfs/item.json";

    fn mint_cost() -> Amount {
        Amount::from_micro_ccd(ITEM_PRICE.micro_ccd + PROCESSING_OVERHEAD.micro_ccd)
    }

    fn new_host(whitelist_enabled: bool) -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let params = InitParams {
            owner: OWNER,
            content: ContentDescriptor::offchain(COLLECTION_URL),
            item_price: ITEM_PRICE,
            whitelist_enabled,
        };
        let bytes = to_bytes(&params);
        ctx.set_init_origin(OWNER).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let state =
            init(&ctx, &mut state_builder).expect_report("Failed during init_NftCollection");

        TestHost::new(state, state_builder)
    }

    fn call_mint(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        invoker: AccountAddress,
        amount: Amount,
    ) -> (ReceiveResult<()>, TestLogger) {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MintParams {
            content: ContentDescriptor::offchain(ITEM_URL),
        });
        ctx.set_sender(sender)
            .set_invoker(invoker)
            .set_self_address(COLLECTION)
            .set_parameter(&bytes);
        host.set_self_balance(amount);

        let mut logger = TestLogger::init();
        let result = mint(&ctx, host, amount, &mut logger);

        (result, logger)
    }

    fn call_add_to_whitelist(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        addr: Address,
    ) -> (ReceiveResult<()>, TestLogger) {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&WhitelistParams { addr });
        ctx.set_sender(sender).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let result = add_to_whitelist(&ctx, host, &mut logger);

        (result, logger)
    }

    fn call_remove_from_whitelist(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        addr: Address,
    ) -> (ReceiveResult<()>, TestLogger) {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&WhitelistParams { addr });
        ctx.set_sender(sender).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let result = remove_from_whitelist(&ctx, host, &mut logger);

        (result, logger)
    }

    fn call_toggle_whitelist(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
    ) -> (ReceiveResult<()>, TestLogger) {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender);

        let mut logger = TestLogger::init();
        let result = toggle_whitelist(&ctx, host, &mut logger);

        (result, logger)
    }

    fn collection_data(host: &TestHost<State<TestStateApi>>) -> CollectionData {
        let ctx = TestReceiveContext::empty();
        get_collection_data(&ctx, host).expect_report("Failed to call getCollectionData")
    }

    fn nft_address(host: &TestHost<State<TestStateApi>>, index: u64) -> ItemAddress {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&index);
        ctx.set_self_address(COLLECTION).set_parameter(&bytes);
        get_nft_address_by_index(&ctx, host).expect_report("Failed to call getNftAddressByIndex")
    }

    fn whitelisted(host: &TestHost<State<TestStateApi>>, address: Address) -> bool {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&address);
        ctx.set_parameter(&bytes);
        is_whitelisted(&ctx, host).expect_report("Failed to call isWhitelisted")
    }

    fn whitelist_enabled(host: &TestHost<State<TestStateApi>>) -> bool {
        let ctx = TestReceiveContext::empty();
        is_whitelist_enabled(&ctx, host).expect_report("Failed to call isWhitelistEnabled")
    }

    #[concordium_test]
    fn test_init() {
        let host = new_host(true);

        claim_eq!(
            collection_data(&host),
            CollectionData {
                next_item_index: 0,
                owner: OWNER,
                content: ContentDescriptor::offchain(COLLECTION_URL),
            }
        );
        claim!(whitelist_enabled(&host));
    }

    #[concordium_test]
    fn test_init_invalid_price() {
        let mut ctx = TestInitContext::empty();
        let params = InitParams {
            owner: OWNER,
            content: ContentDescriptor::offchain(COLLECTION_URL),
            item_price: Amount::from_micro_ccd(u64::MAX),
            whitelist_enabled: false,
        };
        let bytes = to_bytes(&params);
        ctx.set_init_origin(OWNER).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let result = init(&ctx, &mut state_builder);

        claim_eq!(
            result.err(),
            Some(CustomContractError::InvalidPrice.into())
        );
    }

    #[concordium_test]
    fn test_mint_total_cost() {
        let host = new_host(false);
        let ctx = TestReceiveContext::empty();

        let cost = get_nft_mint_total_cost(&ctx, &host)
            .expect_report("Failed to call getNftMintTotalCost");
        claim_eq!(cost, mint_cost());

        let config = get_mint_config(&ctx, &host).expect_report("Failed to call getMintConfig");
        claim_eq!(
            config,
            MintConfig {
                item_price: ITEM_PRICE,
                processing_overhead: PROCESSING_OVERHEAD,
            }
        );
    }

    #[concordium_test]
    fn test_mint_exact_cost() {
        let mut host = new_host(false);

        let (result, logger) = call_mint(&mut host, Address::Account(USER_1), USER_1, mint_cost());

        claim_eq!(result, Ok(()));
        claim_eq!(collection_data(&host).next_item_index, 1);
        // Whole payment goes to the owner, nothing is refunded or kept
        claim!(host.transfer_occurred(&OWNER, mint_cost()));
        claim_eq!(host.self_balance(), Amount::zero());
        claim_eq!(
            logger.logs,
            vec![to_bytes(&ContractEvent::Mint(MintEvent {
                token_id: TokenIdU64(0),
                amount: TokenAmountU8(1),
                owner: Address::Account(USER_1),
            }))]
        );
    }

    #[concordium_test]
    fn test_mint_refunds_excess_to_invoker() {
        let mut host = new_host(false);
        let excess = Amount::from_micro_ccd(50_000);
        let amount = Amount::from_micro_ccd(mint_cost().micro_ccd + excess.micro_ccd);

        let (result, _) = call_mint(&mut host, Address::Contract(CONTRACT_1), USER_2, amount);

        claim_eq!(result, Ok(()));
        claim!(host.transfer_occurred(&OWNER, mint_cost()));
        claim!(host.transfer_occurred(&USER_2, excess));
        claim_eq!(host.self_balance(), Amount::zero());
    }

    #[concordium_test]
    fn test_mint_insufficient_payment() {
        let mut host = new_host(false);
        let amount = Amount::from_micro_ccd(mint_cost().micro_ccd - 1);

        let (result, logger) = call_mint(&mut host, Address::Account(USER_1), USER_1, amount);

        claim_eq!(
            result,
            Err(CustomContractError::InsufficientPayment.into())
        );
        claim_eq!(collection_data(&host).next_item_index, 0);
        claim!(logger.logs.is_empty());
        claim!(!host.transfer_occurred(&OWNER, mint_cost()));
        claim_eq!(host.self_balance(), amount);
    }

    #[concordium_test]
    fn test_sequential_mints() {
        let mut host = new_host(false);

        for expected in 0..10u64 {
            let before = collection_data(&host).next_item_index;
            claim_eq!(before, expected);

            let (result, logger) =
                call_mint(&mut host, Address::Account(USER_1), USER_1, mint_cost());
            claim_eq!(result, Ok(()));
            claim_eq!(
                logger.logs,
                vec![to_bytes(&ContractEvent::Mint(MintEvent {
                    token_id: TokenIdU64(expected),
                    amount: TokenAmountU8(1),
                    owner: Address::Account(USER_1),
                }))]
            );

            let after = collection_data(&host).next_item_index;
            claim_eq!(after, before + 1);
        }
    }

    #[concordium_test]
    fn test_nft_address_stable_across_mint() {
        let mut host = new_host(false);

        let before = nft_address(&host, 0);
        let (result, _) = call_mint(&mut host, Address::Account(USER_1), USER_1, mint_cost());
        claim_eq!(result, Ok(()));
        let after = nft_address(&host, 0);

        claim_eq!(before, after);
        claim_eq!(before, item_address(&COLLECTION, 0));
        claim_ne!(nft_address(&host, 0), nft_address(&host, 1));
    }

    #[concordium_test]
    fn test_whitelist_scenario() {
        let mut host = new_host(true);
        let one_ccd = Amount::from_micro_ccd(1_000_000);
        let refund = Amount::from_micro_ccd(one_ccd.micro_ccd - mint_cost().micro_ccd);

        // Not whitelisted yet
        let (result, _) = call_mint(&mut host, Address::Account(USER_1), USER_1, one_ccd);
        claim_eq!(result, Err(CustomContractError::NotWhitelisted.into()));
        claim_eq!(collection_data(&host).next_item_index, 0);
        claim!(!host.transfer_occurred(&USER_1, refund));

        let (result, logger) =
            call_add_to_whitelist(&mut host, Address::Account(OWNER), Address::Account(USER_1));
        claim_eq!(result, Ok(()));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&CustomEvent::WhitelistAdded(Address::Account(
                USER_1
            )))]
        );
        claim!(whitelisted(&host, Address::Account(USER_1)));

        let (result, _) = call_mint(&mut host, Address::Account(USER_1), USER_1, one_ccd);
        claim_eq!(result, Ok(()));
        claim_eq!(collection_data(&host).next_item_index, 1);
        claim!(host.transfer_occurred(&OWNER, mint_cost()));
        claim!(host.transfer_occurred(&USER_1, refund));
        claim_eq!(host.self_balance(), Amount::zero());
        claim_ne!(nft_address(&host, 0), ItemAddress([0u8; 32]));
    }

    #[concordium_test]
    fn test_add_remove_whitelist() {
        let mut host = new_host(true);
        let owner = Address::Account(OWNER);
        let user = Address::Account(USER_1);

        for _ in 0..2 {
            let (result, _) = call_add_to_whitelist(&mut host, owner, user);
            claim_eq!(result, Ok(()));
            claim!(whitelisted(&host, user));
        }

        for _ in 0..2 {
            let (result, logger) = call_remove_from_whitelist(&mut host, owner, user);
            claim_eq!(result, Ok(()));
            claim_eq!(
                logger.logs,
                vec![to_bytes(&CustomEvent::WhitelistRemoved(user))]
            );
            claim!(!whitelisted(&host, user));
        }

        let (result, _) = call_mint(&mut host, user, USER_1, mint_cost());
        claim_eq!(result, Err(CustomContractError::NotWhitelisted.into()));
    }

    #[concordium_test]
    fn test_toggle_whitelist() {
        let mut host = new_host(true);
        let owner = Address::Account(OWNER);

        let (result, logger) = call_toggle_whitelist(&mut host, owner);
        claim_eq!(result, Ok(()));
        claim!(!whitelist_enabled(&host));
        claim_eq!(
            logger.logs,
            vec![to_bytes(&CustomEvent::WhitelistToggled(false))]
        );

        // Anyone can mint now
        let (result, _) = call_mint(&mut host, Address::Account(USER_2), USER_2, mint_cost());
        claim_eq!(result, Ok(()));

        let (result, _) = call_toggle_whitelist(&mut host, owner);
        claim_eq!(result, Ok(()));
        claim!(whitelist_enabled(&host));
    }

    #[concordium_test]
    fn test_admin_unauthorized() {
        let mut host = new_host(true);
        let user = Address::Account(USER_1);
        let contract = Address::Contract(CONTRACT_1);

        for sender in [user, contract].iter() {
            let (result, logger) = call_add_to_whitelist(&mut host, *sender, *sender);
            claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
            claim!(logger.logs.is_empty());
            claim!(!whitelisted(&host, *sender));

            let (result, _) = call_toggle_whitelist(&mut host, *sender);
            claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
            claim!(whitelist_enabled(&host));
        }

        let (result, _) = call_add_to_whitelist(&mut host, Address::Account(OWNER), user);
        claim_eq!(result, Ok(()));

        let (result, _) = call_remove_from_whitelist(&mut host, contract, user);
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
        claim!(whitelisted(&host, user));
    }

    #[concordium_test]
    fn test_get_nft_content() {
        let host = new_host(false);
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&NftContentParams {
            index: 5,
            individual_content: ContentDescriptor::offchain("items/5.json"),
        });
        ctx.set_parameter(&bytes);

        let content = get_nft_content(&ctx, &host).expect_report("Failed to call getNftContent");

        claim_eq!(
            content,
            ContentDescriptor::offchain("https://example.org/ipfs/collection.jsonitems/5.json")
        );
    }

    #[concordium_test]
    fn test_get_nft_content_too_long() {
        let mut ctx = TestInitContext::empty();
        let params = InitParams {
            owner: OWNER,
            content: ContentDescriptor(vec![1u8; 40_000]),
            item_price: ITEM_PRICE,
            whitelist_enabled: false,
        };
        let bytes = to_bytes(&params);
        ctx.set_init_origin(OWNER).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();
        let state =
            init(&ctx, &mut state_builder).expect_report("Failed during init_NftCollection");
        let host = TestHost::new(state, state_builder);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&NftContentParams {
            index: 0,
            individual_content: ContentDescriptor(vec![1u8; 40_000]),
        });
        ctx.set_parameter(&bytes);

        let result = get_nft_content(&ctx, &host);

        claim_eq!(result, Err(CustomContractError::ContentTooLong.into()));
    }

    #[concordium_test]
    fn test_get_nft_data() {
        let mut host = new_host(false);

        let (result, _) = call_mint(&mut host, Address::Account(USER_1), USER_1, mint_cost());
        claim_eq!(result, Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&0u64);
        ctx.set_self_address(COLLECTION).set_parameter(&bytes);
        let data = get_nft_data(&ctx, &host).expect_report("Failed to call getNftData");
        claim_eq!(
            data,
            Some(NftData {
                index: 0,
                address: item_address(&COLLECTION, 0),
                owner: Address::Account(USER_1),
                content: ContentDescriptor::offchain(ITEM_URL),
            })
        );

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&1u64);
        ctx.set_self_address(COLLECTION).set_parameter(&bytes);
        let data = get_nft_data(&ctx, &host).expect_report("Failed to call getNftData");
        claim_eq!(data, None);
    }

    #[concordium_test]
    fn test_view_whitelist() {
        let mut host = new_host(true);
        let owner = Address::Account(OWNER);

        for addr in [Address::Account(USER_1), Address::Account(USER_2)].iter() {
            let (result, _) = call_add_to_whitelist(&mut host, owner, *addr);
            claim_eq!(result, Ok(()));
        }

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&WhitelistViewParams { skip: 0, show: 10 });
        ctx.set_parameter(&bytes);
        let addresses = view_whitelist(&ctx, &host).expect_report("Failed to call viewWhitelist");
        claim_eq!(addresses.len(), 2);
        claim!(addresses.contains(&Address::Account(USER_1)));
        claim!(addresses.contains(&Address::Account(USER_2)));

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&WhitelistViewParams { skip: 1, show: 10 });
        ctx.set_parameter(&bytes);
        let addresses = view_whitelist(&ctx, &host).expect_report("Failed to call viewWhitelist");
        claim_eq!(addresses.len(), 1);
    }
}
