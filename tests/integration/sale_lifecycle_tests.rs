// End-to-end sale lifecycle: configuration, both sale windows, settlement,
// secondary transfers and withdrawal, driven through the contract client.

#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, Env, String,
};
use timed_sale_nft::{
    CollectionConfig, Error, SalePhase, TimedSaleNFTContract, TimedSaleNFTContractClient,
};

const START: u64 = 1_700_000_000;
const HOUR: u64 = 3_600;
const DAY: u64 = 86_400;
const PRICE: i128 = 1_000_000;

struct SaleTestFixture {
    env: Env,
    owner: Address,
    contract_id: Address,
    client: TimedSaleNFTContractClient<'static>,
    token: token::Client<'static>,
    token_admin: token::StellarAssetClient<'static>,
}

impl SaleTestFixture {
    fn setup(max_supply: u32) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|l| l.timestamp = START);

        let owner = Address::generate(&env);
        let token_address = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();

        let contract_id = env.register_contract(None, TimedSaleNFTContract);
        let client = TimedSaleNFTContractClient::new(&env, &contract_id);

        let config = CollectionConfig {
            name: String::from_str(&env, "Lifecycle"),
            symbol: String::from_str(&env, "LIFE"),
            base_uri: String::from_str(&env, "ipfs://lifecycle/"),
            contract_uri: String::from_str(&env, "ipfs://lifecycle/contract.json"),
            max_supply,
            max_mint_per_tx: 5,
            allowlist_mint_limit: 3,
            mint_price: PRICE,
            allowlist_sale_start: START + HOUR,
            public_sale_start: START + DAY,
            payment_token: token_address.clone(),
            royalty_receiver: owner.clone(),
            royalty_fee: 750,
        };
        client.initialize(&owner, &config);

        SaleTestFixture {
            token: token::Client::new(&env, &token_address),
            token_admin: token::StellarAssetClient::new(&env, &token_address),
            env,
            owner,
            contract_id,
            client,
        }
    }

    fn buyer(&self, funds: i128) -> Address {
        let buyer = Address::generate(&self.env);
        self.token_admin.mint(&buyer, &funds);
        buyer
    }

    fn warp(&self, timestamp: u64) {
        self.env.ledger().with_mut(|l| l.timestamp = timestamp);
    }
}

#[test]
fn test_reference_sale_scenario() {
    let f = SaleTestFixture::setup(1000);
    let user = f.buyer(10 * PRICE);

    assert_eq!(f.client.total_minted(), 0);
    assert_eq!(f.client.sale_phase(), SalePhase::NotStarted);

    f.warp(START + HOUR);
    assert_eq!(f.client.sale_phase(), SalePhase::Allowlist);
    f.client
        .update_allowlist(&f.owner, &vec![&f.env, user.clone()], &vec![&f.env, true]);
    let first_id = f.client.mint_allowlist(&user, &2, &(2 * PRICE));
    assert_eq!(first_id, 1);
    assert_eq!(f.client.owner_of(&1), user);
    assert_eq!(f.client.owner_of(&2), user);

    f.warp(START + DAY);
    let anyone = f.buyer(10 * PRICE);
    let result = f.client.try_mint_public(&anyone, &6, &(6 * PRICE));
    assert_eq!(result, Err(Ok(Error::ExceedsPerTxLimit)));
    assert_eq!(f.client.total_minted(), 2);
}

#[test]
fn test_full_sale_lifecycle() {
    let f = SaleTestFixture::setup(8);
    let early = f.buyer(10 * PRICE);
    let late = f.buyer(10 * PRICE);
    let collector = Address::generate(&f.env);

    // Reserve for the team before the sale opens
    f.client.admin_mint(&f.owner, &f.owner, &2);

    f.warp(START + HOUR);
    f.client
        .update_allowlist(&f.owner, &vec![&f.env, early.clone()], &vec![&f.env, true]);
    assert_eq!(f.client.mint_allowlist(&early, &3, &(3 * PRICE)), 3);
    assert_eq!(
        f.client.try_mint_allowlist(&late, &1, &PRICE),
        Err(Ok(Error::NotOnAllowlist))
    );

    f.warp(START + DAY);
    // Overpays for 2 and is refunded the difference
    assert_eq!(f.client.mint_public(&late, &2, &(5 * PRICE)), 6);
    assert_eq!(f.token.balance(&late), 8 * PRICE);

    // Only one unit left
    assert_eq!(
        f.client.try_mint_public(&late, &2, &(2 * PRICE)),
        Err(Ok(Error::ExceedsMaxSupply))
    );
    assert_eq!(f.client.mint_public(&early, &1, &PRICE), 8);
    assert_eq!(
        f.client.try_admin_mint(&f.owner, &f.owner, &1),
        Err(Ok(Error::ExceedsMaxSupply))
    );

    // Secondary market activity
    f.client.set_approval_for_all(&early, &collector, &true);
    f.client.transfer_from(&collector, &early, &collector, &4);
    f.client.burn(&late, &7);
    assert_eq!(f.client.tokens_of_owner(&early), vec![&f.env, 3u32, 8u32, 5u32]);
    assert_eq!(f.client.tokens_of_owner(&collector), vec![&f.env, 4u32]);
    assert_eq!(f.client.total_supply(), 7);
    assert_eq!(f.client.total_minted(), 8);

    let (receiver, royalty) = f.client.royalty_info(&4, &(100 * PRICE));
    assert_eq!(receiver, f.owner);
    assert_eq!(royalty, 750 * PRICE / 100);

    // Proceeds: 3 allowlist + 2 public + 1 public
    assert_eq!(f.client.balance(), 6 * PRICE);
    assert_eq!(f.client.withdraw(&f.owner), 6 * PRICE);
    assert_eq!(f.token.balance(&f.owner), 6 * PRICE);
    assert_eq!(f.token.balance(&f.contract_id), 0);
}

#[test]
fn test_paused_sale_resumes_without_losing_state() {
    let f = SaleTestFixture::setup(100);
    let user = f.buyer(10 * PRICE);

    f.warp(START + DAY);
    f.client.mint_public(&user, &2, &(2 * PRICE));
    f.client.pause(&f.owner);

    assert_eq!(
        f.client.try_mint_public(&user, &1, &PRICE),
        Err(Ok(Error::ContractPaused))
    );
    assert_eq!(f.client.owner_of(&2), user);
    assert_eq!(
        f.client.token_uri(&2),
        String::from_str(&f.env, "ipfs://lifecycle/2.json")
    );

    f.client.unpause(&f.owner);
    assert_eq!(f.client.mint_public(&user, &1, &PRICE), 3);
    assert_eq!(f.token.balance(&user), 7 * PRICE);
}
