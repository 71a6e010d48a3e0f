#![cfg(test)]
#![cfg(feature = "benchmark")]

use super::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, Env, String,
};

const START: u64 = 1_700_000_000;
const PRICE: i128 = 1_000_000;

/// Host cost of a single contract invocation
struct BenchmarkMetrics {
    function_name: &'static str,
    cpu_instructions: u64,
    memory_bytes: u64,
}

impl BenchmarkMetrics {
    fn measure(e: &Env, function_name: &'static str, f: impl FnOnce()) -> Self {
        e.budget().reset_unlimited();
        f();
        Self {
            function_name,
            cpu_instructions: e.budget().cpu_instruction_cost(),
            memory_bytes: e.budget().memory_bytes_cost(),
        }
    }

    fn assert_recorded(&self) {
        assert!(
            self.cpu_instructions > 0,
            "no cpu cost recorded for {}",
            self.function_name
        );
        assert!(self.memory_bytes > 0);
    }
}

struct Bench {
    e: Env,
    owner: Address,
    client: TimedSaleNFTContractClient<'static>,
    token_admin: token::StellarAssetClient<'static>,
}

fn setup_bench() -> Bench {
    let e = Env::default();
    e.mock_all_auths();
    e.ledger().with_mut(|l| l.timestamp = START);

    let owner = Address::generate(&e);
    let token_address = e.register_stellar_asset_contract_v2(Address::generate(&e)).address();
    let contract_id = e.register_contract(None, TimedSaleNFTContract);
    let client = TimedSaleNFTContractClient::new(&e, &contract_id);

    let config = CollectionConfig {
        name: String::from_str(&e, "Bench"),
        symbol: String::from_str(&e, "BNCH"),
        base_uri: String::from_str(&e, "ipfs://bench/"),
        contract_uri: String::from_str(&e, "ipfs://bench/contract.json"),
        max_supply: 10_000,
        max_mint_per_tx: 20,
        allowlist_mint_limit: 20,
        mint_price: PRICE,
        allowlist_sale_start: START + 10,
        public_sale_start: START + 20,
        payment_token: token_address.clone(),
        royalty_receiver: owner.clone(),
        royalty_fee: 250,
    };
    client.initialize(&owner, &config);

    Bench {
        token_admin: token::StellarAssetClient::new(&e, &token_address),
        e,
        owner,
        client,
    }
}

fn funded(b: &Bench) -> Address {
    let user = Address::generate(&b.e);
    b.token_admin.mint(&user, &(PRICE * 1_000));
    user
}

#[test]
fn benchmark_mint_allowlist() {
    let b = setup_bench();
    let user = funded(&b);
    b.client
        .update_allowlist(&b.owner, &vec![&b.e, user.clone()], &vec![&b.e, true]);
    b.e.ledger().with_mut(|l| l.timestamp = START + 10);

    let single = BenchmarkMetrics::measure(&b.e, "mint_allowlist x1", || {
        b.client.mint_allowlist(&user, &1, &PRICE);
    });
    single.assert_recorded();

    let batch = BenchmarkMetrics::measure(&b.e, "mint_allowlist x10", || {
        b.client.mint_allowlist(&user, &10, &(PRICE * 10));
    });
    batch.assert_recorded();
    assert!(batch.cpu_instructions > single.cpu_instructions);
}

#[test]
fn benchmark_mint_public_with_refund() {
    let b = setup_bench();
    let user = funded(&b);
    b.e.ledger().with_mut(|l| l.timestamp = START + 20);

    let exact = BenchmarkMetrics::measure(&b.e, "mint_public exact", || {
        b.client.mint_public(&user, &5, &(PRICE * 5));
    });
    exact.assert_recorded();

    // The refund costs one extra token transfer
    let refunded = BenchmarkMetrics::measure(&b.e, "mint_public refund", || {
        b.client.mint_public(&user, &5, &(PRICE * 6));
    });
    refunded.assert_recorded();
}

#[test]
fn benchmark_admin_mint_max_batch() {
    let b = setup_bench();
    let recipient = Address::generate(&b.e);

    let metrics = BenchmarkMetrics::measure(&b.e, "admin_mint x20", || {
        b.client.admin_mint(&b.owner, &recipient, &20);
    });
    metrics.assert_recorded();
    assert_eq!(b.client.balance_of(&recipient), 20);

    // Cost of a batch does not depend on what the holder already owns
    let repeat = BenchmarkMetrics::measure(&b.e, "admin_mint x20 again", || {
        b.client.admin_mint(&b.owner, &recipient, &20);
    });
    repeat.assert_recorded();
}

#[test]
fn benchmark_update_allowlist_full_batch() {
    let b = setup_bench();
    let mut accounts = soroban_sdk::Vec::new(&b.e);
    let mut flags = soroban_sdk::Vec::new(&b.e);
    for _ in 0..MAX_ALLOWLIST_BATCH {
        accounts.push_back(Address::generate(&b.e));
        flags.push_back(true);
    }

    let metrics = BenchmarkMetrics::measure(&b.e, "update_allowlist full", || {
        b.client.update_allowlist(&b.owner, &accounts, &flags);
    });
    metrics.assert_recorded();
}

#[test]
fn benchmark_token_uri() {
    let b = setup_bench();
    let recipient = Address::generate(&b.e);
    b.client.admin_mint(&b.owner, &recipient, &1);

    let metrics = BenchmarkMetrics::measure(&b.e, "token_uri", || {
        b.client.token_uri(&1);
    });
    metrics.assert_recorded();
}
