#![no_std]

//! Timed-sale NFT collection.
//!
//! Sequentially numbered tokens are sold in two time-gated phases: an
//! allowlist window with a per-account quota, then an open public sale with
//! a per-transaction cap. Supply is capped, payment is taken in a
//! configured token, and overpayment is refunded in the same invocation.

mod allowlist;
mod error;
mod events;
mod payment;
mod phase;
mod registry;
mod storage;
mod supply;
mod types;

pub use allowlist::MAX_ALLOWLIST_BATCH;
pub use error::{Error, ErrorCategory};
pub use registry::MAX_BASE_URI_LEN;
pub use types::{CollectionConfig, SalePhase};

use error::reject;
use shared_utils::{AccessControl, Pausable, ReentrancyGuard, SafeMath, Validation};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

/// Highest accepted royalty fee in basis points (10%).
pub const MAX_ROYALTY_FEE: u32 = 1000;

// ============================================================================
// Internal helpers
// ============================================================================

fn require_owner(e: &Env, caller: &Address, context: &str) -> Result<(), Error> {
    caller.require_auth();
    if AccessControl::is_owner(e, caller) {
        return Ok(());
    }
    let err = match AccessControl::owner(e) {
        Some(_) => Error::NotOwner,
        None => Error::NotInitialized,
    };
    Err(reject(e, err, context))
}

fn load_config(e: &Env, context: &str) -> Result<CollectionConfig, Error> {
    storage::read_config(e).map_err(|err| reject(e, err, context))
}

fn validate_royalty(e: &Env, receiver: &Address, fee: u32) -> Result<(), Error> {
    if fee > MAX_ROYALTY_FEE {
        return Err(Error::FeeTooHigh);
    }
    if Validation::is_zero_address(e, receiver) {
        return Err(Error::InvalidReceiver);
    }
    Ok(())
}

fn validate_base_uri(uri: &String) -> Result<(), Error> {
    if uri.len() > MAX_BASE_URI_LEN {
        return Err(Error::UriTooLong);
    }
    Ok(())
}

fn validate_config(e: &Env, config: &CollectionConfig) -> Result<(), Error> {
    if config.max_supply == 0 || config.max_mint_per_tx == 0 || config.mint_price < 0 {
        return Err(Error::InvalidConfig);
    }
    validate_royalty(e, &config.royalty_receiver, config.royalty_fee)?;
    validate_base_uri(&config.base_uri)
}

fn enter_guard(e: &Env, context: &str) -> Result<(), Error> {
    if !ReentrancyGuard::enter(e) {
        return Err(reject(e, Error::ReentrancyDetected, context));
    }
    Ok(())
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct TimedSaleNFTContract;

#[contractimpl]
impl TimedSaleNFTContract {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the collection with its owner account and configuration.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If called a second time
    /// * `InvalidConfig` - Zero supply or per-tx cap, or negative price
    /// * `FeeTooHigh` / `InvalidReceiver` - Bad royalty settings
    /// * `UriTooLong` - Base URI longer than `MAX_BASE_URI_LEN`
    pub fn initialize(e: Env, owner: Address, config: CollectionConfig) -> Result<(), Error> {
        if storage::has_config(&e) {
            return Err(reject(&e, Error::AlreadyInitialized, "initialize"));
        }
        validate_config(&e, &config).map_err(|err| reject(&e, err, "initialize"))?;

        AccessControl::set_owner(&e, &owner);
        storage::write_config(&e, &config);
        storage::set_total_minted(&e, 0);
        storage::set_total_burned(&e, 0);
        Pausable::unpause(&e);
        Ok(())
    }

    // ========================================================================
    // Sale Clock
    // ========================================================================

    /// Current sale phase; a pure function of ledger time and configuration.
    pub fn sale_phase(e: Env) -> Result<SalePhase, Error> {
        let config = load_config(&e, "sale_phase")?;
        Ok(phase::current(&e, &config))
    }

    // ========================================================================
    // Minting
    // ========================================================================

    /// Mint during the allowlist window.
    ///
    /// Checks run in this order: pause, phase, quantity bounds, eligibility,
    /// per-account quota, payment, supply. Nothing is written until all pass.
    ///
    /// # Returns
    /// The first token id issued.
    pub fn mint_allowlist(
        e: Env,
        minter: Address,
        quantity: u32,
        payment: i128,
    ) -> Result<u32, Error> {
        const CTX: &str = "mint_allowlist";
        minter.require_auth();
        let config = load_config(&e, CTX)?;

        let required = (|| {
            if Pausable::is_paused(&e) {
                return Err(Error::ContractPaused);
            }
            if phase::current(&e, &config) != SalePhase::Allowlist {
                return Err(Error::NotAllowlistPhase);
            }
            supply::check_quantity(&config, quantity)?;
            allowlist::check_mint(&e, &config, &minter, quantity)?;
            let required = payment::required(&config, quantity)?;
            payment::check(required, payment)?;
            supply::check_supply(&e, &config, quantity)?;
            Ok(required)
        })()
        .map_err(|err| reject(&e, err, CTX))?;

        enter_guard(&e, CTX)?;
        let first_id = supply::issue(&e, &minter, quantity);
        allowlist::record_mint(&e, &minter, quantity);
        payment::settle(&e, &config, &minter, payment, required);
        ReentrancyGuard::exit(&e);

        Ok(first_id)
    }

    /// Mint during the public sale.
    ///
    /// Checks run in this order: pause, phase, quantity bounds, payment,
    /// supply.
    ///
    /// # Returns
    /// The first token id issued.
    pub fn mint_public(e: Env, minter: Address, quantity: u32, payment: i128) -> Result<u32, Error> {
        const CTX: &str = "mint_public";
        minter.require_auth();
        let config = load_config(&e, CTX)?;

        let required = (|| {
            if Pausable::is_paused(&e) {
                return Err(Error::ContractPaused);
            }
            if phase::current(&e, &config) != SalePhase::Public {
                return Err(Error::NotPublicPhase);
            }
            supply::check_quantity(&config, quantity)?;
            let required = payment::required(&config, quantity)?;
            payment::check(required, payment)?;
            supply::check_supply(&e, &config, quantity)?;
            Ok(required)
        })()
        .map_err(|err| reject(&e, err, CTX))?;

        enter_guard(&e, CTX)?;
        let first_id = supply::issue(&e, &minter, quantity);
        payment::settle(&e, &config, &minter, payment, required);
        ReentrancyGuard::exit(&e);

        Ok(first_id)
    }

    /// Owner mint with no phase or payment requirement.
    ///
    /// Still bounded by the per-call cap and the supply ceiling.
    pub fn admin_mint(
        e: Env,
        caller: Address,
        recipient: Address,
        quantity: u32,
    ) -> Result<u32, Error> {
        const CTX: &str = "admin_mint";
        require_owner(&e, &caller, CTX)?;
        let config = load_config(&e, CTX)?;

        (|| {
            if Pausable::is_paused(&e) {
                return Err(Error::ContractPaused);
            }
            supply::check_quantity(&config, quantity)?;
            if Validation::is_zero_address(&e, &recipient) {
                return Err(Error::InvalidRecipient);
            }
            supply::check_supply(&e, &config, quantity)
        })()
        .map_err(|err| reject(&e, err, CTX))?;

        enter_guard(&e, CTX)?;
        let first_id = supply::issue(&e, &recipient, quantity);
        ReentrancyGuard::exit(&e);

        Ok(first_id)
    }

    // ========================================================================
    // Allowlist
    // ========================================================================

    /// Set allowlist eligibility for up to `MAX_ALLOWLIST_BATCH` accounts.
    pub fn update_allowlist(
        e: Env,
        caller: Address,
        accounts: Vec<Address>,
        flags: Vec<bool>,
    ) -> Result<(), Error> {
        require_owner(&e, &caller, "update_allowlist")?;
        allowlist::check_batch(&accounts, &flags)
            .map_err(|err| reject(&e, err, "update_allowlist"))?;
        allowlist::apply_batch(&e, &accounts, &flags);
        Ok(())
    }

    pub fn is_allowlisted(e: Env, account: Address) -> bool {
        allowlist::is_allowlisted(&e, &account)
    }

    /// Tokens `account` has minted during the allowlist phase.
    pub fn allowlist_minted(e: Env, account: Address) -> u32 {
        allowlist::minted(&e, &account)
    }

    // ========================================================================
    // Funds
    // ========================================================================

    /// Transfer the whole contract balance to the owner.
    ///
    /// # Returns
    /// The amount moved; zero when there was nothing to withdraw.
    pub fn withdraw(e: Env, caller: Address) -> Result<i128, Error> {
        require_owner(&e, &caller, "withdraw")?;
        let config = load_config(&e, "withdraw")?;

        enter_guard(&e, "withdraw")?;
        let amount = payment::withdraw_all(&e, &config, &caller);
        ReentrancyGuard::exit(&e);
        Ok(amount)
    }

    /// Payment-token balance held by the contract.
    pub fn balance(e: Env) -> Result<i128, Error> {
        let config = load_config(&e, "balance")?;
        Ok(payment::balance(&e, &config))
    }

    // ========================================================================
    // Administration
    // ========================================================================

    pub fn pause(e: Env, caller: Address) -> Result<(), Error> {
        require_owner(&e, &caller, "pause")?;
        Pausable::pause(&e);
        events::paused(&e, &caller);
        Ok(())
    }

    pub fn unpause(e: Env, caller: Address) -> Result<(), Error> {
        require_owner(&e, &caller, "unpause")?;
        Pausable::unpause(&e);
        events::unpaused(&e, &caller);
        Ok(())
    }

    /// Returns `true` while minting is paused.
    pub fn is_paused(e: Env) -> bool {
        Pausable::is_paused(&e)
    }

    pub fn set_base_uri(e: Env, caller: Address, base_uri: String) -> Result<(), Error> {
        require_owner(&e, &caller, "set_base_uri")?;
        let mut config = load_config(&e, "set_base_uri")?;
        validate_base_uri(&base_uri).map_err(|err| reject(&e, err, "set_base_uri"))?;
        config.base_uri = base_uri.clone();
        storage::write_config(&e, &config);
        events::base_uri_set(&e, &base_uri);
        Ok(())
    }

    pub fn set_contract_uri(e: Env, caller: Address, contract_uri: String) -> Result<(), Error> {
        require_owner(&e, &caller, "set_contract_uri")?;
        let mut config = load_config(&e, "set_contract_uri")?;
        config.contract_uri = contract_uri.clone();
        storage::write_config(&e, &config);
        events::contract_uri_set(&e, &contract_uri);
        Ok(())
    }

    /// Update the royalty receiver and fee (basis points, at most 1000).
    pub fn set_royalty(e: Env, caller: Address, receiver: Address, fee: u32) -> Result<(), Error> {
        require_owner(&e, &caller, "set_royalty")?;
        let mut config = load_config(&e, "set_royalty")?;
        validate_royalty(&e, &receiver, fee).map_err(|err| reject(&e, err, "set_royalty"))?;
        config.royalty_receiver = receiver.clone();
        config.royalty_fee = fee;
        storage::write_config(&e, &config);
        events::royalty_set(&e, &receiver, fee);
        Ok(())
    }

    pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        require_owner(&e, &caller, "transfer_ownership")?;
        if Validation::is_zero_address(&e, &new_owner) {
            return Err(reject(&e, Error::InvalidRecipient, "transfer_ownership"));
        }
        AccessControl::set_owner(&e, &new_owner);
        events::owner_changed(&e, &caller, &new_owner);
        Ok(())
    }

    pub fn get_owner(e: Env) -> Result<Address, Error> {
        AccessControl::owner(&e).ok_or(Error::NotInitialized)
    }

    // ========================================================================
    // Token Transfers, Approvals and Burn
    // ========================================================================

    /// Transfer a token held by `from`.
    ///
    /// # Errors
    /// * `TokenDoesNotExist` - Unminted or burned id
    /// * `NotOwnerOrApproved` - `from` does not hold the token
    /// * `InvalidRecipient` - `to` is the zero address
    pub fn transfer(e: Env, from: Address, to: Address, token_id: u32) -> Result<(), Error> {
        from.require_auth();
        let owner = registry::owner_of(&e, token_id).map_err(|err| reject(&e, err, "transfer"))?;
        if owner != from {
            return Err(reject(&e, Error::NotOwnerOrApproved, "transfer"));
        }
        if Validation::is_zero_address(&e, &to) {
            return Err(reject(&e, Error::InvalidRecipient, "transfer"));
        }
        registry::move_token(&e, &from, &to, token_id);
        Ok(())
    }

    /// Transfer on behalf of `from` using an approval or operator grant.
    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u32,
    ) -> Result<(), Error> {
        spender.require_auth();
        let owner =
            registry::owner_of(&e, token_id).map_err(|err| reject(&e, err, "transfer_from"))?;
        if owner != from || !registry::is_approved_or_owner(&e, &spender, &owner, token_id) {
            return Err(reject(&e, Error::NotOwnerOrApproved, "transfer_from"));
        }
        if Validation::is_zero_address(&e, &to) {
            return Err(reject(&e, Error::InvalidRecipient, "transfer_from"));
        }
        registry::move_token(&e, &from, &to, token_id);
        Ok(())
    }

    /// Approve a single delegate for `token_id`. Approving the holder clears it.
    pub fn approve(e: Env, caller: Address, approved: Address, token_id: u32) -> Result<(), Error> {
        caller.require_auth();
        let owner = registry::owner_of(&e, token_id).map_err(|err| reject(&e, err, "approve"))?;
        if caller != owner && !registry::is_operator(&e, &owner, &caller) {
            return Err(reject(&e, Error::NotOwnerOrApproved, "approve"));
        }
        registry::set_approved(&e, &owner, &approved, token_id);
        events::approve(&e, &owner, &approved, token_id);
        Ok(())
    }

    pub fn set_approval_for_all(e: Env, caller: Address, operator: Address, approved: bool) {
        caller.require_auth();
        registry::set_operator(&e, &caller, &operator, approved);
        events::approve_all(&e, &caller, &operator, approved);
    }

    pub fn get_approved(e: Env, token_id: u32) -> Result<Option<Address>, Error> {
        registry::owner_of(&e, token_id)?;
        Ok(registry::get_approved(&e, token_id))
    }

    pub fn is_approved_for_all(e: Env, owner: Address, operator: Address) -> bool {
        registry::is_operator(&e, &owner, &operator)
    }

    /// Destroy a token. Allowed for the holder, its approved delegate, or an
    /// operator of the holder. Burned ids are never reissued.
    pub fn burn(e: Env, caller: Address, token_id: u32) -> Result<(), Error> {
        caller.require_auth();
        let owner = registry::owner_of(&e, token_id).map_err(|err| reject(&e, err, "burn"))?;
        if !registry::is_approved_or_owner(&e, &caller, &owner, token_id) {
            return Err(reject(&e, Error::NotOwnerOrApproved, "burn"));
        }
        registry::destroy(&e, &owner, token_id);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn owner_of(e: Env, token_id: u32) -> Result<Address, Error> {
        registry::owner_of(&e, token_id)
    }

    pub fn balance_of(e: Env, owner: Address) -> u32 {
        registry::balance_of(&e, &owner)
    }

    /// Snapshot of ids held by `owner` in enumeration order.
    pub fn tokens_of_owner(e: Env, owner: Address) -> Vec<u32> {
        registry::tokens_of_owner(&e, &owner)
    }

    /// Id at `index` of `owner`'s holdings, for paging through large
    /// holdings one entry at a time.
    pub fn token_of_owner_by_index(e: Env, owner: Address, index: u32) -> Result<u32, Error> {
        registry::token_of_owner_by_index(&e, &owner, index)
    }

    pub fn token_uri(e: Env, token_id: u32) -> Result<String, Error> {
        let config = load_config(&e, "token_uri")?;
        registry::token_uri(&e, &config.base_uri, token_id)
    }

    /// Ids ever issued; burns do not decrease it.
    pub fn total_minted(e: Env) -> u32 {
        storage::total_minted(&e)
    }

    /// Tokens currently in circulation.
    pub fn total_supply(e: Env) -> u32 {
        storage::total_minted(&e) - storage::total_burned(&e)
    }

    /// Royalty receiver and amount owed on a sale at `sale_price`.
    pub fn royalty_info(e: Env, token_id: u32, sale_price: i128) -> Result<(Address, i128), Error> {
        let _ = token_id;
        let config = load_config(&e, "royalty_info")?;
        let amount = SafeMath::bps_of(sale_price, config.royalty_fee)
            .ok_or_else(|| reject(&e, Error::ArithmeticOverflow, "royalty_info"))?;
        Ok((config.royalty_receiver, amount))
    }

    pub fn name(e: Env) -> Result<String, Error> {
        Ok(storage::read_config(&e)?.name)
    }

    pub fn symbol(e: Env) -> Result<String, Error> {
        Ok(storage::read_config(&e)?.symbol)
    }

    pub fn base_uri(e: Env) -> Result<String, Error> {
        Ok(storage::read_config(&e)?.base_uri)
    }

    pub fn contract_uri(e: Env) -> Result<String, Error> {
        Ok(storage::read_config(&e)?.contract_uri)
    }

    pub fn get_config(e: Env) -> Result<CollectionConfig, Error> {
        storage::read_config(&e)
    }
}


#[cfg(all(test, feature = "benchmark"))]
mod benchmarks;
