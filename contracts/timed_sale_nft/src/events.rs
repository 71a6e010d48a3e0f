use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

const MINTED: Symbol = symbol_short!("minted");
const TRANSFER: Symbol = symbol_short!("transfer");
const BURN: Symbol = symbol_short!("burn");
const APPROVE: Symbol = symbol_short!("approve");
const REFUND: Symbol = symbol_short!("refund");
const WITHDRAWN: Symbol = symbol_short!("withdrawn");
const PAUSED: Symbol = symbol_short!("paused");
const UNPAUSED: Symbol = symbol_short!("unpaused");

/// Batch mint: `quantity` sequential ids starting at `first_id` went to `to`.
pub fn minted(e: &Env, to: &Address, first_id: u32, quantity: u32) {
    e.events().publish(
        (MINTED, to.clone()),
        (first_id, quantity, e.ledger().timestamp()),
    );
}

/// Ownership change; mints use the contract address as `from`.
pub fn transfer(e: &Env, from: &Address, to: &Address, token_id: u32) {
    e.events()
        .publish((TRANSFER, from.clone(), to.clone()), token_id);
}

pub fn burn(e: &Env, owner: &Address, token_id: u32) {
    e.events().publish((BURN, owner.clone()), token_id);
}

pub fn approve(e: &Env, owner: &Address, approved: &Address, token_id: u32) {
    e.events()
        .publish((APPROVE, owner.clone(), approved.clone()), token_id);
}

pub fn approve_all(e: &Env, owner: &Address, operator: &Address, approved: bool) {
    e.events().publish(
        (Symbol::new(e, "approve_for_all"), owner.clone()),
        (operator.clone(), approved),
    );
}

pub fn allowlist(e: &Env, account: &Address, allowed: bool) {
    e.events()
        .publish((Symbol::new(e, "allowlist_updated"), account.clone()), allowed);
}

pub fn refund(e: &Env, to: &Address, amount: i128) {
    e.events().publish((REFUND, to.clone()), amount);
}

pub fn withdrawn(e: &Env, to: &Address, amount: i128) {
    e.events().publish((WITHDRAWN, to.clone()), amount);
}

pub fn paused(e: &Env, by: &Address) {
    e.events().publish((PAUSED,), by.clone());
}

pub fn unpaused(e: &Env, by: &Address) {
    e.events().publish((UNPAUSED,), by.clone());
}

pub fn royalty_set(e: &Env, receiver: &Address, fee: u32) {
    e.events()
        .publish((Symbol::new(e, "royalty_set"),), (receiver.clone(), fee));
}

pub fn base_uri_set(e: &Env, uri: &String) {
    e.events()
        .publish((Symbol::new(e, "base_uri_set"),), uri.clone());
}

pub fn contract_uri_set(e: &Env, uri: &String) {
    e.events()
        .publish((Symbol::new(e, "contract_uri_set"),), uri.clone());
}

pub fn owner_changed(e: &Env, previous: &Address, new_owner: &Address) {
    e.events().publish(
        (Symbol::new(e, "owner_changed"),),
        (previous.clone(), new_owner.clone()),
    );
}
