//! Ownership, approvals and metadata for issued tokens.

use crate::error::Error;
use crate::events;
use crate::storage::{self, DataKey};
use soroban_sdk::{Address, Env, String, Vec};

/// Longest accepted base URI in bytes.
pub const MAX_BASE_URI_LEN: u32 = 200;

const URI_SUFFIX: &[u8] = b".json";
// base + up to 10 decimal digits of a u32 + suffix
const URI_BUF_LEN: usize = MAX_BASE_URI_LEN as usize + 10 + 5;

pub fn owner_of(e: &Env, token_id: u32) -> Result<Address, Error> {
    e.storage()
        .persistent()
        .get(&DataKey::TokenOwner(token_id))
        .ok_or(Error::TokenDoesNotExist)
}

/// Ids held by `owner` in enumeration order.
///
/// Mints append in ascending id order. Removing a token moves the holder's
/// last entry into the vacated slot.
pub fn tokens_of_owner(e: &Env, owner: &Address) -> Vec<u32> {
    let mut ids = Vec::new(e);
    for index in 0..balance_of(e, owner) {
        if let Some(token_id) = e
            .storage()
            .persistent()
            .get(&DataKey::OwnedToken(owner.clone(), index))
        {
            ids.push_back(token_id);
        }
    }
    ids
}

pub fn token_of_owner_by_index(e: &Env, owner: &Address, index: u32) -> Result<u32, Error> {
    e.storage()
        .persistent()
        .get(&DataKey::OwnedToken(owner.clone(), index))
        .ok_or(Error::OwnerIndexOutOfBounds)
}

pub fn balance_of(e: &Env, owner: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

fn set_balance(e: &Env, owner: &Address, balance: u32) {
    let key = DataKey::Balance(owner.clone());
    if balance == 0 {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, &balance);
    }
}

pub fn get_approved(e: &Env, token_id: u32) -> Option<Address> {
    e.storage().persistent().get(&DataKey::Approved(token_id))
}

pub fn is_operator(e: &Env, owner: &Address, operator: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Operator(owner.clone(), operator.clone()))
        .unwrap_or(false)
}

pub fn set_operator(e: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = DataKey::Operator(owner.clone(), operator.clone());
    if approved {
        e.storage().persistent().set(&key, &true);
    } else {
        e.storage().persistent().remove(&key);
    }
}

/// Approving the holder itself clears the approval.
pub fn set_approved(e: &Env, owner: &Address, approved: &Address, token_id: u32) {
    if approved == owner {
        e.storage().persistent().remove(&DataKey::Approved(token_id));
    } else {
        e.storage()
            .persistent()
            .set(&DataKey::Approved(token_id), approved);
    }
}

pub fn is_approved_or_owner(e: &Env, spender: &Address, owner: &Address, token_id: u32) -> bool {
    if spender == owner || is_operator(e, owner, spender) {
        return true;
    }
    match get_approved(e, token_id) {
        Some(approved) => approved == *spender,
        None => false,
    }
}

fn index_put(e: &Env, owner: &Address, token_id: u32, index: u32) {
    e.storage()
        .persistent()
        .set(&DataKey::OwnedToken(owner.clone(), index), &token_id);
    e.storage()
        .persistent()
        .set(&DataKey::OwnedTokenIndex(token_id), &index);
}

fn index_push(e: &Env, owner: &Address, token_id: u32) {
    let balance = balance_of(e, owner);
    index_put(e, owner, token_id, balance);
    set_balance(e, owner, balance + 1);
}

/// Swap-and-pop removal; touches a constant number of entries.
fn index_remove(e: &Env, owner: &Address, token_id: u32) {
    let Some(last) = balance_of(e, owner).checked_sub(1) else {
        return;
    };
    let index: u32 = e
        .storage()
        .persistent()
        .get(&DataKey::OwnedTokenIndex(token_id))
        .unwrap_or(last);

    if index != last {
        let moved: Option<u32> = e
            .storage()
            .persistent()
            .get(&DataKey::OwnedToken(owner.clone(), last));
        if let Some(moved) = moved {
            index_put(e, owner, moved, index);
        }
    }
    e.storage()
        .persistent()
        .remove(&DataKey::OwnedToken(owner.clone(), last));
    e.storage()
        .persistent()
        .remove(&DataKey::OwnedTokenIndex(token_id));
    set_balance(e, owner, last);
}

/// Record `quantity` freshly issued ids starting at `first_id`.
///
/// The holder's balance is read and written once per batch.
pub fn assign_batch(e: &Env, to: &Address, first_id: u32, quantity: u32) {
    let contract = e.current_contract_address();
    let mut balance = balance_of(e, to);
    for token_id in first_id..first_id + quantity {
        e.storage()
            .persistent()
            .set(&DataKey::TokenOwner(token_id), to);
        index_put(e, to, token_id, balance);
        balance += 1;
        events::transfer(e, &contract, to, token_id);
    }
    set_balance(e, to, balance);
}

/// Move a live token; callers have already checked authorization.
pub fn move_token(e: &Env, from: &Address, to: &Address, token_id: u32) {
    e.storage().persistent().remove(&DataKey::Approved(token_id));
    index_remove(e, from, token_id);
    e.storage()
        .persistent()
        .set(&DataKey::TokenOwner(token_id), to);
    index_push(e, to, token_id);
    events::transfer(e, from, to, token_id);
}

/// Destroy a live token. Its id is never issued again.
pub fn destroy(e: &Env, owner: &Address, token_id: u32) {
    e.storage().persistent().remove(&DataKey::Approved(token_id));
    e.storage()
        .persistent()
        .remove(&DataKey::TokenOwner(token_id));
    index_remove(e, owner, token_id);
    storage::set_total_burned(e, storage::total_burned(e) + 1);
    events::burn(e, owner, token_id);
}

/// `base_uri + token_id + ".json"` for a live token.
pub fn token_uri(e: &Env, base_uri: &String, token_id: u32) -> Result<String, Error> {
    owner_of(e, token_id)?;

    let base_len = base_uri.len() as usize;
    if base_len > MAX_BASE_URI_LEN as usize {
        return Err(Error::UriTooLong);
    }

    let mut buf = [0u8; URI_BUF_LEN];
    base_uri.copy_into_slice(&mut buf[..base_len]);
    let mut end = base_len + write_decimal(&mut buf[base_len..], token_id);
    buf[end..end + URI_SUFFIX.len()].copy_from_slice(URI_SUFFIX);
    end += URI_SUFFIX.len();

    let uri = core::str::from_utf8(&buf[..end]).map_err(|_| Error::InvalidConfig)?;
    Ok(String::from_str(e, uri))
}

/// Write `n` in decimal at the start of `out`, returning the digit count.
fn write_decimal(out: &mut [u8], mut n: u32) -> usize {
    if n == 0 {
        out[0] = b'0';
        return 1;
    }
    let mut digits = [0u8; 10];
    let mut count = 0;
    while n > 0 {
        digits[count] = (n % 10) as u8 + b'0';
        n /= 10;
        count += 1;
    }
    for i in 0..count {
        out[i] = digits[count - 1 - i];
    }
    count
}
