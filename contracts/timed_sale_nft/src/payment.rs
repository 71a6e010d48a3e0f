use crate::error::Error;
use crate::events;
use crate::types::CollectionConfig;
use shared_utils::SafeMath;
use soroban_sdk::{token, Address, Env};

/// `mint_price * quantity`.
pub fn required(config: &CollectionConfig, quantity: u32) -> Result<i128, Error> {
    SafeMath::mul_quantity(config.mint_price, quantity).ok_or(Error::ArithmeticOverflow)
}

pub fn check(required: i128, payment: i128) -> Result<(), Error> {
    if payment < required {
        return Err(Error::InsufficientPayment);
    }
    Ok(())
}

/// Pull `payment` from `payer` and send back whatever exceeds `required`.
///
/// Runs after every ledger effect of the mint. A failing transfer traps and
/// the host discards the whole invocation.
pub fn settle(e: &Env, config: &CollectionConfig, payer: &Address, payment: i128, required: i128) {
    if payment == 0 {
        return;
    }
    let contract = e.current_contract_address();
    let token_client = token::Client::new(e, &config.payment_token);
    token_client.transfer(payer, &contract, &payment);

    let excess = payment - required;
    if excess > 0 {
        token_client.transfer(&contract, payer, &excess);
        events::refund(e, payer, excess);
    }
}

pub fn balance(e: &Env, config: &CollectionConfig) -> i128 {
    token::Client::new(e, &config.payment_token).balance(&e.current_contract_address())
}

/// Send the entire contract balance to `to`.
pub fn withdraw_all(e: &Env, config: &CollectionConfig, to: &Address) -> i128 {
    let amount = balance(e, config);
    if amount > 0 {
        token::Client::new(e, &config.payment_token).transfer(
            &e.current_contract_address(),
            to,
            &amount,
        );
        events::withdrawn(e, to, amount);
    }
    amount
}
