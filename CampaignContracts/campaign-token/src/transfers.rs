use crate::storage::{read_release_time, receive_balance, spend_allowance, spend_balance};
use crate::events::{Transferred, TRANSFER};
use crate::metadata::{is_minting_finished, read_time_mode};
use crate::types::TokenError;
use soroban_sdk::{Address, Env};

/// Holders can move tokens only once minting is over and their lock has elapsed.
fn ensure_transferable(env: &Env, from: &Address) -> Result<(), TokenError> {
    if !is_minting_finished(env) {
        return Err(TokenError::TransfersLocked);
    }
    let now = read_time_mode(env)?.now(env);
    if now < read_release_time(env, from) {
        return Err(TokenError::TokensTimeLocked);
    }
    Ok(())
}

fn move_balance(env: &Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    ensure_transferable(env, &from)?;
    spend_balance(env, &from, amount)?;
    receive_balance(env, &to, amount)?;

    env.events()
        .publish((TRANSFER, from.clone(), to.clone()), Transferred { from, to, amount });
    Ok(())
}

pub fn transfer(env: &Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
    from.require_auth();
    move_balance(env, from, to, amount)
}

pub fn transfer_from(
    env: &Env,
    spender: Address,
    from: Address,
    to: Address,
    amount: i128,
) -> Result<(), TokenError> {
    spender.require_auth();
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    spend_allowance(env, &from, &spender, amount)?;
    move_balance(env, from, to, amount)
}
