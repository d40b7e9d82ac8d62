use crate::storage::{extend_persistent, read_release_time, read_total_supply, receive_balance};
use crate::events::{Minted, MintingFinished, FINISHED, MINT};
use crate::metadata::{is_minting_finished, read_admin};
use crate::types::{DataKey, TokenError};
use soroban_sdk::{log, Address, Env};

pub fn mint(env: &Env, to: Address, amount: i128, release_time: u64) -> Result<(), TokenError> {
    read_admin(env)?.require_auth();

    if is_minting_finished(env) {
        return Err(TokenError::MintingFinished);
    }
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }

    receive_balance(env, &to, amount)?;
    let total_supply = read_total_supply(env)
        .checked_add(amount)
        .ok_or(TokenError::ArithmeticOverflow)?;
    env.storage()
        .instance()
        .set(&DataKey::TotalSupply, &total_supply);

    // A later, shorter lock never shortens an existing one
    if release_time > read_release_time(env, &to) {
        let key = DataKey::ReleaseTime(to.clone());
        env.storage().persistent().set(&key, &release_time);
        extend_persistent(env, &key);
    }

    env.events().publish(
        (MINT, to.clone()),
        Minted {
            to,
            amount,
            release_time,
        },
    );
    Ok(())
}

pub fn finish_minting(env: &Env) -> Result<(), TokenError> {
    read_admin(env)?.require_auth();

    if is_minting_finished(env) {
        return Err(TokenError::MintingFinished);
    }
    env.storage()
        .instance()
        .set(&DataKey::MintingFinished, &true);

    let total_supply = read_total_supply(env);
    log!(env, "minting finished, total supply {}", total_supply);
    env.events()
        .publish((FINISHED,), MintingFinished { total_supply });
    Ok(())
}
