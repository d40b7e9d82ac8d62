#![no_std]
use campaign_common::TimeMode;
use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod events;
mod metadata;
mod minting;
mod storage;
mod transfers;
mod types;

pub use events::*;
pub use types::*;

/// Reward token sold by a campaign.
///
/// The campaign is the admin: it mints while funding is open and finishes
/// minting on success. Transfers stay locked until then, and each holder can
/// additionally be locked until its own release time.
#[contract]
pub struct CampaignToken;

#[contractimpl]
impl CampaignToken {
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
        time_mode: TimeMode,
    ) -> Result<(), TokenError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(TokenError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(
            &DataKey::Metadata,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        env.storage().instance().set(&DataKey::TimeMode, &time_mode);
        env.storage()
            .instance()
            .set(&DataKey::MintingFinished, &false);
        Ok(())
    }

    /// Mints `amount` to `to`, locking the holder until at least `release_time`.
    pub fn mint(env: Env, to: Address, amount: i128, release_time: u64) -> Result<(), TokenError> {
        minting::mint(&env, to, amount, release_time)
    }

    pub fn finish_minting(env: Env) -> Result<(), TokenError> {
        minting::finish_minting(&env)
    }

    pub fn minting_finished(env: Env) -> bool {
        metadata::is_minting_finished(&env)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        transfers::transfer(&env, from, to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        transfers::transfer_from(&env, spender, from, to, amount)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        from.require_auth();
        if amount < 0 {
            return Err(TokenError::InvalidAmount);
        }
        storage::write_allowance(&env, &from, &spender, amount, expiration_ledger)?;
        env.events().publish(
            (APPROVE, from.clone(), spender.clone()),
            Approved {
                from,
                spender,
                amount,
                expiration_ledger,
            },
        );
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::read_allowance(&env, &from, &spender).amount
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::read_balance(&env, &id)
    }

    pub fn release_time(env: Env, id: Address) -> u64 {
        storage::read_release_time(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::read_total_supply(&env)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(metadata::read_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(metadata::read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(metadata::read_metadata(&env)?.symbol)
    }

    pub fn time_mode(env: Env) -> Result<TimeMode, TokenError> {
        metadata::read_time_mode(&env)
    }

    pub fn admin(env: Env) -> Result<Address, TokenError> {
        metadata::read_admin(&env)
    }
}

#[cfg(test)]
mod test;
