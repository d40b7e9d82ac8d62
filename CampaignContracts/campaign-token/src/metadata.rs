use crate::types::{DataKey, TokenError, TokenMetadata};
use campaign_common::TimeMode;
use soroban_sdk::{Address, Env};

pub fn read_admin(env: &Env) -> Result<Address, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(TokenError::NotInitialized)
}

pub fn read_metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(TokenError::NotInitialized)
}

pub fn read_time_mode(env: &Env) -> Result<TimeMode, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::TimeMode)
        .ok_or(TokenError::NotInitialized)
}

pub fn is_minting_finished(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::MintingFinished)
        .unwrap_or(false)
}
