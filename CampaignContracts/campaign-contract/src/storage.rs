use crate::errors::CampaignError;
use crate::external::{BillingClient, RewardTokenClient};
use crate::types::*;
use soroban_sdk::{token, Address, Env};

pub fn verify_owner(env: &Env) -> Result<Address, CampaignError> {
    let owner: Address = env
        .storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(CampaignError::NotInitialized)?;
    owner.require_auth();
    Ok(owner)
}

pub fn read_info(env: &Env) -> Result<CampaignInfo, CampaignError> {
    env.storage()
        .instance()
        .get(&DataKey::Info)
        .ok_or(CampaignError::NotInitialized)
}

pub fn read_params(env: &Env) -> Result<FundingParams, CampaignError> {
    env.storage()
        .instance()
        .get(&DataKey::Params)
        .ok_or(CampaignError::ParamsNotSet)
}

pub fn read_bonus(env: &Env) -> Result<BonusSchedule, CampaignError> {
    env.storage()
        .instance()
        .get(&DataKey::Bonus)
        .ok_or(CampaignError::ParamsNotSet)
}

pub fn read_billing(env: &Env) -> Result<BillingLink, CampaignError> {
    env.storage()
        .instance()
        .get(&DataKey::Billing)
        .ok_or(CampaignError::BillingNotSet)
}

pub fn read_token(env: &Env) -> Result<Address, CampaignError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CampaignError::TokenNotSet)
}

pub fn reward_token(env: &Env) -> Result<RewardTokenClient, CampaignError> {
    Ok(RewardTokenClient::new(env, &read_token(env)?))
}

pub fn billing_client<'a>(env: &'a Env, link: &BillingLink) -> BillingClient<'a> {
    BillingClient::new(env, &link.address)
}

pub fn read_payment_token(env: &Env) -> Result<Address, CampaignError> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(CampaignError::NotInitialized)
}

pub fn payment_token(env: &Env) -> Result<token::Client, CampaignError> {
    Ok(token::Client::new(env, &read_payment_token(env)?))
}

pub fn read_amount_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::AmountRaised)
        .unwrap_or(0)
}

pub fn read_min_contribution(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::MinContribution)
        .unwrap_or(0)
}

pub fn read_early_success(env: &Env) -> Option<EarlySuccess> {
    env.storage().instance().get(&DataKey::EarlySuccess)
}

pub fn read_contribution(env: &Env, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(contributor.clone()))
        .unwrap_or(0)
}

pub fn write_contribution(env: &Env, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(contributor.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn is_payout_withdrawn(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::PayoutWithdrawn)
        .unwrap_or(false)
}
