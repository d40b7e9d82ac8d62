use crate::types::{BillingError, DataKey, Discount, PricingConfig, TTL_INSTANCE, TTL_PERSISTENT};
use campaign_common::SCALE;
use soroban_sdk::{token, Address, BytesN, Env};

pub fn verify_owner(env: &Env) -> Result<Address, BillingError> {
    let owner = read_owner(env)?;
    owner.require_auth();
    Ok(owner)
}

pub fn read_owner(env: &Env) -> Result<Address, BillingError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(BillingError::NotInitialized)
}

pub fn read_pricing(env: &Env) -> Result<PricingConfig, BillingError> {
    env.storage()
        .instance()
        .get(&DataKey::Pricing)
        .ok_or(BillingError::NotInitialized)
}

pub fn payment_token(env: &Env) -> Result<token::Client, BillingError> {
    let address: Address = env
        .storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(BillingError::NotInitialized)?;
    Ok(token::Client::new(env, &address))
}

pub fn read_discount(env: &Env, hash: &BytesN<32>) -> Option<Discount> {
    env.storage()
        .persistent()
        .get(&DataKey::Discount(hash.clone()))
}

/// Looks up a promo code that the caller insists on using.
pub fn live_discount(
    env: &Env,
    hash: &Option<BytesN<32>>,
) -> Result<Option<Discount>, BillingError> {
    match hash {
        Some(hash) => read_discount(env, hash)
            .map(Some)
            .ok_or(BillingError::PromoCodeNotFound),
        None => Ok(None),
    }
}

pub fn validate_discount(discount: &Discount) -> Result<(), BillingError> {
    if discount.rate < 0 || (discount.is_percentage && discount.rate > SCALE) {
        return Err(BillingError::InvalidDiscount);
    }
    Ok(())
}

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}
