use crate::helpers::{
    extend_instance, extend_persistent, read_owner, read_pricing, validate_discount, verify_owner,
};
use crate::types::{BillingError, DataKey, Discount, PricingConfig, PromoCode};
use campaign_common::SCALE;
use soroban_sdk::{log, Address, BytesN, Env, Vec};

/// 9.95 units of a 7-decimal payment token
pub const DEFAULT_PREPAYMENT_PRICE: i128 = 99_500_000;
/// 24.95 units of a 7-decimal payment token
pub const DEFAULT_POST_PAYMENT_MIN: i128 = 249_500_000;
/// 1%
pub const DEFAULT_POST_PAYMENT_RATE: i128 = SCALE / 100;

pub struct AdminModule;

pub trait AdminOperations {
    /// Initialize contract with owner and payment token, using the default pricing
    fn initialize(env: Env, owner: Address, payment_token: Address) -> Result<(), BillingError>;

    /// Set the up-front fee
    fn set_prepayment_price(env: Env, price: i128) -> Result<(), BillingError>;

    /// Set the minimum post-payment fee
    fn set_post_payment_min(env: Env, min: i128) -> Result<(), BillingError>;

    /// Set the post-payment rate, must stay below 1.0
    fn set_post_payment_rate(env: Env, rate: i128) -> Result<(), BillingError>;

    /// Set the revenue share of a partner, at most 1.0
    fn set_partner_share(env: Env, partner: Address, share: i128) -> Result<(), BillingError>;

    /// Register or replace a promo code
    fn add_promo_code(env: Env, hash: BytesN<32>, discount: Discount) -> Result<(), BillingError>;

    /// Register several promo codes, all or none
    fn add_promo_codes(env: Env, codes: Vec<PromoCode>) -> Result<(), BillingError>;

    /// Hand the contract over to a new owner
    fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), BillingError>;

    fn get_owner(env: Env) -> Result<Address, BillingError>;

    fn get_pricing(env: Env) -> Result<PricingConfig, BillingError>;
}

impl AdminOperations for AdminModule {
    fn initialize(env: Env, owner: Address, payment_token: Address) -> Result<(), BillingError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(BillingError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage()
            .instance()
            .set(&DataKey::PaymentToken, &payment_token);
        env.storage().instance().set(
            &DataKey::Pricing,
            &PricingConfig {
                prepayment_price: DEFAULT_PREPAYMENT_PRICE,
                post_payment_min: DEFAULT_POST_PAYMENT_MIN,
                post_payment_rate: DEFAULT_POST_PAYMENT_RATE,
            },
        );
        env.storage().instance().set(&DataKey::Proceeds, &0i128);
        extend_instance(&env);

        Ok(())
    }

    fn set_prepayment_price(env: Env, price: i128) -> Result<(), BillingError> {
        verify_owner(&env)?;
        if price < 0 {
            return Err(BillingError::InvalidPrice);
        }
        Self::update_pricing(&env, |pricing| pricing.prepayment_price = price)
    }

    fn set_post_payment_min(env: Env, min: i128) -> Result<(), BillingError> {
        verify_owner(&env)?;
        if min < 0 {
            return Err(BillingError::InvalidPrice);
        }
        Self::update_pricing(&env, |pricing| pricing.post_payment_min = min)
    }

    fn set_post_payment_rate(env: Env, rate: i128) -> Result<(), BillingError> {
        verify_owner(&env)?;
        if !(0..SCALE).contains(&rate) {
            return Err(BillingError::InvalidRate);
        }
        Self::update_pricing(&env, |pricing| pricing.post_payment_rate = rate)
    }

    fn set_partner_share(env: Env, partner: Address, share: i128) -> Result<(), BillingError> {
        verify_owner(&env)?;
        if !(0..=SCALE).contains(&share) {
            return Err(BillingError::InvalidShare);
        }
        let key = DataKey::PartnerShare(partner);
        env.storage().persistent().set(&key, &share);
        extend_persistent(&env, &key);
        Ok(())
    }

    fn add_promo_code(env: Env, hash: BytesN<32>, discount: Discount) -> Result<(), BillingError> {
        verify_owner(&env)?;
        validate_discount(&discount)?;
        let key = DataKey::Discount(hash);
        env.storage().persistent().set(&key, &discount);
        extend_persistent(&env, &key);
        Ok(())
    }

    fn add_promo_codes(env: Env, codes: Vec<PromoCode>) -> Result<(), BillingError> {
        verify_owner(&env)?;

        // Reject the whole batch before writing anything
        for code in codes.iter() {
            validate_discount(&code.discount)?;
        }
        for code in codes.iter() {
            let key = DataKey::Discount(code.hash);
            env.storage().persistent().set(&key, &code.discount);
            extend_persistent(&env, &key);
        }

        log!(&env, "promo codes added: {}", codes.len());
        Ok(())
    }

    fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), BillingError> {
        verify_owner(&env)?;
        env.storage().instance().set(&DataKey::Owner, &new_owner);
        Ok(())
    }

    fn get_owner(env: Env) -> Result<Address, BillingError> {
        read_owner(&env)
    }

    fn get_pricing(env: Env) -> Result<PricingConfig, BillingError> {
        read_pricing(&env)
    }
}

// Helper functions
impl AdminModule {
    fn update_pricing(
        env: &Env,
        update: impl FnOnce(&mut PricingConfig),
    ) -> Result<(), BillingError> {
        let mut pricing = read_pricing(env)?;
        update(&mut pricing);
        env.storage().instance().set(&DataKey::Pricing, &pricing);
        Ok(())
    }
}
