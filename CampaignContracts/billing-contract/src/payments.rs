use crate::helpers::{
    extend_persistent, live_discount, payment_token, read_discount, read_pricing,
};
use crate::rewards::RewardModule;
use crate::types::{BillingError, DataKey, Discount, PostPaymentConditions};
use campaign_common::{apply_discount, mul_scaled};
use soroban_sdk::{log, Address, BytesN, Env};

pub struct PaymentModule;

pub trait PaymentOperations {
    /// Up-front fee for a campaign using `promo_code_hash`; unknown codes are ignored
    fn calculate_prepayment(
        env: Env,
        promo_code_hash: Option<BytesN<32>>,
    ) -> Result<i128, BillingError>;

    /// Pull the up-front fee for `campaign` from `payer`, consuming the promo code
    fn collect_prepayment(
        env: Env,
        campaign: Address,
        payer: Address,
        promo_code_hash: Option<BytesN<32>>,
        amount: i128,
    ) -> Result<(), BillingError>;

    /// Freeze post-payment terms for the calling campaign
    fn register(
        env: Env,
        campaign: Address,
        promo_code_hash: Option<BytesN<32>>,
        funding_threshold: i128,
    ) -> Result<(), BillingError>;

    /// Post-payment fee owed by a registered campaign that raised `amount_raised`
    fn calculate_post_payment(
        env: Env,
        campaign: Address,
        amount_raised: i128,
    ) -> Result<i128, BillingError>;

    /// Pull the post-payment fee from the campaign and close its registration
    fn collect_post_payment(
        env: Env,
        campaign: Address,
        amount_raised: i128,
        amount: i128,
    ) -> Result<(), BillingError>;

    fn get_post_payment_conditions(env: Env, campaign: Address) -> Option<PostPaymentConditions>;

    fn is_prepaid(env: Env, campaign: Address) -> bool;

    fn get_discount(env: Env, promo_code_hash: BytesN<32>) -> Option<Discount>;
}

impl PaymentOperations for PaymentModule {
    fn calculate_prepayment(
        env: Env,
        promo_code_hash: Option<BytesN<32>>,
    ) -> Result<i128, BillingError> {
        let price = read_pricing(&env)?.prepayment_price;
        let discount = promo_code_hash.and_then(|hash| read_discount(&env, &hash));
        Self::discounted(&env, price, &discount)
    }

    fn collect_prepayment(
        env: Env,
        campaign: Address,
        payer: Address,
        promo_code_hash: Option<BytesN<32>>,
        amount: i128,
    ) -> Result<(), BillingError> {
        campaign.require_auth();
        payer.require_auth();
        Self::ensure_unbilled(&env, &campaign)?;

        let discount = live_discount(&env, &promo_code_hash)?;
        let due = Self::discounted(&env, read_pricing(&env)?.prepayment_price, &discount)?;
        if amount != due {
            return Err(BillingError::PaymentMismatch);
        }

        if let Some(hash) = &promo_code_hash {
            env.storage()
                .persistent()
                .remove(&DataKey::Discount(hash.clone()));
        }
        let key = DataKey::Prepaid(campaign.clone());
        env.storage().persistent().set(&key, &true);
        extend_persistent(&env, &key);
        let partner = discount.and_then(|discount| discount.partner);
        RewardModule::settle(&env, &campaign, amount, partner, promo_code_hash)?;

        if amount > 0 {
            payment_token(&env)?.transfer(&payer, &env.current_contract_address(), &amount);
        }
        Ok(())
    }

    fn register(
        env: Env,
        campaign: Address,
        promo_code_hash: Option<BytesN<32>>,
        funding_threshold: i128,
    ) -> Result<(), BillingError> {
        campaign.require_auth();
        Self::ensure_unbilled(&env, &campaign)?;

        let pricing = read_pricing(&env)?;
        if funding_threshold < pricing.post_payment_min {
            return Err(BillingError::ThresholdBelowMinimum);
        }
        let discount = live_discount(&env, &promo_code_hash)?;
        let (discount_rate, is_percentage, partner) = match discount {
            Some(discount) => (discount.rate, discount.is_percentage, discount.partner),
            None => (0, false, None),
        };

        let key = DataKey::PostPaymentConditions(campaign.clone());
        env.storage().persistent().set(
            &key,
            &PostPaymentConditions {
                min: pricing.post_payment_min,
                rate: pricing.post_payment_rate,
                promo_code_hash,
                discount_rate,
                is_percentage,
                partner,
            },
        );
        extend_persistent(&env, &key);

        log!(&env, "campaign registered for post-payment: {}", campaign);
        Ok(())
    }

    fn calculate_post_payment(
        env: Env,
        campaign: Address,
        amount_raised: i128,
    ) -> Result<i128, BillingError> {
        let conditions = Self::read_conditions(&env, &campaign)?;
        Self::post_payment_due(&env, &conditions, amount_raised)
    }

    fn collect_post_payment(
        env: Env,
        campaign: Address,
        amount_raised: i128,
        amount: i128,
    ) -> Result<(), BillingError> {
        campaign.require_auth();

        let conditions = Self::read_conditions(&env, &campaign)?;
        let due = Self::post_payment_due(&env, &conditions, amount_raised)?;
        if amount != due {
            return Err(BillingError::PaymentMismatch);
        }

        env.storage()
            .persistent()
            .remove(&DataKey::PostPaymentConditions(campaign.clone()));
        if let Some(hash) = &conditions.promo_code_hash {
            env.storage()
                .persistent()
                .remove(&DataKey::Discount(hash.clone()));
        }
        RewardModule::settle(
            &env,
            &campaign,
            amount,
            conditions.partner,
            conditions.promo_code_hash,
        )?;

        if amount > 0 {
            payment_token(&env)?.transfer(&campaign, &env.current_contract_address(), &amount);
        }
        Ok(())
    }

    fn get_post_payment_conditions(env: Env, campaign: Address) -> Option<PostPaymentConditions> {
        env.storage()
            .persistent()
            .get(&DataKey::PostPaymentConditions(campaign))
    }

    fn is_prepaid(env: Env, campaign: Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Prepaid(campaign))
            .unwrap_or(false)
    }

    fn get_discount(env: Env, promo_code_hash: BytesN<32>) -> Option<Discount> {
        read_discount(&env, &promo_code_hash)
    }
}

// Helper functions
impl PaymentModule {
    fn discounted(
        env: &Env,
        price: i128,
        discount: &Option<Discount>,
    ) -> Result<i128, BillingError> {
        match discount {
            Some(discount) => apply_discount(env, price, discount.rate, discount.is_percentage)
                .ok_or(BillingError::ArithmeticOverflow),
            None => Ok(price),
        }
    }

    /// A zero `discount_rate` leaves the fee untouched in both discount kinds.
    fn post_payment_due(
        env: &Env,
        conditions: &PostPaymentConditions,
        amount_raised: i128,
    ) -> Result<i128, BillingError> {
        let proportional = mul_scaled(env, amount_raised, conditions.rate)
            .ok_or(BillingError::ArithmeticOverflow)?;
        apply_discount(
            env,
            proportional.max(conditions.min),
            conditions.discount_rate,
            conditions.is_percentage,
        )
        .ok_or(BillingError::ArithmeticOverflow)
    }

    fn read_conditions(
        env: &Env,
        campaign: &Address,
    ) -> Result<PostPaymentConditions, BillingError> {
        env.storage()
            .persistent()
            .get(&DataKey::PostPaymentConditions(campaign.clone()))
            .ok_or(BillingError::NotRegistered)
    }

    /// A campaign is billed under exactly one model.
    fn ensure_unbilled(env: &Env, campaign: &Address) -> Result<(), BillingError> {
        let storage = env.storage().persistent();
        if storage.has(&DataKey::Prepaid(campaign.clone()))
            || storage.has(&DataKey::PostPaymentConditions(campaign.clone()))
        {
            return Err(BillingError::AlreadyRegistered);
        }
        Ok(())
    }
}
