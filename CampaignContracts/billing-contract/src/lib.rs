#![no_std]
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

mod admin;
mod events;
mod helpers;
mod payments;
mod rewards;
mod types;

pub use admin::{DEFAULT_POST_PAYMENT_MIN, DEFAULT_POST_PAYMENT_RATE, DEFAULT_PREPAYMENT_PRICE};
pub use events::*;
pub use types::*;

use admin::*;
use payments::*;
use rewards::*;

#[contract]
pub struct BillingContract;

#[contractimpl]
impl BillingContract {
    /// Initializes billing with its owner and the token fees are paid in
    ///
    /// # Arguments
    /// * `owner` - The address operating the platform and collecting proceeds
    /// * `payment_token` - The token campaigns pay fees with
    pub fn initialize(env: Env, owner: Address, payment_token: Address) -> Result<(), BillingError> {
        AdminModule::initialize(env, owner, payment_token)
    }

    pub fn set_prepayment_price(env: Env, price: i128) -> Result<(), BillingError> {
        AdminModule::set_prepayment_price(env, price)
    }

    pub fn set_post_payment_min(env: Env, min: i128) -> Result<(), BillingError> {
        AdminModule::set_post_payment_min(env, min)
    }

    /// Sets the share of the amount raised charged at payout
    ///
    /// # Arguments
    /// * `rate` - Fixed point, `10^18` is 100%; must be below 100%
    pub fn set_post_payment_rate(env: Env, rate: i128) -> Result<(), BillingError> {
        AdminModule::set_post_payment_rate(env, rate)
    }

    /// Sets the share of each fee a partner earns through its promo codes
    ///
    /// # Arguments
    /// * `partner` - The partner address
    /// * `share` - Fixed point, at most `10^18`
    pub fn set_partner_share(env: Env, partner: Address, share: i128) -> Result<(), BillingError> {
        AdminModule::set_partner_share(env, partner, share)
    }

    /// Registers a single-use promo code
    ///
    /// # Arguments
    /// * `hash` - Digest of the promo code
    /// * `discount` - Percentage or flat discount, optionally credited to a partner
    pub fn add_promo_code(env: Env, hash: BytesN<32>, discount: Discount) -> Result<(), BillingError> {
        AdminModule::add_promo_code(env, hash, discount)
    }

    pub fn add_promo_codes(env: Env, codes: Vec<PromoCode>) -> Result<(), BillingError> {
        AdminModule::add_promo_codes(env, codes)
    }

    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), BillingError> {
        AdminModule::transfer_ownership(env, new_owner)
    }

    pub fn get_owner(env: Env) -> Result<Address, BillingError> {
        AdminModule::get_owner(env)
    }

    pub fn get_pricing(env: Env) -> Result<PricingConfig, BillingError> {
        AdminModule::get_pricing(env)
    }

    /// Returns the up-front fee, discounted when the promo code is live
    pub fn calculate_prepayment(
        env: Env,
        promo_code_hash: Option<BytesN<32>>,
    ) -> Result<i128, BillingError> {
        PaymentModule::calculate_prepayment(env, promo_code_hash)
    }

    /// Collects the up-front fee for a campaign
    ///
    /// # Arguments
    /// * `campaign` - The campaign being billed
    /// * `payer` - The account the fee is pulled from
    /// * `promo_code_hash` - Promo code to consume, if any
    /// * `amount` - Must equal `calculate_prepayment(promo_code_hash)`
    pub fn collect_prepayment(
        env: Env,
        campaign: Address,
        payer: Address,
        promo_code_hash: Option<BytesN<32>>,
        amount: i128,
    ) -> Result<(), BillingError> {
        PaymentModule::collect_prepayment(env, campaign, payer, promo_code_hash, amount)
    }

    /// Registers a campaign for post-payment, freezing the current terms
    ///
    /// # Arguments
    /// * `campaign` - The calling campaign
    /// * `promo_code_hash` - Promo code to apply at settlement, if any
    /// * `funding_threshold` - The campaign threshold, at least the minimum fee
    pub fn register(
        env: Env,
        campaign: Address,
        promo_code_hash: Option<BytesN<32>>,
        funding_threshold: i128,
    ) -> Result<(), BillingError> {
        PaymentModule::register(env, campaign, promo_code_hash, funding_threshold)
    }

    pub fn calculate_post_payment(
        env: Env,
        campaign: Address,
        amount_raised: i128,
    ) -> Result<i128, BillingError> {
        PaymentModule::calculate_post_payment(env, campaign, amount_raised)
    }

    /// Collects the post-payment fee from a registered campaign
    ///
    /// # Arguments
    /// * `campaign` - The calling campaign
    /// * `amount_raised` - What the campaign raised
    /// * `amount` - Must equal `calculate_post_payment(campaign, amount_raised)`
    pub fn collect_post_payment(
        env: Env,
        campaign: Address,
        amount_raised: i128,
        amount: i128,
    ) -> Result<(), BillingError> {
        PaymentModule::collect_post_payment(env, campaign, amount_raised, amount)
    }

    pub fn get_post_payment_conditions(
        env: Env,
        campaign: Address,
    ) -> Option<PostPaymentConditions> {
        PaymentModule::get_post_payment_conditions(env, campaign)
    }

    pub fn is_prepaid(env: Env, campaign: Address) -> bool {
        PaymentModule::is_prepaid(env, campaign)
    }

    pub fn get_discount(env: Env, promo_code_hash: BytesN<32>) -> Option<Discount> {
        PaymentModule::get_discount(env, promo_code_hash)
    }

    /// Sends the operator proceeds to the owner, returning the amount
    pub fn withdraw_proceeds(env: Env) -> Result<i128, BillingError> {
        RewardModule::withdraw_proceeds(env)
    }

    /// Sends a partner its rewards, returning the amount
    pub fn withdraw_rewards(env: Env, partner: Address) -> Result<i128, BillingError> {
        RewardModule::withdraw_rewards(env, partner)
    }

    pub fn get_proceeds(env: Env) -> i128 {
        RewardModule::get_proceeds(env)
    }

    pub fn get_partner_share(env: Env, partner: Address) -> i128 {
        RewardModule::get_partner_share(env, partner)
    }

    pub fn get_partner_reward(env: Env, partner: Address) -> i128 {
        RewardModule::get_partner_reward(env, partner)
    }
}
