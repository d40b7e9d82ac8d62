#![no_std]
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

mod bonus;
mod errors;
mod events;
mod external;
mod funding;
mod lifecycle;
mod settlement;
mod setup;
mod storage;
mod types;

pub use errors::*;
pub use events::*;
pub use external::{BillingClient, RewardTokenClient};
pub use types::*;

/// A single crowdfunding campaign.
///
/// Contributions are accepted in the payment token while the campaign is in
/// progress and converted into reward tokens at the bonus-adjusted price. The
/// stage is never stored; it is derived from the clock and the amount raised.
#[contract]
pub struct Campaign;

#[contractimpl]
impl Campaign {
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        owner: Address,
        id: String,
        beneficiary: Address,
        name: String,
        website: String,
        whitepaper_hash: BytesN<32>,
        payment_token: Address,
    ) -> Result<(), CampaignError> {
        let info = CampaignInfo {
            id,
            beneficiary,
            name,
            website,
            whitepaper_hash,
        };
        setup::initialize(env, owner, info, payment_token)
    }

    // Setup, owner only and each step once
    pub fn set_params(
        env: Env,
        params: FundingParams,
        bonus: BonusSchedule,
    ) -> Result<(), CampaignError> {
        setup::set_params(env, params, bonus)
    }

    pub fn set_billing(
        env: Env,
        billing: Address,
        model: BillingModel,
        promo_code_hash: Option<BytesN<32>>,
    ) -> Result<(), CampaignError> {
        setup::set_billing(env, billing, model, promo_code_hash)
    }

    pub fn create_token(
        env: Env,
        token: Address,
        allocations: Vec<Allocation>,
    ) -> Result<(), CampaignError> {
        setup::create_token(env, token, allocations)
    }

    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), CampaignError> {
        setup::transfer_ownership(env, new_owner)
    }

    // Funding functions
    /// Returns the number of reward tokens minted for the contribution.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<i128, CampaignError> {
        funding::contribute(env, contributor, amount)
    }

    pub fn release_tokens(env: Env) -> Result<(), CampaignError> {
        settlement::release_tokens(env)
    }

    pub fn withdraw_payout(env: Env) -> Result<i128, CampaignError> {
        settlement::withdraw_payout(env)
    }

    pub fn withdraw_refund(env: Env, contributor: Address) -> Result<i128, CampaignError> {
        settlement::withdraw_refund(env, contributor)
    }

    // Read functions
    pub fn stage(env: Env) -> Stage {
        lifecycle::current_stage(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, CampaignError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(CampaignError::NotInitialized)
    }

    pub fn get_info(env: Env) -> Result<CampaignInfo, CampaignError> {
        storage::read_info(&env)
    }

    pub fn get_payment_token(env: Env) -> Result<Address, CampaignError> {
        storage::read_payment_token(&env)
    }

    pub fn get_params(env: Env) -> Result<FundingParams, CampaignError> {
        storage::read_params(&env)
    }

    pub fn get_bonus(env: Env) -> Result<BonusSchedule, CampaignError> {
        storage::read_bonus(&env)
    }

    pub fn get_billing(env: Env) -> Result<BillingLink, CampaignError> {
        storage::read_billing(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, CampaignError> {
        storage::read_token(&env)
    }

    pub fn get_min_contribution(env: Env) -> i128 {
        storage::read_min_contribution(&env)
    }

    pub fn get_amount_raised(env: Env) -> i128 {
        storage::read_amount_raised(&env)
    }

    pub fn get_contribution(env: Env, contributor: Address) -> i128 {
        storage::read_contribution(&env, &contributor)
    }

    pub fn get_early_success(env: Env) -> Option<EarlySuccess> {
        storage::read_early_success(&env)
    }

    pub fn is_payout_withdrawn(env: Env) -> bool {
        storage::is_payout_withdrawn(&env)
    }
}
