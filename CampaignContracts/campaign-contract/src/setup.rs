use crate::errors::CampaignError;
use crate::events::*;
use crate::external::RewardTokenClient;
use crate::storage::*;
use crate::types::*;
use campaign_common::min_contribution;
use soroban_sdk::{log, Address, BytesN, Env, Vec};

pub fn initialize(
    env: Env,
    owner: Address,
    info: CampaignInfo,
    payment_token: Address,
) -> Result<(), CampaignError> {
    if env.storage().instance().has(&DataKey::Owner) {
        return Err(CampaignError::AlreadyInitialized);
    }
    env.storage().instance().set(&DataKey::Owner, &owner);
    env.storage().instance().set(&DataKey::Info, &info);
    env.storage()
        .instance()
        .set(&DataKey::PaymentToken, &payment_token);
    env.storage().instance().set(&DataKey::AmountRaised, &0i128);
    extend_instance(&env);
    Ok(())
}

pub fn set_params(
    env: Env,
    params: FundingParams,
    bonus: BonusSchedule,
) -> Result<(), CampaignError> {
    verify_owner(&env)?;
    if env.storage().instance().has(&DataKey::Params) {
        return Err(CampaignError::ParamsAlreadySet);
    }

    validate_params(&env, &params)?;
    validate_bonus(&bonus)?;

    env.storage().instance().set(&DataKey::Params, &params);
    env.storage().instance().set(&DataKey::Bonus, &bonus);

    log!(
        &env,
        "funding params set: goal {}, threshold {}",
        params.funding_goal,
        params.funding_threshold
    );
    env.events().publish(
        (PARAMS,),
        ParamsSet {
            funding_threshold: params.funding_threshold,
            funding_goal: params.funding_goal,
            start_time: params.start_time,
            finish_time: params.finish_time,
        },
    );
    Ok(())
}

fn validate_params(env: &Env, params: &FundingParams) -> Result<(), CampaignError> {
    if params.funding_threshold <= 0 {
        return Err(CampaignError::InvalidFundingThreshold);
    }
    if params.funding_threshold > params.funding_goal {
        return Err(CampaignError::ThresholdAboveGoal);
    }
    if params.token_price <= 0 {
        return Err(CampaignError::InvalidTokenPrice);
    }
    if params.start_time >= params.finish_time {
        return Err(CampaignError::InvalidSchedule);
    }
    if params.start_time < params.time_mode.now(env) {
        return Err(CampaignError::StartInPast);
    }
    Ok(())
}

fn validate_bonus(bonus: &BonusSchedule) -> Result<(), CampaignError> {
    let mut previous: Option<i128> = None;
    for tier in bonus.tiers.iter() {
        if tier.rate <= 0 {
            return Err(CampaignError::InvalidBonusRate);
        }
        if previous.map_or(false, |level| tier.level <= level) {
            return Err(CampaignError::BonusLevelsNotAscending);
        }
        previous = Some(tier.level);
    }
    Ok(())
}

/// Attaches billing and settles it under the chosen model.
pub fn set_billing(
    env: Env,
    billing: Address,
    model: BillingModel,
    promo_code_hash: Option<BytesN<32>>,
) -> Result<(), CampaignError> {
    let owner = verify_owner(&env)?;
    let params = read_params(&env)?;
    if env.storage().instance().has(&DataKey::Billing) {
        return Err(CampaignError::BillingAlreadySet);
    }

    let link = BillingLink {
        address: billing.clone(),
        model,
    };
    env.storage().instance().set(&DataKey::Billing, &link);

    let client = billing_client(&env, &link);
    let campaign = env.current_contract_address();
    match model {
        BillingModel::Prepayment => {
            let due = client.calculate_prepayment(&promo_code_hash);
            client.collect_prepayment(&campaign, &owner, &promo_code_hash, &due);
            log!(&env, "prepaid billing: {}", due);
        }
        BillingModel::PostPayment => {
            client.register(&campaign, &promo_code_hash, &params.funding_threshold);
        }
    }

    env.events()
        .publish((BILLING,), BillingAttached { billing, model });
    Ok(())
}

/// Attaches the reward token and mints the pre-sale allocations.
pub fn create_token(
    env: Env,
    token: Address,
    allocations: Vec<Allocation>,
) -> Result<(), CampaignError> {
    verify_owner(&env)?;
    let params = read_params(&env)?;
    read_billing(&env)?;
    if env.storage().instance().has(&DataKey::Token) {
        return Err(CampaignError::TokenAlreadySet);
    }

    let client = RewardTokenClient::new(&env, &token);
    if client.admin() != env.current_contract_address() {
        return Err(CampaignError::TokenNotOwned);
    }
    if client.minting_finished() {
        return Err(CampaignError::TokenMintingFinished);
    }
    if client.time_mode() != params.time_mode {
        return Err(CampaignError::TokenTimeModeMismatch);
    }
    for allocation in allocations.iter() {
        if allocation.amount <= 0 {
            return Err(CampaignError::InvalidAllocation);
        }
    }

    let min = min_contribution(params.token_price, client.decimals());
    env.storage().instance().set(&DataKey::Token, &token);
    env.storage()
        .instance()
        .set(&DataKey::MinContribution, &min);

    for allocation in allocations.iter() {
        client.mint(&allocation.holder, &allocation.amount, &allocation.release_time);
    }

    env.events().publish(
        (TOKEN,),
        TokenAttached {
            token,
            min_contribution: min,
        },
    );
    Ok(())
}

pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), CampaignError> {
    verify_owner(&env)?;
    env.storage().instance().set(&DataKey::Owner, &new_owner);
    Ok(())
}
