use crate::bonus::bonus_rate;
use crate::errors::CampaignError;
use crate::events::{Contribution, EarlySuccessReached, CONTRIBUTE, EARLY_SUCCESS};
use crate::lifecycle::current_stage;
use crate::storage::*;
use crate::types::*;
use campaign_common::token_amount;
use soroban_sdk::{log, Address, Env};

pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<i128, CampaignError> {
    contributor.require_auth();

    if current_stage(&env) != Stage::InProgress {
        return Err(CampaignError::NotInProgress);
    }
    if amount < read_min_contribution(&env) {
        return Err(CampaignError::ContributionTooSmall);
    }

    let params = read_params(&env)?;
    let amount_raised = read_amount_raised(&env);
    let new_amount_raised = amount_raised
        .checked_add(amount)
        .ok_or(CampaignError::ArithmeticOverflow)?;
    if new_amount_raised > params.funding_goal {
        return Err(CampaignError::FundingGoalExceeded);
    }

    let rate = bonus_rate(&env, &read_bonus(&env)?, amount_raised, amount);
    let tokens = token_amount(&env, amount, rate, params.token_price)
        .ok_or(CampaignError::ArithmeticOverflow)?;
    let contributed = read_contribution(&env, &contributor)
        .checked_add(amount)
        .ok_or(CampaignError::ArithmeticOverflow)?;

    write_contribution(&env, &contributor, contributed);
    env.storage()
        .instance()
        .set(&DataKey::AmountRaised, &new_amount_raised);
    extend_instance(&env);

    let early_success = if new_amount_raised == params.funding_goal {
        let record = EarlySuccess {
            block: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        };
        env.storage().instance().set(&DataKey::EarlySuccess, &record);
        Some(record)
    } else {
        None
    };

    payment_token(&env)?.transfer(&contributor, &env.current_contract_address(), &amount);
    let token = reward_token(&env)?;
    token.mint(&contributor, &tokens, &0);

    env.events().publish(
        (CONTRIBUTE, contributor.clone()),
        Contribution {
            contributor,
            amount,
            tokens,
        },
    );

    if let Some(record) = early_success {
        token.finish_minting();
        log!(&env, "funding goal reached: {}", new_amount_raised);
        env.events().publish(
            (EARLY_SUCCESS,),
            EarlySuccessReached {
                block: record.block,
                timestamp: record.timestamp,
                amount_raised: new_amount_raised,
            },
        );
    }

    Ok(tokens)
}
