use crate::errors::CampaignError;
use crate::events::{Payout, Refund, TokensReleased, PAYOUT, REFUND, RELEASE};
use crate::lifecycle::current_stage;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{log, vec, Address, Env, IntoVal, Symbol};

pub fn release_tokens(env: Env) -> Result<(), CampaignError> {
    if current_stage(&env) != Stage::Success {
        return Err(CampaignError::NotSuccessful);
    }
    let token = reward_token(&env)?;
    if token.minting_finished() {
        return Err(CampaignError::TokensAlreadyReleased);
    }

    token.finish_minting();
    env.events().publish(
        (RELEASE,),
        TokensReleased {
            token: token.address.clone(),
            amount_raised: read_amount_raised(&env),
        },
    );
    Ok(())
}

/// Pays the beneficiary what is left after the post-payment fee.
pub fn withdraw_payout(env: Env) -> Result<i128, CampaignError> {
    let beneficiary = read_info(&env)?.beneficiary;
    beneficiary.require_auth();

    if current_stage(&env) != Stage::Success {
        return Err(CampaignError::NotSuccessful);
    }
    if is_payout_withdrawn(&env) {
        return Err(CampaignError::PayoutAlreadyWithdrawn);
    }

    let campaign = env.current_contract_address();
    let payments = payment_token(&env)?;
    let link = read_billing(&env)?;
    let amount_raised = read_amount_raised(&env);
    let balance = payments.balance(&campaign);
    let fee = match link.model {
        BillingModel::PostPayment => {
            billing_client(&env, &link).calculate_post_payment(&campaign, &amount_raised)
        }
        BillingModel::Prepayment => 0,
    };
    let payout = balance
        .checked_sub(fee)
        .filter(|payout| *payout >= 0)
        .ok_or(CampaignError::InsufficientBalance)?;

    env.storage()
        .instance()
        .set(&DataKey::PayoutWithdrawn, &true);

    let token = reward_token(&env)?;
    if !token.minting_finished() {
        token.finish_minting();
    }

    if link.model == BillingModel::PostPayment {
        if fee > 0 {
            // Billing pulls the fee from this contract
            env.authorize_as_current_contract(vec![
                &env,
                InvokerContractAuthEntry::Contract(SubContractInvocation {
                    context: ContractContext {
                        contract: payments.address.clone(),
                        fn_name: Symbol::new(&env, "transfer"),
                        args: (campaign.clone(), link.address.clone(), fee).into_val(&env),
                    },
                    sub_invocations: vec![&env],
                }),
            ]);
        }
        billing_client(&env, &link).collect_post_payment(&campaign, &amount_raised, &fee);
    }

    if payout > 0 {
        payments.transfer(&campaign, &beneficiary, &payout);
    }

    log!(&env, "payout withdrawn: {}, fee {}", payout, fee);
    env.events().publish(
        (PAYOUT, beneficiary.clone()),
        Payout {
            recipient: beneficiary,
            amount: payout,
            fee,
        },
    );
    Ok(payout)
}

pub fn withdraw_refund(env: Env, contributor: Address) -> Result<i128, CampaignError> {
    contributor.require_auth();

    if current_stage(&env) != Stage::Failure {
        return Err(CampaignError::NotFailed);
    }
    let amount = read_contribution(&env, &contributor);
    if amount <= 0 {
        return Err(CampaignError::NothingToRefund);
    }

    write_contribution(&env, &contributor, 0);
    payment_token(&env)?.transfer(&env.current_contract_address(), &contributor, &amount);

    log!(&env, "refund: {}", amount);
    env.events().publish(
        (REFUND, contributor.clone()),
        Refund {
            recipient: contributor,
            amount,
        },
    );
    Ok(amount)
}
