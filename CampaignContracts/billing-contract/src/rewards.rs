use crate::events::{Payment, Reward, Withdrawal, PAYMENT, REWARD, WITHDRAW};
use crate::helpers::{extend_instance, extend_persistent, payment_token, verify_owner};
use crate::types::{BillingError, DataKey};
use campaign_common::mul_scaled;
use soroban_sdk::{log, Address, BytesN, Env};

pub struct RewardModule;

pub trait RewardOperations {
    /// Send the accumulated operator proceeds to the owner
    fn withdraw_proceeds(env: Env) -> Result<i128, BillingError>;

    /// Send a partner its accumulated rewards
    fn withdraw_rewards(env: Env, partner: Address) -> Result<i128, BillingError>;

    fn get_proceeds(env: Env) -> i128;

    fn get_partner_share(env: Env, partner: Address) -> i128;

    fn get_partner_reward(env: Env, partner: Address) -> i128;
}

impl RewardOperations for RewardModule {
    fn withdraw_proceeds(env: Env) -> Result<i128, BillingError> {
        let owner = verify_owner(&env)?;

        let amount = Self::read_proceeds(&env);
        if amount <= 0 {
            return Err(BillingError::NothingToWithdraw);
        }
        env.storage().instance().set(&DataKey::Proceeds, &0i128);

        Self::pay_out(&env, &owner, amount)?;
        Ok(amount)
    }

    fn withdraw_rewards(env: Env, partner: Address) -> Result<i128, BillingError> {
        partner.require_auth();

        let amount = Self::read_partner_reward(&env, &partner);
        if amount <= 0 {
            return Err(BillingError::NothingToWithdraw);
        }
        env.storage()
            .persistent()
            .set(&DataKey::PartnerReward(partner.clone()), &0i128);

        Self::pay_out(&env, &partner, amount)?;
        Ok(amount)
    }

    fn get_proceeds(env: Env) -> i128 {
        Self::read_proceeds(&env)
    }

    fn get_partner_share(env: Env, partner: Address) -> i128 {
        Self::read_partner_share(&env, &partner)
    }

    fn get_partner_reward(env: Env, partner: Address) -> i128 {
        Self::read_partner_reward(&env, &partner)
    }
}

// Helper functions
impl RewardModule {
    /// Splits a settled fee between the partner behind the promo code and the operator.
    pub fn settle(
        env: &Env,
        campaign: &Address,
        amount: i128,
        partner: Option<Address>,
        promo_code_hash: Option<BytesN<32>>,
    ) -> Result<(), BillingError> {
        let reward = match &partner {
            Some(partner) => {
                let share = Self::read_partner_share(env, partner);
                mul_scaled(env, amount, share).ok_or(BillingError::ArithmeticOverflow)?
            }
            None => 0,
        };

        if let Some(partner) = &partner {
            let balance = Self::read_partner_reward(env, partner)
                .checked_add(reward)
                .ok_or(BillingError::ArithmeticOverflow)?;
            let key = DataKey::PartnerReward(partner.clone());
            env.storage().persistent().set(&key, &balance);
            extend_persistent(env, &key);
        }
        let proceeds = Self::read_proceeds(env)
            .checked_add(amount - reward)
            .ok_or(BillingError::ArithmeticOverflow)?;
        env.storage().instance().set(&DataKey::Proceeds, &proceeds);
        extend_instance(env);

        env.events().publish(
            (PAYMENT, campaign.clone()),
            Payment {
                campaign: campaign.clone(),
                amount,
                partner: partner.clone(),
                promo_code_hash: promo_code_hash.clone(),
            },
        );
        if let Some(partner) = partner {
            if reward > 0 {
                env.events().publish(
                    (REWARD, partner.clone()),
                    Reward {
                        partner,
                        promo_code_hash,
                        campaign: campaign.clone(),
                        amount: reward,
                    },
                );
            }
        }

        log!(env, "payment settled: {}, partner reward {}", amount, reward);
        Ok(())
    }

    fn pay_out(env: &Env, recipient: &Address, amount: i128) -> Result<(), BillingError> {
        payment_token(env)?.transfer(&env.current_contract_address(), recipient, &amount);
        env.events().publish(
            (WITHDRAW, recipient.clone()),
            Withdrawal {
                recipient: recipient.clone(),
                amount,
            },
        );
        Ok(())
    }

    fn read_proceeds(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::Proceeds)
            .unwrap_or(0)
    }

    fn read_partner_share(env: &Env, partner: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::PartnerShare(partner.clone()))
            .unwrap_or(0)
    }

    fn read_partner_reward(env: &Env, partner: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::PartnerReward(partner.clone()))
            .unwrap_or(0)
    }
}
