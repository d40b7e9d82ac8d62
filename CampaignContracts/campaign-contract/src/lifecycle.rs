use crate::storage::{read_amount_raised, read_early_success, read_params};
use crate::types::{DataKey, FundingParams, Stage};
use soroban_sdk::Env;

/// Derives the campaign stage from the clock and the funding ledger.
pub fn current_stage(env: &Env) -> Stage {
    let params = match read_params(env) {
        Ok(params) => params,
        Err(_) => return Stage::Init,
    };
    let storage = env.storage().instance();
    if !storage.has(&DataKey::Billing) || !storage.has(&DataKey::Token) {
        return Stage::Init;
    }

    let goal_reached = read_early_success(env).is_some();
    derive(&params, params.time_mode.now(env), read_amount_raised(env), goal_reached)
}

/// Reaching the goal wins over the finish time.
pub fn derive(params: &FundingParams, now: u64, amount_raised: i128, goal_reached: bool) -> Stage {
    if now < params.start_time {
        Stage::Ready
    } else if goal_reached || amount_raised >= params.funding_goal {
        Stage::Success
    } else if now < params.finish_time {
        Stage::InProgress
    } else if amount_raised >= params.funding_threshold {
        Stage::Success
    } else {
        Stage::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_common::TimeMode;

    fn params() -> FundingParams {
        FundingParams {
            funding_threshold: 100,
            funding_goal: 1_000,
            token_price: 1,
            time_mode: TimeMode::Timestamp,
            start_time: 10,
            finish_time: 20,
        }
    }

    #[test]
    fn test_stage_by_time_and_funding() {
        let p = params();

        assert_eq!(derive(&p, 9, 0, false), Stage::Ready);
        assert_eq!(derive(&p, 10, 0, false), Stage::InProgress);
        assert_eq!(derive(&p, 19, 999, false), Stage::InProgress);
        assert_eq!(derive(&p, 20, 99, false), Stage::Failure);
        assert_eq!(derive(&p, 20, 100, false), Stage::Success);
    }

    #[test]
    fn test_goal_forces_success_before_finish() {
        let p = params();

        assert_eq!(derive(&p, 15, 1_000, true), Stage::Success);
        assert_eq!(derive(&p, 15, 1_000, false), Stage::Success);
        assert_eq!(derive(&p, 500, 1_000, true), Stage::Success);
    }
}
