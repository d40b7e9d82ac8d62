use crate::types::{BonusMode, BonusSchedule, BonusTier};
use campaign_common::{TimeMode, SCALE};
use soroban_sdk::{Env, Vec};

/// Bonus multiplier for a contribution of `amount` made after `amount_raised`.
pub fn bonus_rate(env: &Env, schedule: &BonusSchedule, amount_raised: i128, amount: i128) -> i128 {
    let metric = match schedule.mode {
        BonusMode::Flat => return SCALE,
        BonusMode::Block => TimeMode::Block.now(env) as i128,
        BonusMode::Timestamp => TimeMode::Timestamp.now(env) as i128,
        BonusMode::AmountRaised => amount_raised,
        BonusMode::ContributionAmount => amount,
    };
    tier_rate(&schedule.tiers, metric)
}

/// Rate of the highest tier whose level is at most `metric`, `1.0` below the first tier.
///
/// Tiers are ordered by strictly ascending level.
pub fn tier_rate(tiers: &Vec<BonusTier>, metric: i128) -> i128 {
    let mut rate = SCALE;
    for tier in tiers.iter() {
        if tier.level > metric {
            break;
        }
        rate = tier.rate;
    }
    rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Ledger, vec};

    fn tiers(env: &Env) -> Vec<BonusTier> {
        vec![
            env,
            BonusTier {
                level: 100,
                rate: SCALE * 3 / 2,
            },
            BonusTier {
                level: 200,
                rate: SCALE / 2,
            },
            BonusTier {
                level: 300,
                rate: SCALE * 2,
            },
        ]
    }

    #[test]
    fn test_greatest_level_at_or_below_metric() {
        let env = Env::default();
        let tiers = tiers(&env);

        assert_eq!(tier_rate(&tiers, 99), SCALE);
        assert_eq!(tier_rate(&tiers, 100), SCALE * 3 / 2);
        assert_eq!(tier_rate(&tiers, 199), SCALE * 3 / 2);
        // Rates keep their declared pairing even when not monotonic
        assert_eq!(tier_rate(&tiers, 250), SCALE / 2);
        assert_eq!(tier_rate(&tiers, 10_000), SCALE * 2);
        assert_eq!(tier_rate(&Vec::new(&env), 10_000), SCALE);
    }

    #[test]
    fn test_metric_by_mode() {
        let env = Env::default();
        env.ledger().with_mut(|li| {
            li.sequence_number = 150;
            li.timestamp = 250;
        });
        let schedule = |mode| BonusSchedule {
            mode,
            tiers: tiers(&env),
        };

        assert_eq!(bonus_rate(&env, &schedule(BonusMode::Flat), 1_000, 1_000), SCALE);
        assert_eq!(
            bonus_rate(&env, &schedule(BonusMode::Block), 0, 0),
            SCALE * 3 / 2
        );
        assert_eq!(
            bonus_rate(&env, &schedule(BonusMode::Timestamp), 0, 0),
            SCALE / 2
        );
        assert_eq!(
            bonus_rate(&env, &schedule(BonusMode::AmountRaised), 300, 1),
            SCALE * 2
        );
        assert_eq!(
            bonus_rate(&env, &schedule(BonusMode::ContributionAmount), 300, 1),
            SCALE
        );
    }
}
