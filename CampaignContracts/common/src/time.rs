use soroban_sdk::{contracttype, Env};

/// Clock a campaign (and its token locks) is measured against.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeMode {
    Block,     // Ledger sequence number
    Timestamp, // Ledger close time, seconds
}

impl TimeMode {
    /// Current time reference for this mode.
    pub fn now(&self, env: &Env) -> u64 {
        match self {
            TimeMode::Block => env.ledger().sequence() as u64,
            TimeMode::Timestamp => env.ledger().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Ledger;

    #[test]
    fn test_now_follows_the_selected_clock() {
        let env = Env::default();
        env.ledger().with_mut(|li| {
            li.sequence_number = 1_234;
            li.timestamp = 1_700_000_000;
        });

        assert_eq!(TimeMode::Block.now(&env), 1_234);
        assert_eq!(TimeMode::Timestamp.now(&env), 1_700_000_000);
    }
}
