use crate::types::BillingModel;
use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

pub const CONTRIBUTE: Symbol = symbol_short!("contrib");
pub const EARLY_SUCCESS: Symbol = symbol_short!("early");
pub const PAYOUT: Symbol = symbol_short!("payout");
pub const REFUND: Symbol = symbol_short!("refund");
pub const PARAMS: Symbol = symbol_short!("params");
pub const BILLING: Symbol = symbol_short!("billing");
pub const TOKEN: Symbol = symbol_short!("token");
pub const RELEASE: Symbol = symbol_short!("release");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    pub contributor: Address,
    pub amount: i128,
    pub tokens: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EarlySuccessReached {
    pub block: u32,
    pub timestamp: u64,
    pub amount_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    pub recipient: Address,
    pub amount: i128,
    pub fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refund {
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParamsSet {
    pub funding_threshold: i128,
    pub funding_goal: i128,
    pub start_time: u64,
    pub finish_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BillingAttached {
    pub billing: Address,
    pub model: BillingModel,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenAttached {
    pub token: Address,
    pub min_contribution: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensReleased {
    pub token: Address,
    pub amount_raised: i128,
}
