use campaign_common::TimeMode;
use soroban_sdk::{contracttype, Address, BytesN, String, Vec};

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignInfo {
    pub id: String,
    pub beneficiary: Address,
    pub name: String,
    pub website: String,
    pub whitepaper_hash: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundingParams {
    pub funding_threshold: i128,
    pub funding_goal: i128,
    pub token_price: i128, // Fixed point, payment units per whole token
    pub time_mode: TimeMode,
    pub start_time: u64,
    pub finish_time: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BonusMode {
    Flat,
    Block,
    Timestamp,
    AmountRaised,
    ContributionAmount,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BonusTier {
    pub level: i128, // Applies from this metric value upwards
    pub rate: i128,  // Fixed point multiplier
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BonusSchedule {
    pub mode: BonusMode,
    pub tiers: Vec<BonusTier>,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BillingModel {
    Prepayment,
    PostPayment,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BillingLink {
    pub address: Address,
    pub model: BillingModel,
}

/// Pre-sale tokens minted when the token is attached
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Allocation {
    pub holder: Address,
    pub amount: i128,
    pub release_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EarlySuccess {
    pub block: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    Init,
    Ready,
    InProgress,
    Success,
    Failure,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Info,
    PaymentToken,
    Params,
    Bonus,
    Billing,
    Token,
    MinContribution,
    AmountRaised,
    EarlySuccess,
    PayoutWithdrawn,
    Contribution(Address),
}
