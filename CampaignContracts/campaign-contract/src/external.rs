use campaign_common::TimeMode;
use soroban_sdk::{contractclient, Address, BytesN};

/// Reward token the campaign mints into.
#[allow(dead_code)]
#[contractclient(name = "RewardTokenClient")]
pub trait RewardToken {
    fn mint(to: Address, amount: i128, release_time: u64);
    fn finish_minting();
    fn minting_finished() -> bool;
    fn decimals() -> u32;
    fn admin() -> Address;
    fn time_mode() -> TimeMode;
}

/// Billing contract settling the platform fee.
#[allow(dead_code)]
#[contractclient(name = "BillingClient")]
pub trait Billing {
    fn calculate_prepayment(promo_code_hash: Option<BytesN<32>>) -> i128;
    fn collect_prepayment(
        campaign: Address,
        payer: Address,
        promo_code_hash: Option<BytesN<32>>,
        amount: i128,
    );
    fn register(campaign: Address, promo_code_hash: Option<BytesN<32>>, funding_threshold: i128);
    fn calculate_post_payment(campaign: Address, amount_raised: i128) -> i128;
    fn collect_post_payment(campaign: Address, amount_raised: i128, amount: i128);
}
