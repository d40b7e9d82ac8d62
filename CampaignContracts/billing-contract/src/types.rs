use soroban_sdk::{contracterror, contracttype, Address, BytesN};

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days

/// Platform fee schedule, owned and updated by the billing owner
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PricingConfig {
    pub prepayment_price: i128,  // Flat fee paid up front
    pub post_payment_min: i128,  // Floor of the post-payment fee
    pub post_payment_rate: i128, // Share of the amount raised, fixed point, < 1.0
}

/// Discount attached to a promo code
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Discount {
    pub rate: i128,               // Fraction (fixed point) or flat amount
    pub is_percentage: bool,      // Interpretation of `rate`
    pub partner: Option<Address>, // Partner credited when the code is used
}

/// Promo code entry for bulk registration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PromoCode {
    pub hash: BytesN<32>,
    pub discount: Discount,
}

/// Terms frozen for a campaign when it registers for post-payment
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostPaymentConditions {
    pub min: i128,
    pub rate: i128,
    pub promo_code_hash: Option<BytesN<32>>,
    pub discount_rate: i128,      // Zero when no promo code was used
    pub is_percentage: bool,      // Interpretation of `discount_rate`
    pub partner: Option<Address>, // Partner credited on collection
}

/// Storage keys for contract data
#[contracttype]
pub enum DataKey {
    Owner,                          // Billing operator
    PaymentToken,                   // Token fees are paid in
    Pricing,                        // PricingConfig
    Discount(BytesN<32>),           // Live promo codes
    PartnerShare(Address),          // Partner revenue share
    PartnerReward(Address),         // Partner withdrawable balance
    PostPaymentConditions(Address), // Registered campaigns
    Prepaid(Address),               // Campaigns that paid up front
    Proceeds,                       // Operator withdrawable balance
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BillingError {
    AlreadyInitialized = 101,
    NotInitialized = 102,
    InvalidPrice = 103,    // Negative price or minimum
    InvalidRate = 104,     // Post-payment rate outside [0, 1.0)
    InvalidShare = 105,    // Partner share outside [0, 1.0]
    InvalidDiscount = 106, // Negative, or percentage above 1.0

    PromoCodeNotFound = 201,     // Unknown or already consumed
    NotRegistered = 202,         // No post-payment conditions
    AlreadyRegistered = 203,     // Campaign already billed
    ThresholdBelowMinimum = 204, // Threshold can't cover the minimum fee

    PaymentMismatch = 301, // Paid amount differs from the due amount
    ArithmeticOverflow = 302,

    NothingToWithdraw = 401,
}
