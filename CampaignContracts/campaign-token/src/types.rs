use soroban_sdk::{contracterror, contracttype, Address, String};

pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                   // Minter, normally the campaign
    Metadata,                // Decimals, name and symbol
    TimeMode,                // Clock used for release times
    MintingFinished,         // Set once, unlocks transfers
    TotalSupply,             // Sum of all balances
    Balance(Address),        // Holder balance
    ReleaseTime(Address),    // Holder lock, in TimeMode units
    Allowance(AllowanceKey), // Spender allowance
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    MintingFinished = 3,
    TransfersLocked = 4,      // Minting still open
    TokensTimeLocked = 5,     // Holder release time not reached
    InsufficientBalance = 6,
    InsufficientAllowance = 7,
    InvalidAmount = 8,
    InvalidExpiration = 9,
    ArithmeticOverflow = 10,
}
