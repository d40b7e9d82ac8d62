use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Symbol};

pub const PAYMENT: Symbol = symbol_short!("payment");
pub const REWARD: Symbol = symbol_short!("reward");
pub const WITHDRAW: Symbol = symbol_short!("withdraw");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payment {
    pub campaign: Address,
    pub amount: i128,
    pub partner: Option<Address>,
    pub promo_code_hash: Option<BytesN<32>>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Reward {
    pub partner: Address,
    pub promo_code_hash: Option<BytesN<32>>,
    pub campaign: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawal {
    pub recipient: Address,
    pub amount: i128,
}
