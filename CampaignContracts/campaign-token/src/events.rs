use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

pub const MINT: Symbol = symbol_short!("mint");
pub const FINISHED: Symbol = symbol_short!("finished");
pub const TRANSFER: Symbol = symbol_short!("transfer");
pub const APPROVE: Symbol = symbol_short!("approve");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Minted {
    pub to: Address,
    pub amount: i128,
    pub release_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintingFinished {
    pub total_supply: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transferred {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Approved {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
    pub expiration_ledger: u32,
}
