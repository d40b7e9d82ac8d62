#![cfg(test)]

use super::*;
use soroban_sdk::testutils::{storage::Persistent as _, Address as _, Ledger};

struct TokenTest<'a> {
    env: Env,
    admin: Address,
    client: CampaignTokenClient<'a>,
}

impl<'a> TokenTest<'a> {
    fn setup(time_mode: TimeMode) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let contract_id = env.register(CampaignToken, ());
        let client = CampaignTokenClient::new(&env, &contract_id);
        client.initialize(
            &admin,
            &18,
            &String::from_str(&env, "Campaign Token"),
            &String::from_str(&env, "CMP"),
            &time_mode,
        );

        TokenTest { env, admin, client }
    }

    fn set_now(&self, timestamp: u64, sequence: u32) {
        self.env.ledger().with_mut(|li| {
            li.timestamp = timestamp;
            li.sequence_number = sequence;
        });
    }
}

#[test]
fn test_initialize() {
    let test = TokenTest::setup(TimeMode::Timestamp);

    assert_eq!(test.client.admin(), test.admin);
    assert_eq!(test.client.decimals(), 18);
    assert_eq!(test.client.symbol(), String::from_str(&test.env, "CMP"));
    assert_eq!(test.client.time_mode(), TimeMode::Timestamp);
    assert!(!test.client.minting_finished());

    let result = test.client.try_initialize(
        &test.admin,
        &7,
        &String::from_str(&test.env, "Other"),
        &String::from_str(&test.env, "OTH"),
        &TimeMode::Block,
    );
    assert_eq!(result, Err(Ok(TokenError::AlreadyInitialized)));
}

#[test]
fn test_mint_accumulates_balance_and_supply() {
    let test = TokenTest::setup(TimeMode::Timestamp);
    let holder = Address::generate(&test.env);

    test.client.mint(&holder, &100, &0);
    test.client.mint(&holder, &50, &0);

    assert_eq!(test.client.balance(&holder), 150);
    assert_eq!(test.client.total_supply(), 150);
}

#[test]
fn test_release_time_keeps_the_latest_lock() {
    let test = TokenTest::setup(TimeMode::Timestamp);
    let holder = Address::generate(&test.env);

    test.client.mint(&holder, &10, &5_000);
    test.client.mint(&holder, &10, &1_000);

    assert_eq!(test.client.release_time(&holder), 5_000);
}

#[test]
fn test_holder_entries_are_kept_alive() {
    let test = TokenTest::setup(TimeMode::Timestamp);
    let holder = Address::generate(&test.env);

    test.client.mint(&holder, &10, &5_000);

    test.env.as_contract(&test.client.address, || {
        let storage = test.env.storage().persistent();
        assert_eq!(storage.get_ttl(&DataKey::Balance(holder.clone())), TTL_PERSISTENT);
        assert_eq!(storage.get_ttl(&DataKey::ReleaseTime(holder.clone())), TTL_PERSISTENT);
    });
}

#[test]
#[should_panic(expected = "Error(Contract, #3)")]
fn test_mint_after_finish_fails() {
    let test = TokenTest::setup(TimeMode::Timestamp);
    let holder = Address::generate(&test.env);

    test.client.finish_minting();
    test.client.mint(&holder, &1, &0);
}

#[test]
fn test_finish_minting_only_once() {
    let test = TokenTest::setup(TimeMode::Block);

    test.client.finish_minting();
    assert!(test.client.minting_finished());
    assert_eq!(
        test.client.try_finish_minting(),
        Err(Ok(TokenError::MintingFinished))
    );
}

#[test]
#[should_panic]
fn test_mint_requires_admin_auth() {
    let test = TokenTest::setup(TimeMode::Timestamp);
    let holder = Address::generate(&test.env);

    test.env.set_auths(&[]);
    test.client.mint(&holder, &1, &0);
}

#[test]
fn test_transfers_locked_while_minting() {
    let test = TokenTest::setup(TimeMode::Timestamp);
    let holder = Address::generate(&test.env);
    let receiver = Address::generate(&test.env);

    test.client.mint(&holder, &100, &0);
    assert_eq!(
        test.client.try_transfer(&holder, &receiver, &10),
        Err(Ok(TokenError::TransfersLocked))
    );

    test.client.finish_minting();
    test.client.transfer(&holder, &receiver, &10);
    assert_eq!(test.client.balance(&holder), 90);
    assert_eq!(test.client.balance(&receiver), 10);
}

#[test]
fn test_timestamp_lock() {
    let test = TokenTest::setup(TimeMode::Timestamp);
    let holder = Address::generate(&test.env);
    let receiver = Address::generate(&test.env);

    test.set_now(100, 10);
    test.client.mint(&holder, &100, &1_000);
    test.client.finish_minting();

    assert_eq!(
        test.client.try_transfer(&holder, &receiver, &10),
        Err(Ok(TokenError::TokensTimeLocked))
    );

    test.set_now(1_000, 10);
    test.client.transfer(&holder, &receiver, &10);
    assert_eq!(test.client.balance(&receiver), 10);
}

#[test]
fn test_block_lock() {
    let test = TokenTest::setup(TimeMode::Block);
    let holder = Address::generate(&test.env);
    let receiver = Address::generate(&test.env);

    test.set_now(10_000, 10);
    test.client.mint(&holder, &100, &50);
    test.client.finish_minting();

    // Timestamp is far past 50 but the lock is counted in ledgers
    assert_eq!(
        test.client.try_transfer(&holder, &receiver, &10),
        Err(Ok(TokenError::TokensTimeLocked))
    );

    test.set_now(10_000, 50);
    test.client.transfer(&holder, &receiver, &10);
}

#[test]
fn test_transfer_more_than_balance_fails() {
    let test = TokenTest::setup(TimeMode::Timestamp);
    let holder = Address::generate(&test.env);
    let receiver = Address::generate(&test.env);

    test.client.mint(&holder, &5, &0);
    test.client.finish_minting();

    assert_eq!(
        test.client.try_transfer(&holder, &receiver, &6),
        Err(Ok(TokenError::InsufficientBalance))
    );
}

#[test]
fn test_transfer_from_spends_allowance() {
    let test = TokenTest::setup(TimeMode::Timestamp);
    let holder = Address::generate(&test.env);
    let spender = Address::generate(&test.env);
    let receiver = Address::generate(&test.env);

    test.set_now(0, 100);
    test.client.mint(&holder, &100, &0);
    test.client.finish_minting();
    test.client.approve(&holder, &spender, &30, &200);
    assert_eq!(test.client.allowance(&holder, &spender), 30);

    test.client.transfer_from(&spender, &holder, &receiver, &20);
    assert_eq!(test.client.allowance(&holder, &spender), 10);
    assert_eq!(test.client.balance(&receiver), 20);

    assert_eq!(
        test.client.try_transfer_from(&spender, &holder, &receiver, &11),
        Err(Ok(TokenError::InsufficientAllowance))
    );
}

#[test]
fn test_expired_allowance_reads_as_zero() {
    let test = TokenTest::setup(TimeMode::Timestamp);
    let holder = Address::generate(&test.env);
    let spender = Address::generate(&test.env);

    test.set_now(0, 100);
    test.client.approve(&holder, &spender, &30, &150);

    test.set_now(0, 151);
    assert_eq!(test.client.allowance(&holder, &spender), 0);
    assert_eq!(
        test.client.try_approve(&holder, &spender, &30, &150),
        Err(Ok(TokenError::InvalidExpiration))
    );
}
