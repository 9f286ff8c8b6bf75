//! Integration Test Harness
//!
//! This module provides a reusable test harness that:
//! - Boots a Soroban Env at a fixed timestamp
//! - Deploys the native asset, the price feed and the FundMe contract
//! - Creates test accounts (owner/funders/attacker)
//! - Seeds native asset balances
//! - Provides typed contract clients
//! - Supports deterministic time advancement

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

use fund_me::{FundMeContract, FundMeContractClient, DEFAULT_MINIMUM_USD, ONE_NATIVE_UNIT};
use mock_oracle::{MockOracleContract, MockOracleContractClient};

pub use mock_oracle::DEFAULT_STALENESS_THRESHOLD;

/// Price feed decimals
pub const PRICE_DECIMALS: u32 = 8;

/// Native asset price: $2000 with 8 decimals
pub const INITIAL_PRICE: i128 = 200_000_000_000;

/// One whole unit of the native asset, worth $2000 at the initial price
pub const SEND_VALUE: i128 = ONE_NATIVE_UNIT;

/// Default funder balance
pub const DEFAULT_USER_BALANCE: i128 = 1_000 * ONE_NATIVE_UNIT;

/// Smallest contribution worth the default minimum at the initial price
pub const MINIMUM_CONTRIBUTION: i128 = 250_000;

/// Jan 1, 2024 00:00:00 UTC
pub const GENESIS_TIMESTAMP: u64 = 1704067200;

/// One day in seconds
pub const SECONDS_PER_DAY: u64 = 86400;

/// Test accounts container
pub struct TestAccounts {
    pub owner: Address,
    pub feed_admin: Address,
    pub user1: Address,
    pub user2: Address,
    pub user3: Address,
    pub attacker: Address,
}

impl TestAccounts {
    /// Create new test accounts
    pub fn new(e: &Env) -> Self {
        Self {
            owner: Address::generate(e),
            feed_admin: Address::generate(e),
            user1: Address::generate(e),
            user2: Address::generate(e),
            user3: Address::generate(e),
            attacker: Address::generate(e),
        }
    }

    pub fn users(&self) -> [Address; 3] {
        [self.user1.clone(), self.user2.clone(), self.user3.clone()]
    }
}

/// Deployed contract addresses
pub struct DeployedContracts {
    pub fund_me: Address,
    pub price_feed: Address,
    pub token: Address,
}

/// Main test harness structure
pub struct TestHarness {
    pub env: Env,
    pub accounts: TestAccounts,
    pub contracts: DeployedContracts,
}

impl TestHarness {
    /// Create a harness with every contract deployed and initialized
    pub fn new() -> Self {
        let harness = Self::uninitialized();
        harness.fund_me().initialize(
            &harness.accounts.owner,
            &harness.contracts.price_feed,
            &harness.contracts.token,
            &DEFAULT_MINIMUM_USD,
        );
        harness
    }

    /// Deploy everything but leave FundMe uninitialized
    pub fn uninitialized() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(GENESIS_TIMESTAMP);

        let accounts = TestAccounts::new(&env);

        // Native asset (Stellar Asset Contract)
        let token_admin = Address::generate(&env);
        let token = env.register_stellar_asset_contract_v2(token_admin);
        let token_address = token.address();

        let price_feed = env.register_contract(None, MockOracleContract);
        MockOracleContractClient::new(&env, &price_feed).initialize(
            &accounts.feed_admin,
            &PRICE_DECIMALS,
            &INITIAL_PRICE,
            &DEFAULT_STALENESS_THRESHOLD,
        );

        let fund_me = env.register_contract(None, FundMeContract);

        let token_client = StellarAssetClient::new(&env, &token_address);
        for user in accounts.users() {
            token_client.mint(&user, &DEFAULT_USER_BALANCE);
        }
        token_client.mint(&accounts.attacker, &DEFAULT_USER_BALANCE);

        let contracts = DeployedContracts {
            fund_me,
            price_feed,
            token: token_address,
        };

        Self {
            env,
            accounts,
            contracts,
        }
    }

    // ========================================================================
    // Clients
    // ========================================================================

    pub fn fund_me(&self) -> FundMeContractClient<'_> {
        FundMeContractClient::new(&self.env, &self.contracts.fund_me)
    }

    pub fn oracle(&self) -> MockOracleContractClient<'_> {
        MockOracleContractClient::new(&self.env, &self.contracts.price_feed)
    }

    pub fn token_client(&self) -> TokenClient<'_> {
        TokenClient::new(&self.env, &self.contracts.token)
    }

    /// Get stellar asset client for minting
    pub fn token_admin_client(&self) -> StellarAssetClient<'_> {
        StellarAssetClient::new(&self.env, &self.contracts.token)
    }

    // ========================================================================
    // Time Management Helpers
    // ========================================================================

    /// Advance time by a specified number of seconds
    pub fn advance_time(&self, seconds: u64) {
        let mut ledger = self.env.ledger().get();
        ledger.timestamp += seconds;
        ledger.sequence_number += 1;
        self.env.ledger().set(ledger);
    }

    pub fn advance_days(&self, days: u64) {
        self.advance_time(days * SECONDS_PER_DAY);
    }

    pub fn current_timestamp(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    // ========================================================================
    // Funding Helpers
    // ========================================================================

    /// A fresh account holding `DEFAULT_USER_BALANCE`
    pub fn new_funder(&self) -> Address {
        let funder = Address::generate(&self.env);
        self.token_admin_client().mint(&funder, &DEFAULT_USER_BALANCE);
        funder
    }

    pub fn fund(&self, funder: &Address, amount: i128) {
        self.fund_me().fund(funder, &amount);
    }

    pub fn balance(&self, user: &Address) -> i128 {
        self.token_client().balance(user)
    }

    pub fn contract_balance(&self) -> i128 {
        self.balance(&self.contracts.fund_me)
    }

    /// Sum of every recorded contribution
    pub fn recorded_total(&self) -> i128 {
        let client = self.fund_me();
        client
            .get_funders()
            .iter()
            .map(|funder| client.get_address_to_amount_funded(&funder))
            .sum()
    }

    // ========================================================================
    // Oracle Helpers
    // ========================================================================

    /// Publish a new round at the current timestamp
    pub fn set_price(&self, price: i128) {
        self.oracle().update_answer(&self.accounts.feed_admin, &price);
    }

    /// Publish a round that is already older than the staleness threshold
    pub fn set_stale_price(&self, price: i128) {
        let stale_at = self
            .current_timestamp()
            .saturating_sub(DEFAULT_STALENESS_THRESHOLD + 1);
        self.oracle()
            .update_round_data(&self.accounts.feed_admin, &price, &stale_at);
    }

    pub fn pause_oracle(&self) {
        self.oracle().pause(&self.accounts.feed_admin);
    }

    pub fn unpause_oracle(&self) {
        self.oracle().unpause(&self.accounts.feed_admin);
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert a `try_` client call failed with the expected contract error
#[macro_export]
macro_rules! assert_err {
    ($result:expr, $expected:pat) => {
        match $result {
            Err(Ok($expected)) => (),
            Err(e) => panic!("Expected error {:?}, got {:?}", stringify!($expected), e),
            Ok(_) => panic!("Expected error {:?}, got Ok", stringify!($expected)),
        }
    };
}

/// Assert a `try_` client call succeeded and extract its value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(Ok(val)) => val,
            Ok(Err(e)) => panic!("Expected Ok, got undecodable result {:?}", e),
            Err(e) => panic!("Expected Ok, got Err({:?})", e),
        }
    };
}

#[cfg(test)]
mod harness_tests {
    use super::*;

    #[test]
    fn test_harness_creation() {
        let harness = TestHarness::new();

        assert_ne!(harness.accounts.owner, harness.accounts.user1);
        assert_ne!(harness.accounts.user1, harness.accounts.user2);
        assert_ne!(harness.contracts.fund_me, harness.contracts.price_feed);
        assert_eq!(harness.fund_me().get_owner(), harness.accounts.owner);
    }

    #[test]
    fn test_time_advancement() {
        let harness = TestHarness::new();
        assert_eq!(harness.current_timestamp(), GENESIS_TIMESTAMP);

        harness.advance_time(100);
        assert_eq!(harness.current_timestamp(), GENESIS_TIMESTAMP + 100);

        harness.advance_days(1);
        assert_eq!(
            harness.current_timestamp(),
            GENESIS_TIMESTAMP + 100 + SECONDS_PER_DAY
        );
    }

    #[test]
    fn test_token_balances() {
        let harness = TestHarness::new();

        for user in harness.accounts.users() {
            assert_eq!(harness.balance(&user), DEFAULT_USER_BALANCE);
        }
        assert_eq!(harness.balance(&harness.accounts.owner), 0);
        assert_eq!(harness.contract_balance(), 0);
    }

    #[test]
    fn test_oracle_price_setting() {
        let harness = TestHarness::new();

        harness.set_price(INITIAL_PRICE * 2);
        assert_eq!(harness.oracle().latest_price().price, INITIAL_PRICE * 2);
        assert_eq!(harness.oracle().latest_round(), 2);
    }
}
