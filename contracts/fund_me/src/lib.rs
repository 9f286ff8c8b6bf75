#![no_std]

//! FundMe crowdfunding contract.
//!
//! Anyone may fund the contract in the native asset, provided each
//! contribution is worth at least the configured minimum in USD according to
//! an external price feed. The owner recorded at initialization drains the
//! whole balance in a single withdrawal, which also resets the ledger so that
//! funding can start over.

mod constants;
mod price_converter;
mod storage;


pub use constants::*;
pub use price_converter::PriceConverter;
pub use storage::{Config, DataKey};

use shared_utils::{message_for_code, AccessControl, ErrorHelper, Events, SafeMath, Storage};
use soroban_sdk::{contract, contracterror, contractimpl, symbol_short, token, Address, Env, Vec};

// ============================================================================
// Errors (pinned to shared_utils::error_codes)
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundMeError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotOwner = 3,
    InsufficientContribution = 4,
    OracleUnavailable = 5,
    TransferFailed = 6,
    IndexOutOfRange = 7,
    ArithmeticOverflow = 8,
    InvalidConfig = 9,
}

impl FundMeError {
    pub fn message(&self) -> &'static str {
        message_for_code(*self as u32)
    }
}

fn fail(e: &Env, err: FundMeError, context: &str) -> FundMeError {
    ErrorHelper::log_error_with_context(e, context, err.message());
    err
}

// ============================================================================
// Contract
// ============================================================================

#[contract]
pub struct FundMeContract;

#[contractimpl]
impl FundMeContract {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the contract. Call once.
    ///
    /// # Arguments
    /// * `owner` - The deploying identity; the only address allowed to withdraw
    /// * `price_feed` - Feed answering `latest_price` with the native asset's USD price
    /// * `native_token` - Stellar Asset Contract of the native asset
    /// * `minimum_usd` - Minimum USD value per contribution, in 7-decimal scale
    pub fn initialize(
        e: Env,
        owner: Address,
        price_feed: Address,
        native_token: Address,
        minimum_usd: i128,
    ) -> Result<(), FundMeError> {
        if Storage::is_initialized(&e) {
            return Err(fail(&e, FundMeError::AlreadyInitialized, "initialize"));
        }
        owner.require_auth();

        if minimum_usd <= 0 {
            return Err(fail(&e, FundMeError::InvalidConfig, "initialize"));
        }

        Storage::set_owner(&e, &owner);
        Storage::set_initialized(&e);
        storage::save_config(
            &e,
            &Config {
                price_feed: price_feed.clone(),
                native_token,
                minimum_usd,
            },
        );

        Events::emit(&e, symbol_short!("init"), (owner, price_feed, minimum_usd));

        Ok(())
    }

    // ========================================================================
    // Funding
    // ========================================================================

    /// Contribute `amount` stroops of the native asset.
    ///
    /// The contribution must be worth at least the minimum USD value at the
    /// feed's current price. A funder is appended to the funders list on
    /// their first contribution since the last withdrawal.
    pub fn fund(e: Env, funder: Address, amount: i128) -> Result<(), FundMeError> {
        funder.require_auth();
        let config = Self::load_config(&e, "fund")?;

        let price = PriceConverter::get_price(&e, &config.price_feed)
            .map_err(|err| fail(&e, err, "fund"))?;
        let usd_value = PriceConverter::get_conversion_rate(amount, &price)
            .map_err(|err| fail(&e, err, "fund"))?;
        if usd_value < config.minimum_usd {
            return Err(fail(&e, FundMeError::InsufficientContribution, "fund"));
        }

        let previous = storage::get_amount_funded(&e, &funder);
        let total = SafeMath::add(previous, amount)
            .ok_or_else(|| fail(&e, FundMeError::ArithmeticOverflow, "fund"))?;

        let token_client = token::Client::new(&e, &config.native_token);
        match token_client.try_transfer(&funder, &e.current_contract_address(), &amount) {
            Ok(Ok(())) => {}
            _ => return Err(fail(&e, FundMeError::TransferFailed, "fund")),
        }

        storage::set_amount_funded(&e, &funder, total);
        if previous == 0 {
            storage::push_funder(&e, &funder);
        }

        Events::emit_funded(&e, &funder, amount, total);

        Ok(())
    }

    // ========================================================================
    // Withdrawal
    // ========================================================================

    /// Transfer the whole balance to the owner and reset the ledger.
    ///
    /// Walks the funders list by index, re-reading it from storage for every
    /// funder.
    ///
    /// # Returns
    /// The amount transferred to the owner
    pub fn withdraw(e: Env, caller: Address) -> Result<i128, FundMeError> {
        let config = Self::authorize_withdrawal(&e, &caller, "withdraw")?;

        let funders_count = storage::get_funders_count(&e);
        for index in 0..funders_count {
            if let Some(funder) = storage::get_funder(&e, index) {
                storage::clear_amount_funded(&e, &funder);
            }
        }
        storage::clear_funders(&e);

        Self::pay_owner(&e, &caller, &config, funders_count, "withdraw")
    }

    /// Same as [`FundMeContract::withdraw`], loading the funders list once.
    pub fn cheaper_withdraw(e: Env, caller: Address) -> Result<i128, FundMeError> {
        let config = Self::authorize_withdrawal(&e, &caller, "cheaper_withdraw")?;

        let funders = storage::get_funders(&e);
        for funder in funders.iter() {
            storage::clear_amount_funded(&e, &funder);
        }
        storage::clear_funders(&e);

        Self::pay_owner(&e, &caller, &config, funders.len(), "cheaper_withdraw")
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn get_owner(e: Env) -> Result<Address, FundMeError> {
        Storage::get_owner(&e).ok_or(FundMeError::NotInitialized)
    }

    pub fn get_price_feed(e: Env) -> Result<Address, FundMeError> {
        Ok(Self::load_config(&e, "get_price_feed")?.price_feed)
    }

    pub fn get_native_token(e: Env) -> Result<Address, FundMeError> {
        Ok(Self::load_config(&e, "get_native_token")?.native_token)
    }

    pub fn get_minimum_usd(e: Env) -> Result<i128, FundMeError> {
        Ok(Self::load_config(&e, "get_minimum_usd")?.minimum_usd)
    }

    /// Recorded contribution of `funder` since the last withdrawal
    pub fn get_address_to_amount_funded(e: Env, funder: Address) -> i128 {
        storage::get_amount_funded(&e, &funder)
    }

    /// Funder at `index` in order of first contribution
    pub fn get_funder(e: Env, index: u32) -> Result<Address, FundMeError> {
        storage::get_funder(&e, index).ok_or(FundMeError::IndexOutOfRange)
    }

    pub fn get_funders(e: Env) -> Vec<Address> {
        storage::get_funders(&e)
    }

    pub fn get_funders_count(e: Env) -> u32 {
        storage::get_funders_count(&e)
    }

    /// Native asset held by the contract
    pub fn get_balance(e: Env) -> Result<i128, FundMeError> {
        let config = Self::load_config(&e, "get_balance")?;
        Ok(token::Client::new(&e, &config.native_token).balance(&e.current_contract_address()))
    }

    /// USD value of `amount` stroops at the feed's current price
    pub fn get_conversion_rate(e: Env, amount: i128) -> Result<i128, FundMeError> {
        let config = Self::load_config(&e, "get_conversion_rate")?;
        let price = PriceConverter::get_price(&e, &config.price_feed)?;
        PriceConverter::get_conversion_rate(amount, &price)
    }

    /// Interface version of the price feed
    pub fn get_version(e: Env) -> Result<u32, FundMeError> {
        let config = Self::load_config(&e, "get_version")?;
        PriceConverter::get_version(&e, &config.price_feed)
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn load_config(e: &Env, context: &str) -> Result<Config, FundMeError> {
        storage::get_config(e).ok_or_else(|| fail(e, FundMeError::NotInitialized, context))
    }

    fn authorize_withdrawal(e: &Env, caller: &Address, context: &str) -> Result<Config, FundMeError> {
        let config = Self::load_config(e, context)?;
        if !AccessControl::authorize_owner(e, caller) {
            return Err(fail(e, FundMeError::NotOwner, context));
        }
        Ok(config)
    }

    /// Send the entire balance to `owner`. Ledger state must already be
    /// cleared; a failed transfer makes the host roll that back.
    fn pay_owner(
        e: &Env,
        owner: &Address,
        config: &Config,
        funders_cleared: u32,
        context: &str,
    ) -> Result<i128, FundMeError> {
        let token_client = token::Client::new(e, &config.native_token);
        let contract = e.current_contract_address();
        let balance = token_client.balance(&contract);

        if balance > 0 {
            match token_client.try_transfer(&contract, owner, &balance) {
                Ok(Ok(())) => {}
                _ => return Err(fail(e, FundMeError::TransferFailed, context)),
            }
        }

        Events::emit_withdrawn(e, owner, balance, funders_cleared);

        Ok(balance)
    }
}
