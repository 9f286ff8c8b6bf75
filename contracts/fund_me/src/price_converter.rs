//! Price feed adapter and USD conversion.

use crate::FundMeError;
use shared_utils::{methods, PriceData, SafeMath};
use soroban_sdk::{Address, Env, Symbol, Vec};

pub struct PriceConverter;

impl PriceConverter {
    /// Read the latest round from `feed`
    ///
    /// Any failure of the feed (missing contract, contract error, an answer
    /// that does not decode as [`PriceData`], a non-positive price) is
    /// reported as [`FundMeError::OracleUnavailable`].
    pub fn get_price(e: &Env, feed: &Address) -> Result<PriceData, FundMeError> {
        let result = e.try_invoke_contract::<PriceData, soroban_sdk::Error>(
            feed,
            &Symbol::new(e, methods::LATEST_PRICE),
            Vec::new(e),
        );

        match result {
            Ok(Ok(data)) if data.price > 0 => Ok(data),
            _ => Err(FundMeError::OracleUnavailable),
        }
    }

    /// USD value of `amount` stroops at `price`
    ///
    /// Computes `amount * price / 10^decimals`. The result keeps the native
    /// asset's 7-decimal scale, so it compares directly against a minimum
    /// expressed in that scale.
    pub fn get_conversion_rate(amount: i128, price: &PriceData) -> Result<i128, FundMeError> {
        if SafeMath::pow10(price.decimals).is_none() {
            return Err(FundMeError::OracleUnavailable);
        }
        SafeMath::mul_div_pow10(amount, price.price, price.decimals)
            .ok_or(FundMeError::ArithmeticOverflow)
    }

    /// Interface version reported by `feed`
    pub fn get_version(e: &Env, feed: &Address) -> Result<u32, FundMeError> {
        let result = e.try_invoke_contract::<u32, soroban_sdk::Error>(
            feed,
            &Symbol::new(e, methods::VERSION),
            Vec::new(e),
        );

        match result {
            Ok(Ok(version)) => Ok(version),
            _ => Err(FundMeError::OracleUnavailable),
        }
    }
}
