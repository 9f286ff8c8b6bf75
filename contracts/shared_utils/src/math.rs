//! Checked fixed-point math for amount and price conversions
//!
//! Every operation returns `None` instead of wrapping or panicking so that
//! callers can turn an overflow into their own contract error.

/// Largest exponent for which `10^exp` fits in an `i128`
pub const MAX_POW10_EXPONENT: u32 = 38;

/// Safe math operations to prevent overflow/underflow
pub struct SafeMath;

impl SafeMath {
    /// Add two i128 values, `None` on overflow
    pub fn add(a: i128, b: i128) -> Option<i128> {
        a.checked_add(b)
    }

    /// Multiply two i128 values, `None` on overflow
    pub fn mul(a: i128, b: i128) -> Option<i128> {
        a.checked_mul(b)
    }

    /// Divide two i128 values, `None` on division by zero or overflow
    pub fn div(a: i128, b: i128) -> Option<i128> {
        a.checked_div(b)
    }

    /// `10^exp`, `None` when the result does not fit in an i128
    pub fn pow10(exp: u32) -> Option<i128> {
        10i128.checked_pow(exp)
    }

    /// Compute `value * numerator / 10^decimals`, truncating toward zero
    ///
    /// # Arguments
    /// * `value` - The base value
    /// * `numerator` - The multiplier, itself scaled by `10^decimals`
    /// * `decimals` - Decimal places carried by `numerator`
    ///
    /// # Returns
    /// The rescaled product, or `None` if any intermediate step overflows
    pub fn mul_div_pow10(value: i128, numerator: i128, decimals: u32) -> Option<i128> {
        let scale = Self::pow10(decimals)?;
        Self::div(Self::mul(value, numerator)?, scale)
    }
}
