/// Decimal places of the native asset (1 unit = 10^7 stroops)
pub const NATIVE_DECIMALS: u32 = 7;

/// One whole unit of the native asset, in stroops
pub const ONE_NATIVE_UNIT: i128 = 10i128.pow(NATIVE_DECIMALS);

/// $50, expressed in the native asset's 7-decimal scale
///
/// USD values produced by the price converter share the native asset's scale,
/// so the minimum is configured in that scale too.
pub const DEFAULT_MINIMUM_USD: i128 = 50 * ONE_NATIVE_UNIT;
